//! Structural validation of an import document.
//!
//! Walks the untyped JSON so every problem is reported at once, collecting
//! summary counts on the way. Never touches storage.

use persist_core::document::WorkoutDocument;
use persist_core::enums::ComponentType;
use persist_core::responses::{ValidationReport, WeekInfoSummary};
use serde_json::{Map, Value};

pub const NOT_AN_ARRAY: &str = "JSON must be an array with at least one object";

const REQUIRED_FIELDS: [&str; 2] = ["source_file", "programs"];

/// Absent, `null`, `false`, and `""` all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn array_len(value: Option<&Value>) -> u32 {
    value
        .and_then(Value::as_array)
        .map_or(0, |items| count(items.len()))
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Validate the raw value of an import file.
///
/// The report is valid exactly when no error was found. A valid report
/// guarantees [`WorkoutDocument::from_value`] succeeds on the same value.
#[must_use]
pub fn validate(value: &Value) -> ValidationReport {
    let Some(first) = value.as_array().and_then(|items| items.first()) else {
        return ValidationReport::rejected(NOT_AN_ARRAY);
    };

    let mut report = ValidationReport::default();
    let root = first.as_object();
    let field = |name: &str| root.and_then(|r| r.get(name));

    for name in REQUIRED_FIELDS {
        if is_missing(field(name)) {
            report.errors.push(format!("Missing required field: {name}"));
        }
    }

    report.summary.source_file = scalar_text(field("source_file"));
    if let Some(week) = field("week_info").and_then(Value::as_object) {
        report.summary.week_info = Some(WeekInfoSummary {
            title: scalar_text(week.get("week_title")),
            start_date: scalar_text(week.get("start_date")),
            end_date: scalar_text(week.get("end_date")),
        });
    }

    match field("programs") {
        Some(Value::Object(programs)) => walk_programs(programs, &mut report),
        programs if !is_missing(programs) => {
            report.errors.push("Field \"programs\" must be an object keyed by program name".to_string());
        }
        _ => {}
    }

    if report.errors.is_empty() {
        if let Err(err) = WorkoutDocument::from_value(value) {
            report.errors.push(err.to_string());
        }
    }

    report.is_valid = report.errors.is_empty();
    report
}

fn walk_programs(programs: &Map<String, Value>, report: &mut ValidationReport) {
    for (program_name, program) in programs {
        report.summary.total_programs += 1;
        report.summary.program_names.push(program_name.clone());

        let Some(days) = program.get("days").and_then(Value::as_object) else {
            report
                .errors
                .push(format!("Program \"{program_name}\" missing days object"));
            continue;
        };

        for (day_name, day) in days {
            report.summary.total_days += 1;
            if !day.is_object() {
                report.errors.push(format!(
                    "Day \"{day_name}\" in \"{program_name}\" must be an object"
                ));
                continue;
            }
            let Some(sections) = day.get("sections").and_then(Value::as_array) else {
                report.warnings.push(format!(
                    "Day \"{day_name}\" in \"{program_name}\" missing sections array"
                ));
                continue;
            };

            for (index, section) in sections.iter().enumerate() {
                report.summary.total_sections += 1;
                let location = SectionLocation {
                    program: program_name,
                    day: day_name,
                    position: index + 1,
                };
                walk_section(section, &location, report);
            }
        }
    }
}

struct SectionLocation<'a> {
    program: &'a str,
    day: &'a str,
    position: usize,
}

impl std::fmt::Display for SectionLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "section {} of \"{}\" in \"{}\"",
            self.position, self.day, self.program
        )
    }
}

fn walk_section(section: &Value, location: &SectionLocation<'_>, report: &mut ValidationReport) {
    let components = section.get("components").and_then(Value::as_array);
    let flat = section.get("exercises").and_then(Value::as_array);

    let Some(components) = components else {
        report.summary.total_exercises += flat.map_or(0, |e| count(e.len()));
        return;
    };

    if flat.is_some() {
        report.warnings.push(format!(
            "Both components and exercises in {location}; section-level exercises are ignored"
        ));
    }

    for component in components {
        report.summary.total_components += 1;
        if let Some(tag) = component.get("type").and_then(Value::as_str) {
            if ComponentType::parse(tag).is_none() {
                report.warnings.push(format!(
                    "Unknown component type \"{tag}\" in {location}; stored as-is"
                ));
            }
        }
        let single = u32::from(component.get("exercise").is_some_and(Value::is_object));
        report.summary.total_exercises += single + array_len(component.get("exercises"));
    }
}
