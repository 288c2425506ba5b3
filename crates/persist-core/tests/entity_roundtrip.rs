//! Serde roundtrip and JsonSchema validation tests for entity and response
//! types, plus schema checks for the import document.

use chrono::Utc;
use persist_core::document::WorkoutDocument;
use persist_core::entities::*;
use persist_core::enums::*;
use persist_core::progress::{SectionProgress, WorkoutProgress};
use persist_core::responses::*;
use rstest::rstest;
use schemars::schema_for;
use serde_json::json;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    program_roundtrip,
    Program,
    Program {
        id: "prg-a3f8b2c1".into(),
        name: "Strength".into(),
        full_name: "Strength Block".into(),
        week_title: Some("Week 1".into()),
        start_date: Some("2025-01-06".into()),
        end_date: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    day_roundtrip,
    ProgramDay,
    ProgramDay {
        id: "day-0c1d2e3f".into(),
        program_id: "prg-a3f8b2c1".into(),
        day_name: "Monday".into(),
        date: Some("2025-01-06".into()),
        day_title: Some("Lower Body".into()),
        coach_notes: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    section_roundtrip,
    WorkoutSection,
    WorkoutSection {
        id: "sec-11223344".into(),
        day_id: "day-0c1d2e3f".into(),
        section_type: "Main Work".into(),
        section_letter: Some("B".into()),
        order_index: 1,
        duration: Some("20 min".into()),
        format_type: Some("emom".into()),
        format_structure: Some("every 2 min".into()),
        format_interval_seconds: Some(120),
        format_total_sets: Some(10),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    component_roundtrip,
    WorkoutComponent,
    WorkoutComponent {
        id: "cmp-55667788".into(),
        section_id: "sec-11223344".into(),
        component_type: "superset".into(),
        order_index: 0,
        rounds: Some(3),
        transition: Some("rest 90s".into()),
        loading_note: None,
        progression_note: Some("add 2.5kg".into()),
        intention_note: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    exercise_roundtrip,
    Exercise,
    Exercise {
        id: "exr-99aabbcc".into(),
        component_id: "cmp-55667788".into(),
        name: "Back Squat".into(),
        order_index: 0,
        sets_reps: Some("3 × 8 @2011 RPE8".into()),
        tempo: Some("2011".into()),
        rpe: Some("8".into()),
        duration: None,
        rest_after: Some("2 min".into()),
        track_weight: true,
        alternatives: Some(vec!["Front Squat".into()]),
        loading_note: None,
        progression_note: None,
        notes: None,
        set_type: Some("working".into()),
        set_number: Some(1),
        set_range: Some("3".into()),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    exercise_log_roundtrip,
    ExerciseLog,
    ExerciseLog {
        id: "log-ddeeff00".into(),
        exercise_id: "exr-99aabbcc".into(),
        weight: Some(102.5),
        reps: Some(8),
        completed: true,
        logged_at: Utc::now(),
        notes: None,
    }
);

roundtrip_and_validate!(
    completion_roundtrip,
    WorkoutCompletion,
    WorkoutCompletion {
        id: "wcp-12345678".into(),
        day_id: "day-0c1d2e3f".into(),
        completed_at: Utc::now(),
        total_exercises: Some(12),
        completed_exercises: Some(12),
        notes: None,
    }
);

roundtrip_and_validate!(
    validation_report_roundtrip,
    ValidationReport,
    ValidationReport {
        is_valid: true,
        errors: vec![],
        warnings: vec!["Day \"Friday\" in \"Engine\" missing sections array".into()],
        summary: ValidationSummary {
            total_programs: 2,
            program_names: vec!["Strength".into(), "Engine".into()],
            total_days: 5,
            total_sections: 9,
            total_components: 14,
            total_exercises: 31,
            week_info: Some(WeekInfoSummary {
                title: Some("Week 1".into()),
                start_date: Some("2025-01-06".into()),
                end_date: Some("2025-01-12".into()),
            }),
            source_file: Some("week1.pdf".into()),
        },
    }
);

roundtrip_and_validate!(
    import_result_roundtrip,
    ImportResult,
    ImportResult::succeeded(
        "Successfully imported 1 programs with 2 days, 3 sections, 4 components, and 5 exercises",
        Some(ImportStats {
            programs: 1,
            days: 2,
            sections: 3,
            components: 4,
            exercises: 5,
        }),
    )
);

roundtrip_and_validate!(
    wipe_report_roundtrip,
    WipeReport,
    WipeReport {
        collections: Collection::WIPE_ORDER
            .into_iter()
            .map(|collection| CollectionCount {
                collection,
                deleted: 2,
            })
            .collect(),
    }
);

roundtrip_and_validate!(
    workout_progress_roundtrip,
    WorkoutProgress,
    WorkoutProgress {
        total_exercises: 4,
        completed_exercises: 1,
        completion_percentage: 25,
        section_progress: vec![SectionProgress {
            section_id: "sec-11223344".into(),
            section_name: "B - Main Work".into(),
            total_exercises: 4,
            completed_exercises: 1,
            completion_percentage: 25,
        }],
    }
);

#[rstest]
#[case(ImportStatus::Idle, "\"idle\"")]
#[case(ImportStatus::Validating, "\"validating\"")]
#[case(ImportStatus::Importing, "\"importing\"")]
#[case(ImportStatus::Success, "\"success\"")]
#[case(ImportStatus::Error, "\"error\"")]
fn import_status_serializes_snake_case(#[case] status: ImportStatus, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&status).unwrap(), expected);
}

fn sample_document() -> serde_json::Value {
    json!({
        "source_file": "week1.pdf",
        "week_info": {"week_title": "Week 1", "start_date": "2025-01-06", "end_date": "2025-01-12"},
        "programs": {
            "Strength": {
                "full_name": "Strength Block",
                "days": {
                    "Monday": {
                        "date": "2025-01-06",
                        "day_title": "Lower",
                        "sections": [
                            {
                                "section_type": "Warm-up",
                                "exercises": [{"name": "Bike", "duration": 5}]
                            },
                            {
                                "section_type": "Main",
                                "section_letter": "A",
                                "format": {"type": "emom", "interval_seconds": "90"},
                                "components": [
                                    {
                                        "type": "single_lift",
                                        "exercise": {
                                            "name": "Back Squat",
                                            "rpe": 8,
                                            "sets": [{"set_type": "working", "range": "3", "reps": 8}]
                                        }
                                    },
                                    {
                                        "type": "superset",
                                        "rounds": 3,
                                        "exercises": [{"name": "Row"}, {"name": "Plank", "track_weight": false}]
                                    }
                                ]
                            }
                        ]
                    }
                }
            }
        }
    })
}

#[test]
fn sample_document_matches_schema() {
    let schema = serde_json::to_value(schema_for!(WorkoutDocument)).unwrap();
    let errors = validate_against_schema(&schema, &sample_document());
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let doc = WorkoutDocument::from_value(&json!([sample_document()])).unwrap();
    assert_eq!(doc.exercise_count(), 4);
}

#[test]
fn schema_rejects_programs_array() {
    let schema = serde_json::to_value(schema_for!(WorkoutDocument)).unwrap();
    let mut doc = sample_document();
    doc["programs"] = json!([]);
    assert!(!validate_against_schema(&schema, &doc).is_empty());
}
