use clap::Subcommand;

/// Program day commands. Days are addressed by program name and weekday.
#[derive(Clone, Debug, Subcommand)]
pub enum DayCommands {
    /// Show a day's sections, components, and exercises.
    Show { program: String, day: String },
    /// Completion totals for a day, overall and per section.
    Progress { program: String, day: String },
    /// Mark every exercise of a day done and record the completion.
    Complete { program: String, day: String },
}
