use clap::Subcommand;

/// Exercise log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Flip the completion flag of an exercise.
    Toggle {
        /// Exercise ID.
        id: String,
    },
    /// Record weight, reps, and notes for an exercise.
    Set {
        /// Exercise ID.
        id: String,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        reps: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        completed: bool,
    },
    /// Most recent log with weight and reps recorded.
    Previous {
        /// Exercise ID.
        id: String,
    },
}
