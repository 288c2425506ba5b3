use persist_db::repos::exercise_log::ExerciseLogInput;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::commands::shared::lookup::require_exercise;
use crate::context::AppContext;
use crate::output::output;

/// Handle `persist log`.
pub async fn handle(action: &LogCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LogCommands::Toggle { id } => {
            require_exercise(ctx, id).await?;
            let log = ctx.service.toggle_exercise_completion(id).await?;
            output(&log, flags.format)
        }
        LogCommands::Set {
            id,
            weight,
            reps,
            notes,
            completed,
        } => {
            require_exercise(ctx, id).await?;
            let input = ExerciseLogInput {
                exercise_id: id.clone(),
                completed: *completed,
                weight: *weight,
                reps: *reps,
                notes: notes.clone(),
            };
            let log = ctx.service.upsert_exercise_log(&input).await?;
            output(&log, flags.format)
        }
        LogCommands::Previous { id } => {
            require_exercise(ctx, id).await?;
            let log = ctx.service.previous_exercise_log(id).await?;
            output(&log, flags.format)
        }
    }
}
