use persist_core::progress::workout_progress;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DayCommands;
use crate::commands::shared::lookup::require_day;
use crate::context::AppContext;
use crate::output::output;

/// Handle `persist day`.
pub async fn handle(action: &DayCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        DayCommands::Show { program, day } => {
            let workout = require_day(ctx, program, day).await?;
            output(&workout, flags.format)
        }
        DayCommands::Progress { program, day } => {
            let workout = require_day(ctx, program, day).await?;
            let logs = ctx.service.logs_for_day(&workout.day.id).await?;
            output(&workout_progress(&workout, &logs), flags.format)
        }
        DayCommands::Complete { program, day } => {
            let workout = require_day(ctx, program, day).await?;
            let completion = ctx.service.complete_workout(&workout.day.id).await?;
            output(&completion, flags.format)
        }
    }
}
