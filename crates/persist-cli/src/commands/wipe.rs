use anyhow::bail;
use persist_import::ImportError;
use persist_import::wipe::{WIPE_CONFIRMATION, clear_all_workout_data};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WipeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `persist wipe`.
pub async fn handle(args: &WipeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match clear_all_workout_data(&ctx.service, &args.confirm).await {
        Ok(report) => output(&report, flags.format),
        Err(ImportError::ConfirmationMismatch) => {
            bail!("wipe refused: pass --confirm \"{WIPE_CONFIRMATION}\" to delete all workout data")
        }
        Err(error) => Err(error.into()),
    }
}
