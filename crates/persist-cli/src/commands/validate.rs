use anyhow::bail;
use persist_config::PersistConfig;
use persist_import::InputGuard;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::file;
use crate::output::output;

/// Handle `persist validate`. Never opens the database.
pub async fn handle(args: &ValidateArgs, config: &PersistConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let flow = file::select(&args.file, InputGuard::from(&config.import)).await?;
    let report = file::report(&flow)?;
    output(report, flags.format)?;

    if !report.is_valid {
        bail!("{} failed validation with {} error(s)", args.file, report.errors.len());
    }
    Ok(())
}
