use anyhow::bail;
use persist_import::probe::probe;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `persist probe`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = probe(&ctx.service).await;
    output(&result, flags.format)?;
    if !result.success {
        bail!("{}", result.message);
    }
    Ok(())
}
