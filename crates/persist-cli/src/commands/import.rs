use anyhow::bail;
use persist_import::{ErrorPolicy, Importer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::commands::shared::file;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `persist import`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut flow = file::select(&args.file, ctx.input_guard()).await?;
    let report = file::report(&flow)?;

    if !report.is_valid || args.dry_run {
        output(report, flags.format)?;
        if !report.is_valid {
            bail!("{} failed validation; nothing imported", args.file);
        }
        return Ok(());
    }
    for warning in &report.warnings {
        tracing::warn!(file = %args.file, "{warning}");
    }

    let policy = if args.strict {
        ErrorPolicy::strict()
    } else {
        ErrorPolicy::default()
    };
    let importer = Importer::new(&ctx.service).with_policy(policy);

    let progress = Progress::spinner(&format!("Importing {}", args.file));
    let result = flow.import(&importer).await?;
    if result.success {
        progress.finish_ok("import complete");
    } else {
        progress.finish_err("import failed");
    }

    output(result, flags.format)?;
    if !result.success {
        bail!("{}", result.message);
    }
    Ok(())
}
