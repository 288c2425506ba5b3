use std::path::Path;

use anyhow::Context;
use persist_core::responses::ValidationReport;
use persist_import::{ImportWorkflow, InputGuard};

/// Read an import file and run it through guard, parse, and validation.
///
/// The workflow comes back `idle` for a valid file and `error` otherwise.
pub async fn select(path: &str, guard: InputGuard) -> anyhow::Result<ImportWorkflow> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {path}"))?;
    let name = Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());

    let mut flow = ImportWorkflow::new(guard);
    flow.select_file(&name, &bytes)?;
    Ok(flow)
}

/// The report of a selected file.
pub fn report(flow: &ImportWorkflow) -> anyhow::Result<&ValidationReport> {
    flow.report().context("no validation report")
}
