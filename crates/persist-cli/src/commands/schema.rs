use persist_core::document::WorkoutDocument;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::output::output;

/// Handle `persist schema`: JSON Schema of one import document element.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(WorkoutDocument);
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(&schema, format)
}
