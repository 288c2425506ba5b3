//! Confirmation-guarded removal of every workout row.

use persist_core::enums::Collection;
use persist_core::responses::{CollectionCount, WipeReport};
use persist_db::store::WorkoutStore;
use tracing::{info, warn};

use crate::error::ImportError;

/// The exact text a caller must supply to wipe the store.
pub const WIPE_CONFIRMATION: &str = "DELETE ALL WORKOUT DATA";

/// Delete all logs, completions, exercises, components, sections, days, and
/// programs, children first.
///
/// # Errors
///
/// Returns `ImportError::ConfirmationMismatch` without touching the store
/// unless `confirmation` equals [`WIPE_CONFIRMATION`], and
/// `ImportError::Database` if a delete fails. Collections cleared before the
/// failure stay cleared.
pub async fn clear_all_workout_data<S: WorkoutStore>(
    store: &S,
    confirmation: &str,
) -> Result<WipeReport, ImportError> {
    if confirmation != WIPE_CONFIRMATION {
        warn!("wipe refused: confirmation text does not match");
        return Err(ImportError::ConfirmationMismatch);
    }

    let mut report = WipeReport::default();
    for collection in Collection::WIPE_ORDER {
        let deleted = store.clear_collection(collection).await?;
        report.collections.push(CollectionCount {
            collection,
            deleted,
        });
    }

    info!(total = report.total_deleted(), "all workout data deleted");
    Ok(report)
}
