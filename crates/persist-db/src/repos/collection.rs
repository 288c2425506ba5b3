//! Whole-collection deletes used by the bulk wipe.

use persist_core::enums::Collection;

use crate::error::DatabaseError;
use crate::service::WorkoutService;

impl WorkoutService {
    /// Delete every row of one collection. Returns the number of rows removed.
    ///
    /// With foreign keys on, clearing a parent collection cascades into its
    /// children; clear in [`Collection::WIPE_ORDER`] to get accurate counts.
    pub async fn clear_collection(&self, collection: Collection) -> Result<u64, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute(&format!("DELETE FROM {}", collection.as_str()), ())
            .await?;
        tracing::debug!(collection = collection.as_str(), removed, "cleared collection");
        Ok(removed)
    }

    /// Number of rows in one collection.
    pub async fn count_rows(&self, collection: Collection) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {}", collection.as_str()), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|_| DatabaseError::InvalidState(format!("negative count {count}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{seed_day, test_service};
    use persist_core::enums::Collection;

    #[tokio::test]
    async fn wipe_order_reports_each_collection() {
        let svc = test_service().await;
        let (day_id, ids) = seed_day(&svc, "Strength", "Monday").await;
        svc.toggle_exercise_completion(&ids[0]).await.unwrap();
        svc.complete_workout(&day_id).await.unwrap();

        let mut counts = Vec::new();
        for collection in Collection::WIPE_ORDER {
            counts.push(svc.clear_collection(collection).await.unwrap());
        }
        // logs, completions, exercises, components, sections, days, programs
        assert_eq!(counts, vec![2, 1, 2, 1, 1, 1, 1]);
        for collection in Collection::WIPE_ORDER {
            assert_eq!(svc.count_rows(collection).await.unwrap(), 0);
        }
    }
}
