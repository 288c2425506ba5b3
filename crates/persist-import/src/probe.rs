//! Read/write/delete round trip against the programs collection.

use persist_core::responses::ImportResult;
use persist_db::store::{NewProgram, WorkoutStore};
use tracing::{debug, warn};

pub const TEST_PROGRAM_PREFIX: &str = "TEST_PROGRAM_";

fn test_program() -> NewProgram {
    NewProgram {
        name: format!(
            "{TEST_PROGRAM_PREFIX}{}",
            chrono::Utc::now().timestamp_millis()
        ),
        full_name: "Test Program".to_string(),
        week_title: Some("Test Week".to_string()),
        start_date: Some("2025-01-01".to_string()),
        end_date: Some("2025-01-07".to_string()),
    }
}

/// Check that the store is reachable and the schema accepts a program.
///
/// Lists one program, inserts a throwaway program, then deletes it again. A
/// failed clean-up is logged but does not fail the probe.
pub async fn probe<S: WorkoutStore>(store: &S) -> ImportResult {
    let existing = match store.list_programs(1).await {
        Ok(programs) => programs,
        Err(err) => {
            return ImportResult::failed(
                "Cannot read from programs table",
                err.diagnostic().to_string(),
                None,
            );
        }
    };
    debug!(found = existing.len(), "probe read succeeded");

    let inserted = match store.insert_program(&test_program()).await {
        Ok(program) => program,
        Err(err) => {
            return ImportResult::failed(
                "Cannot insert test program",
                err.diagnostic().to_string(),
                None,
            );
        }
    };
    debug!(id = %inserted.id, name = %inserted.name, "probe insert succeeded");

    if let Err(err) = store.delete_program(&inserted.id).await {
        warn!(id = %inserted.id, error = %err, "could not remove probe program");
    }

    ImportResult::succeeded(
        format!(
            "Database connection and schema test successful! Found {} existing programs.",
            existing.len()
        ),
        None,
    )
}
