//! Service layer hosting every repository method.
//!
//! `WorkoutService` wraps `PersistDb` (raw database access). All repo methods
//! are implemented as `impl WorkoutService` blocks under `repos/`.

use crate::PersistDb;
use crate::error::DatabaseError;

/// Data-access handle for workout plans and training logs.
///
/// Built once by the caller and borrowed by the importer, probe, and wipe.
pub struct WorkoutService {
    db: PersistDb,
}

impl WorkoutService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: PersistDb::open_local(db_path).await?,
        })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: PersistDb::open_remote(url, auth_token).await?,
        })
    }

    /// Create from an existing `PersistDb`.
    #[must_use]
    pub const fn from_db(db: PersistDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PersistDb {
        &self.db
    }
}
