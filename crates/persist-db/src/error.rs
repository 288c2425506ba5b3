//! Database error types for persist-db.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Structured view of a backend failure: what a caller shows to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendDiagnostic {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl fmt::Display for BackendDiagnostic {
    /// `"<message> - Code: <code> - Details: <details> - Hint: <hint>"`, with
    /// `N/A` for absent parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Code: {} - Details: {} - Hint: {}",
            self.message,
            self.code,
            self.details.as_deref().unwrap_or("N/A"),
            self.hint.as_deref().unwrap_or("N/A"),
        )
    }
}

fn hint_for(message: &str) -> Option<String> {
    let hint = if message.contains("UNIQUE constraint failed") {
        "A row with the same natural key already exists"
    } else if message.contains("FOREIGN KEY constraint failed") {
        "The parent row is missing; it may have been deleted concurrently"
    } else if message.contains("no such table") {
        "The schema is missing; open the database through persist-db to run migrations"
    } else if message.contains("database is locked") {
        "Another process holds a write lock on the database file"
    } else {
        return None;
    };
    Some(hint.to_string())
}

impl DatabaseError {
    /// Break the error into code, message, details, and hint.
    #[must_use]
    pub fn diagnostic(&self) -> BackendDiagnostic {
        let (code, message, details) = match self {
            Self::Query(detail) => ("QUERY".to_string(), "Query failed".to_string(), Some(detail.clone())),
            Self::Migration(detail) => (
                "MIGRATION".to_string(),
                "Migration failed".to_string(),
                Some(detail.clone()),
            ),
            Self::NoResult => ("NO_RESULT".to_string(), self.to_string(), None),
            Self::InvalidState(detail) => (
                "INVALID_STATE".to_string(),
                "Invalid state".to_string(),
                Some(detail.clone()),
            ),
            Self::LibSql(libsql::Error::SqliteFailure(code, detail)) => {
                (format!("SQLITE_{code}"), detail.clone(), None)
            }
            Self::LibSql(inner) => ("LIBSQL".to_string(), inner.to_string(), None),
            Self::Other(inner) => ("OTHER".to_string(), format!("{inner:#}"), None),
        };
        let hint = hint_for(&message).or_else(|| details.as_deref().and_then(hint_for));
        BackendDiagnostic {
            code,
            message,
            details,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_uses_na_for_missing_parts() {
        let diag = DatabaseError::NoResult.diagnostic();
        assert_eq!(
            diag.to_string(),
            "No result returned - Code: NO_RESULT - Details: N/A - Hint: N/A"
        );
    }

    #[test]
    fn constraint_failures_get_a_hint() {
        let diag = DatabaseError::Query("UNIQUE constraint failed: programs.name".into()).diagnostic();
        assert_eq!(diag.code, "QUERY");
        assert_eq!(diag.details.as_deref(), Some("UNIQUE constraint failed: programs.name"));
        assert_eq!(
            diag.hint.as_deref(),
            Some("A row with the same natural key already exists")
        );
    }

    #[test]
    fn other_errors_keep_their_chain() {
        let err = DatabaseError::Other(anyhow::anyhow!("inner").context("outer"));
        assert_eq!(err.diagnostic().message, "outer: inner");
    }
}
