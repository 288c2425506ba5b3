//! Caller-facing import state machine.
//!
//! ```text
//! select_file: idle | success | error → validating → idle (valid) | error
//! import:      idle → importing → success | error
//! ```

use persist_core::document::WorkoutDocument;
use persist_core::enums::ImportStatus;
use persist_core::errors::CoreError;
use persist_core::responses::{ImportResult, ValidationReport};
use persist_db::store::WorkoutStore;
use tracing::debug;

use crate::error::ImportError;
use crate::guard::InputGuard;
use crate::importer::Importer;
use crate::validator::validate;

#[derive(Debug, Default)]
pub struct ImportWorkflow {
    status: ImportStatus,
    guard: InputGuard,
    file_name: Option<String>,
    report: Option<ValidationReport>,
    document: Option<WorkoutDocument>,
    last_result: Option<ImportResult>,
}

impl ImportWorkflow {
    #[must_use]
    pub fn new(guard: InputGuard) -> Self {
        Self {
            guard,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn status(&self) -> ImportStatus {
        self.status
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn document(&self) -> Option<&WorkoutDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub const fn last_result(&self) -> Option<&ImportResult> {
        self.last_result.as_ref()
    }

    fn check(&self, next: ImportStatus) -> Result<(), CoreError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity_type: "import".to_string(),
                from: self.status.to_string(),
                to: next.to_string(),
            })
        }
    }

    fn transition(&mut self, next: ImportStatus) -> Result<(), CoreError> {
        self.check(next)?;
        debug!(from = %self.status, to = %next, "import status");
        self.status = next;
        Ok(())
    }

    /// Guard, parse, and validate a new file, replacing any previous one.
    ///
    /// Guard and parse failures are reported as validation errors; the
    /// workflow ends in `error` and the report explains why.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` while an import is running.
    pub fn select_file(&mut self, name: &str, bytes: &[u8]) -> Result<&ValidationReport, ImportError> {
        self.transition(ImportStatus::Validating)?;
        self.file_name = Some(name.to_string());
        self.document = None;
        self.last_result = None;

        let report = match self.guard.load(name, bytes) {
            Ok(value) => {
                let report = validate(&value);
                if report.is_valid {
                    self.document = WorkoutDocument::from_value(&value).ok();
                }
                report
            }
            Err(err) => ValidationReport::rejected(err.to_string()),
        };

        let next = if report.is_valid && self.document.is_some() {
            ImportStatus::Idle
        } else {
            ImportStatus::Error
        };
        self.transition(next)?;
        Ok(&*self.report.insert(report))
    }

    /// Import the selected document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless the workflow is `idle`,
    /// and `CoreError::Validation` when no valid file has been selected.
    pub async fn import<S: WorkoutStore>(
        &mut self,
        importer: &Importer<'_, S>,
    ) -> Result<&ImportResult, ImportError> {
        self.check(ImportStatus::Importing)?;
        let Some(document) = self.document.take() else {
            return Err(CoreError::Validation("no valid file selected".to_string()).into());
        };
        self.transition(ImportStatus::Importing)?;

        let result = importer.run(&document).await;
        self.document = Some(document);
        self.transition(if result.success {
            ImportStatus::Success
        } else {
            ImportStatus::Error
        })?;
        Ok(&*self.last_result.insert(result))
    }

    /// Forget the selected file and return to `idle`.
    pub fn reset(&mut self) {
        let guard = std::mem::take(&mut self.guard);
        *self = Self::new(guard);
    }
}
