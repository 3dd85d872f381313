//! Repository trait for the UK election dataset.

use crate::domain::entities::UkData;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the static UK constituency dataset, plus the bulk import
/// used by the admin tool.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUkDataRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UkDataRepository: Send + Sync {
    /// Returns every constituency row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<UkData>, AppError>;

    /// Inserts or replaces rows keyed by constituency name.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert_many(&self, rows: Vec<UkData>) -> Result<u64, AppError>;

    /// Replaces the whole dataset with `rows`.
    ///
    /// The delete and the inserts commit together: on failure the previous
    /// rows stay in place. Returns `(deleted, written)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace_all(&self, rows: Vec<UkData>) -> Result<(u64, u64), AppError>;
}
