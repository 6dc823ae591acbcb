//! Repository trait for camp data access.

use crate::domain::entities::{Camp, CampDraft};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for camps.
///
/// Mutating methods report whether anything was persisted instead of failing,
/// so callers can tell a silent no-op apart from a data-access fault.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCampRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCampStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Lists all camps, most recent event first.
    ///
    /// With `include_talks`, each camp carries its talks and their speakers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError>;

    /// Finds a camp by exact moniker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_camp(&self, moniker: &str, include_talks: bool)
    -> Result<Option<Camp>, AppError>;

    /// Lists camps whose event falls on `date` (calendar day, time ignored).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError>;

    /// Inserts a camp. Returns `None` if the store persisted nothing.
    ///
    /// Does not check moniker uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_camp(&self, draft: CampDraft) -> Result<Option<Camp>, AppError>;

    /// Writes every mutable field of `camp` back to its row.
    ///
    /// Returns `false` if no row was affected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError>;

    /// Deletes a camp and its talks. Returns `false` if no row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError>;

    /// Counts all camps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_camps(&self) -> Result<i64, AppError>;
}
