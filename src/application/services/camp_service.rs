//! Camp management service.

use crate::domain::entities::{Camp, CampDraft};
use crate::domain::repositories::CampRepository;
use crate::error::AppError;
use chrono::NaiveDate;
use std::sync::Arc;

const CAMP_MISSING: &str = "Camp with this moniker doesn't exists!";

/// Service for listing, searching and editing camps.
///
/// Moniker uniqueness is a check-then-insert sequence
/// ([`CampService::ensure_moniker_available`] followed by
/// [`CampService::create_camp`]); two concurrent creators of the same moniker
/// can both pass the check.
pub struct CampService {
    repository: Arc<dyn CampRepository>,
}

impl CampService {
    /// Creates a new camp service.
    pub fn new(repository: Arc<dyn CampRepository>) -> Self {
        Self { repository }
    }

    /// Lists all camps, optionally with their talks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        self.repository.list_camps(include_talks).await
    }

    /// Retrieves a camp by moniker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (empty body) if no camp has this moniker.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Camp, AppError> {
        self.repository
            .find_camp(moniker, include_talks)
            .await?
            .ok_or_else(AppError::not_found_silent)
    }

    /// Lists camps held on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (empty body) if no camp matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let camps = self
            .repository
            .list_camps_by_date(date, include_talks)
            .await?;

        if camps.is_empty() {
            return Err(AppError::not_found_silent());
        }

        Ok(camps)
    }

    /// Fails if a camp with this moniker already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] with "Moniker already exists!".
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn ensure_moniker_available(&self, moniker: &str) -> Result<(), AppError> {
        if self.repository.find_camp(moniker, false).await?.is_some() {
            return Err(AppError::rejected("Moniker already exists!"));
        }
        Ok(())
    }

    /// Persists a new camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotSaved`] if the store persisted nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_camp(&self, draft: CampDraft) -> Result<Camp, AppError> {
        let camp = self
            .repository
            .insert_camp(draft)
            .await?
            .ok_or_else(|| AppError::not_saved(None))?;

        tracing::info!(camp_id = camp.camp_id, moniker = %camp.moniker, "Camp created");
        Ok(camp)
    }

    /// Overwrites every mapped field of the camp identified by `moniker`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp does not exist.
    /// Returns [`AppError::NotSaved`] if the overwrite changes nothing or the
    /// store reports no affected row.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_camp(&self, moniker: &str, draft: CampDraft) -> Result<Camp, AppError> {
        let mut camp = self
            .repository
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| AppError::not_found(CAMP_MISSING))?;

        let before = camp.clone();
        draft.apply_to(&mut camp);

        if camp == before {
            tracing::debug!(moniker, "Camp update changes nothing");
            return Err(AppError::not_saved(None));
        }

        if !self.repository.update_camp(&camp).await? {
            return Err(AppError::not_saved(None));
        }

        Ok(camp)
    }

    /// Deletes the camp identified by `moniker`, together with its talks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp does not exist.
    /// Returns [`AppError::NotSaved`] with "Failed to delete camp" if the store
    /// removed nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_camp(&self, moniker: &str) -> Result<(), AppError> {
        let camp = self
            .repository
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| AppError::not_found(CAMP_MISSING))?;

        if !self.repository.delete_camp(camp.camp_id).await? {
            return Err(AppError::not_saved(Some("Failed to delete camp")));
        }

        tracing::info!(camp_id = camp.camp_id, moniker, "Camp deleted");
        Ok(())
    }

    /// Counts stored camps. Backs the storage health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_camps(&self) -> Result<i64, AppError> {
        self.repository.count_camps().await
    }
}
