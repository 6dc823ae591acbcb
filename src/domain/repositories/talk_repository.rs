//! Repository trait for talk data access.

use crate::domain::entities::{NewTalk, Talk};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for talks, always addressed through their camp's moniker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TalkRepository: Send + Sync {
    /// Lists the talks of the camp identified by `moniker`, ordered by id.
    ///
    /// An unknown moniker yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_talks(&self, moniker: &str, include_speakers: bool)
    -> Result<Vec<Talk>, AppError>;

    /// Finds one talk of the camp identified by `moniker`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_talk(
        &self,
        moniker: &str,
        talk_id: i64,
        include_speakers: bool,
    ) -> Result<Option<Talk>, AppError>;

    /// Inserts a talk. Returns `None` if the store persisted nothing.
    ///
    /// The returned talk has `speaker` unset; callers attach the speaker they
    /// resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_talk(&self, new_talk: NewTalk) -> Result<Option<Talk>, AppError>;

    /// Writes the scalar fields and `speaker_id` of `talk` back to its row.
    ///
    /// Returns `false` if no row was affected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError>;

    /// Deletes a talk. Returns `false` if no row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError>;
}
