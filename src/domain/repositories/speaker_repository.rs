//! Repository trait for speaker data access.

use crate::domain::entities::{NewSpeaker, Speaker};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for speakers.
///
/// The REST API only reads speakers; creation happens through the admin CLI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Finds a speaker by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError>;

    /// Lists all speakers ordered by last name, then first name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError>;

    /// Registers a new speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError>;
}
