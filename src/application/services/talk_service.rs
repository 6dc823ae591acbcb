//! Talk management service.

use crate::domain::entities::{NewTalk, Talk, TalkDraft};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use crate::error::AppError;
use std::sync::Arc;

const TALK_MISSING: &str = "Talk not found!";

/// Service for talks nested under a camp.
///
/// The camp and speaker of a talk are always assigned here, never copied from
/// the request body: a talk is attached to the camp named in the route and to
/// a speaker resolved by id.
pub struct TalkService {
    camps: Arc<dyn CampRepository>,
    talks: Arc<dyn TalkRepository>,
    speakers: Arc<dyn SpeakerRepository>,
}

impl TalkService {
    /// Creates a new talk service.
    pub fn new(
        camps: Arc<dyn CampRepository>,
        talks: Arc<dyn TalkRepository>,
        speakers: Arc<dyn SpeakerRepository>,
    ) -> Self {
        Self {
            camps,
            talks,
            speakers,
        }
    }

    /// Lists the talks of a camp with their speakers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError> {
        self.talks.list_talks(moniker, true).await
    }

    /// Retrieves one talk with its speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with "Talk Not Found!".
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_talk(&self, moniker: &str, talk_id: i64) -> Result<Talk, AppError> {
        self.talks
            .find_talk(moniker, talk_id, true)
            .await?
            .ok_or_else(|| AppError::not_found("Talk Not Found!"))
    }

    /// Creates a talk in the camp identified by `moniker`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp or the requested speaker
    /// does not exist.
    /// Returns [`AppError::Rejected`] if no speaker was requested.
    /// Returns [`AppError::NotSaved`] if the store persisted nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_talk(&self, moniker: &str, draft: TalkDraft) -> Result<Talk, AppError> {
        let camp = self
            .camps
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| AppError::not_found("Camp does not exists!"))?;

        let speaker_id = draft
            .speaker_id
            .ok_or_else(|| AppError::rejected("Speaker ID is required!"))?;

        let speaker = self
            .speakers
            .find_speaker(speaker_id)
            .await?
            .ok_or_else(|| AppError::not_found("Speaker not found!"))?;

        let new_talk = NewTalk {
            camp_id: camp.camp_id,
            speaker_id: speaker.speaker_id,
            title: draft.title,
            abstract_text: draft.abstract_text,
            level: draft.level,
        };

        let mut talk = self
            .talks
            .insert_talk(new_talk)
            .await?
            .ok_or_else(|| AppError::not_saved(None))?;
        talk.attach_speaker(speaker);

        tracing::info!(talk_id = talk.talk_id, moniker, "Talk created");
        Ok(talk)
    }

    /// Overwrites a talk's scalar fields and, when the request names an
    /// existing speaker, re-attaches that speaker.
    ///
    /// An absent or unknown speaker id keeps the current speaker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the talk does not exist.
    /// Returns [`AppError::NotSaved`] if nothing changes or the store reports
    /// no affected row.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_talk(
        &self,
        moniker: &str,
        talk_id: i64,
        draft: TalkDraft,
    ) -> Result<Talk, AppError> {
        let mut talk = self
            .talks
            .find_talk(moniker, talk_id, true)
            .await?
            .ok_or_else(|| AppError::not_found(TALK_MISSING))?;

        let before = talk.clone();
        draft.apply_to(&mut talk);

        if let Some(speaker_id) = draft.speaker_id {
            match self.speakers.find_speaker(speaker_id).await? {
                Some(speaker) => talk.attach_speaker(speaker),
                None => tracing::debug!(speaker_id, "Requested speaker not found, keeping current"),
            }
        }

        if talk == before {
            return Err(AppError::not_saved(None));
        }

        if !self.talks.update_talk(&talk).await? {
            return Err(AppError::not_saved(None));
        }

        Ok(talk)
    }

    /// Deletes a talk.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the talk does not exist.
    /// Returns [`AppError::NotSaved`] if the store removed nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_talk(&self, moniker: &str, talk_id: i64) -> Result<(), AppError> {
        let talk = self
            .talks
            .find_talk(moniker, talk_id, false)
            .await?
            .ok_or_else(|| AppError::not_found(TALK_MISSING))?;

        if !self.talks.delete_talk(talk.talk_id).await? {
            return Err(AppError::not_saved(None));
        }

        tracing::info!(talk_id, moniker, "Talk deleted");
        Ok(())
    }
}
