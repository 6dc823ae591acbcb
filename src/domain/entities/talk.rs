//! Talk entity: a presentation given at a camp by a speaker.

use super::Speaker;

/// A presentation belonging to one camp and referencing one speaker.
///
/// `speaker` is the eagerly loaded speaker row and is `None` when the query
/// did not ask for it (or the talk has no speaker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub talk_id: i64,
    pub camp_id: i64,
    pub speaker_id: Option<i64>,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker: Option<Speaker>,
}

impl Talk {
    /// Attaches `speaker`, keeping `speaker_id` in sync.
    pub fn attach_speaker(&mut self, speaker: Speaker) {
        self.speaker_id = Some(speaker.speaker_id);
        self.speaker = Some(speaker);
    }
}

/// Client-controlled talk fields plus the speaker the client asked for.
///
/// `speaker_id` is only a request; it is resolved against existing speakers
/// by the talk service and never written by [`TalkDraft::apply_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkDraft {
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker_id: Option<i64>,
}

impl TalkDraft {
    /// Overwrites the scalar fields of `talk`. Camp and speaker relations are
    /// never modified here.
    pub fn apply_to(&self, talk: &mut Talk) {
        talk.title.clone_from(&self.title);
        talk.abstract_text.clone_from(&self.abstract_text);
        talk.level = self.level;
    }
}

/// Input data for inserting a talk, with both relations already resolved.
#[derive(Debug, Clone)]
pub struct NewTalk {
    pub camp_id: i64,
    pub speaker_id: i64,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}
