//! Speaker representation nested inside talks.

use serde::{Deserialize, Serialize};

/// Wire form of a speaker.
///
/// On input only `speakerId` matters; every other field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakerModel {
    pub speaker_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}
