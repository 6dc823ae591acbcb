//! Talk request/response body.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{SpeakerModel, WireFields, camel_case};
use super::camp::required;

/// Body of the talk endpoints.
///
/// `talkId` is informational on output and ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TalkModel {
    pub talk_id: i64,

    #[validate(
        custom(function = "required", message = "The Title field is required."),
        length(
            max = 100,
            message = "The field Title must be a string with a maximum length of '100'."
        )
    )]
    pub title: String,

    #[serde(rename = "abstract")]
    #[validate(
        custom(function = "required", message = "The Abstract field is required."),
        length(
            min = 15,
            message = "The field Abstract must be a string with a minimum length of '15'."
        )
    )]
    pub abstract_text: String,

    pub level: i32,

    pub speaker: Option<SpeakerModel>,
}

impl WireFields for TalkModel {
    fn wire_name(field: &str) -> String {
        match field {
            "abstract_text" => "abstract".to_string(),
            other => camel_case(other),
        }
    }
}
