//! Camp request/response body.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{TalkModel, WireFields};
use crate::domain::entities::default_event_date;

/// Body of the camp endpoints.
///
/// The location is flattened into top-level fields. `talks` is only filled on
/// output; an incoming `talks` array is accepted but ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CampModel {
    #[validate(custom(function = "required", message = "The Name field is required."))]
    pub name: String,

    #[validate(custom(function = "required", message = "The Moniker field is required."))]
    pub moniker: String,

    #[serde(deserialize_with = "super::date_format::deserialize")]
    pub event_date: NaiveDateTime,

    #[validate(range(
        min = 1,
        max = 100,
        message = "The field Length must be between 1 and 100."
    ))]
    pub length: i32,

    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,

    pub talks: Vec<TalkModel>,
}

impl WireFields for CampModel {}

impl Default for CampModel {
    fn default() -> Self {
        Self {
            name: String::new(),
            moniker: String::new(),
            event_date: default_event_date(),
            length: 1,
            venue_name: None,
            address1: None,
            address2: None,
            address3: None,
            city_town: None,
            state_province: None,
            postal_code: None,
            country: None,
            talks: Vec::new(),
        }
    }
}

/// Rejects empty and whitespace-only strings.
pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
