//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, and validator for input validation.

pub mod camp;
pub mod date_format;
pub mod health;
pub mod query;
pub mod speaker;
pub mod talk;

pub use camp::CampModel;
pub use query::{IncludeTalksQuery, SearchQuery};
pub use speaker::SpeakerModel;
pub use talk::TalkModel;

/// Maps a Rust field name to the JSON property name clients send.
///
/// Validation errors are reported under these names. The default follows
/// `#[serde(rename_all = "camelCase")]`; models with per-field renames override it.
pub trait WireFields {
    fn wire_name(field: &str) -> String {
        camel_case(field)
    }
}

pub(crate) fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_matches_serde_rename() {
        assert_eq!(camel_case("title"), "title");
        assert_eq!(camel_case("event_date"), "eventDate");
        assert_eq!(camel_case("state_province"), "stateProvince");
        assert_eq!(camel_case("address1"), "address1");
    }
}
