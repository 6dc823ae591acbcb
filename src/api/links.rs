//! `Location` header paths for created resources.

use url::Url;

const BASE: &str = "http://localhost/api/camps/";

/// Path of a camp resource, e.g. `/api/camps/ATL2018`.
///
/// Returns `None` when the moniker is blank. Reserved characters are
/// percent-encoded.
pub fn camp_location(moniker: &str) -> Option<String> {
    resource_path(&[moniker])
}

/// Path of a talk resource, e.g. `/api/camps/ATL2018/talks/1`.
pub fn talk_location(moniker: &str, talk_id: i64) -> Option<String> {
    resource_path(&[moniker, "talks", &talk_id.to_string()])
}

fn resource_path(segments: &[&str]) -> Option<String> {
    if segments.iter().any(|s| s.trim().is_empty()) {
        return None;
    }

    let mut url = Url::parse(BASE).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().extend(segments);
    Some(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camp_location() {
        assert_eq!(camp_location("ATL2018").as_deref(), Some("/api/camps/ATL2018"));
    }

    #[test]
    fn test_camp_location_blank_moniker() {
        assert_eq!(camp_location(""), None);
        assert_eq!(camp_location("  "), None);
    }

    #[test]
    fn test_camp_location_encodes_reserved_characters() {
        assert_eq!(
            camp_location("a/b c").as_deref(),
            Some("/api/camps/a%2Fb%20c")
        );
    }

    #[test]
    fn test_talk_location() {
        assert_eq!(
            talk_location("ATL2018", 7).as_deref(),
            Some("/api/camps/ATL2018/talks/7")
        );
    }
}
