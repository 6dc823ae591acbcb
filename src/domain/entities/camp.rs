//! Camp entity: a conference event keyed by a human-readable moniker.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::Talk;

/// Event date used for camps created without one (`0001-01-01T00:00:00`).
pub fn default_event_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::default())
}

/// Where a camp takes place. Stored inline with the camp row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A conference event.
///
/// `talks` is only populated when the repository was asked to include them;
/// otherwise it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    pub camp_id: i64,
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub location: Location,
    pub talks: Vec<Talk>,
}

/// Every camp field a client controls, used both to create a camp and to
/// overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampDraft {
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub location: Location,
}

impl CampDraft {
    /// Overwrites every client-controlled field of `camp`.
    ///
    /// The identifier and any loaded talks are left alone.
    pub fn apply_to(&self, camp: &mut Camp) {
        camp.name.clone_from(&self.name);
        camp.moniker.clone_from(&self.moniker);
        camp.event_date = self.event_date;
        camp.length = self.length;
        camp.location.clone_from(&self.location);
    }

    /// Builds the entity the store returns after inserting this draft.
    pub fn into_camp(self, camp_id: i64) -> Camp {
        Camp {
            camp_id,
            name: self.name,
            moniker: self.moniker,
            event_date: self.event_date,
            length: self.length,
            location: self.location,
            talks: Vec::new(),
        }
    }
}
