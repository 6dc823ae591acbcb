//! Conversions between domain entities and wire models.

use crate::api::dto::{CampModel, SpeakerModel, TalkModel};
use crate::domain::entities::{Camp, CampDraft, Location, Speaker, Talk, TalkDraft};

impl From<Camp> for CampModel {
    fn from(camp: Camp) -> Self {
        let Location {
            venue_name,
            address1,
            address2,
            address3,
            city_town,
            state_province,
            postal_code,
            country,
        } = camp.location;

        Self {
            name: camp.name,
            moniker: camp.moniker,
            event_date: camp.event_date,
            length: camp.length,
            venue_name,
            address1,
            address2,
            address3,
            city_town,
            state_province,
            postal_code,
            country,
            talks: camp.talks.into_iter().map(TalkModel::from).collect(),
        }
    }
}

/// Incoming `talks` are dropped.
impl From<CampModel> for CampDraft {
    fn from(model: CampModel) -> Self {
        Self {
            name: model.name,
            moniker: model.moniker,
            event_date: model.event_date,
            length: model.length,
            location: Location {
                venue_name: model.venue_name,
                address1: model.address1,
                address2: model.address2,
                address3: model.address3,
                city_town: model.city_town,
                state_province: model.state_province,
                postal_code: model.postal_code,
                country: model.country,
            },
        }
    }
}

impl From<Talk> for TalkModel {
    fn from(talk: Talk) -> Self {
        Self {
            talk_id: talk.talk_id,
            title: talk.title,
            abstract_text: talk.abstract_text,
            level: talk.level,
            speaker: talk.speaker.map(SpeakerModel::from),
        }
    }
}

/// `talkId` is ignored; the speaker is reduced to the requested id.
impl From<TalkModel> for TalkDraft {
    fn from(model: TalkModel) -> Self {
        Self {
            title: model.title,
            abstract_text: model.abstract_text,
            level: model.level,
            speaker_id: model.speaker.map(|s| s.speaker_id),
        }
    }
}

impl From<Speaker> for SpeakerModel {
    fn from(speaker: Speaker) -> Self {
        Self {
            speaker_id: speaker.speaker_id,
            first_name: speaker.first_name,
            last_name: speaker.last_name,
            middle_name: speaker.middle_name,
            company: speaker.company,
            company_url: speaker.company_url,
            blog_url: speaker.blog_url,
            twitter: speaker.twitter,
            git_hub: speaker.git_hub,
        }
    }
}

impl From<SpeakerModel> for Speaker {
    fn from(model: SpeakerModel) -> Self {
        Self {
            speaker_id: model.speaker_id,
            first_name: model.first_name,
            last_name: model.last_name,
            middle_name: model.middle_name,
            company: model.company,
            company_url: model.company_url,
            blog_url: model.blog_url,
            twitter: model.twitter,
            git_hub: model.git_hub,
        }
    }
}
