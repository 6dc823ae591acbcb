//! In-process implementation of the camp, talk and speaker repositories.
//!
//! Backs the handler test suite and the `STORAGE_BACKEND=memory` runtime mode.
//! Rows are kept in flat tables, the same shape as the relational schema, and
//! talks/speakers are joined on read.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Camp, CampDraft, Location, NewSpeaker, NewTalk, Speaker, Talk,
};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    camps: BTreeMap<i64, Camp>,
    talks: BTreeMap<i64, Talk>,
    speakers: BTreeMap<i64, Speaker>,
    next_camp_id: i64,
    next_talk_id: i64,
    next_speaker_id: i64,
}

impl Tables {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }

    /// Returns a talk row with its speaker joined when requested.
    fn hydrate_talk(&self, talk: &Talk, include_speakers: bool) -> Talk {
        let mut talk = talk.clone();
        talk.speaker = if include_speakers {
            talk.speaker_id
                .and_then(|id| self.speakers.get(&id))
                .cloned()
        } else {
            None
        };
        talk
    }

    fn talks_of(&self, camp_id: i64, include_speakers: bool) -> Vec<Talk> {
        self.talks
            .values()
            .filter(|t| t.camp_id == camp_id)
            .map(|t| self.hydrate_talk(t, include_speakers))
            .collect()
    }

    fn hydrate_camp(&self, camp: &Camp, include_talks: bool) -> Camp {
        let mut camp = camp.clone();
        camp.talks = if include_talks {
            self.talks_of(camp.camp_id, true)
        } else {
            Vec::new()
        };
        camp
    }

    /// Oldest camp with this moniker, mirroring the PostgreSQL lookup.
    fn camp_by_moniker(&self, moniker: &str) -> Option<&Camp> {
        self.camps.values().find(|c| c.moniker == moniker)
    }

    fn sorted_camps<'a>(&self, camps: impl Iterator<Item = &'a Camp>, include_talks: bool) -> Vec<Camp> {
        let mut camps: Vec<Camp> = camps.map(|c| self.hydrate_camp(c, include_talks)).collect();
        camps.sort_by(|a, b| {
            b.event_date
                .cmp(&a.event_date)
                .then(a.camp_id.cmp(&b.camp_id))
        });
        camps
    }
}

/// Thread-safe in-memory store implementing every repository trait.
#[derive(Default)]
pub struct InMemoryCampStore {
    tables: RwLock<Tables>,
}

impl InMemoryCampStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the same sample data the initial migration seeds:
    /// the `ATL2018` camp with two talks by two speakers.
    pub fn with_sample_data() -> Self {
        let mut tables = Tables::default();

        let shawn = NewSpeaker {
            first_name: "Shawn".to_string(),
            last_name: "Wildermuth".to_string(),
            company: Some("Wilder Minds LLC".to_string()),
            company_url: Some("http://wilderminds.com".to_string()),
            blog_url: Some("http://wildermuth.com".to_string()),
            twitter: Some("shawnwildermuth".to_string()),
            git_hub: Some("shawnwildermuth".to_string()),
            ..Default::default()
        };
        let resa = NewSpeaker {
            first_name: "Resa".to_string(),
            last_name: "Wildermuth".to_string(),
            company: Some("Wilder Minds LLC".to_string()),
            company_url: Some("http://wilderminds.com".to_string()),
            blog_url: Some("http://shawnandresa.com".to_string()),
            twitter: Some("resawildermuth".to_string()),
            git_hub: Some("resawildermuth".to_string()),
            ..Default::default()
        };
        for speaker in [shawn, resa] {
            let id = Tables::next_id(&mut tables.next_speaker_id);
            tables.speakers.insert(id, speaker.into_speaker(id));
        }

        let camp_id = Tables::next_id(&mut tables.next_camp_id);
        let event_date = NaiveDate::from_ymd_opt(2018, 10, 18)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let atlanta = CampDraft {
            name: "Atlanta Code Camp".to_string(),
            moniker: "ATL2018".to_string(),
            event_date,
            length: 1,
            location: Location {
                venue_name: Some("Atlanta Convention Center".to_string()),
                address1: Some("123 Main Street".to_string()),
                city_town: Some("Atlanta".to_string()),
                state_province: Some("GA".to_string()),
                postal_code: Some("12345".to_string()),
                country: Some("USA".to_string()),
                ..Default::default()
            },
        };
        tables.camps.insert(camp_id, atlanta.into_camp(camp_id));

        let talks = [
            (
                1,
                "Entity Framework From Scratch",
                "Entity Framework from scratch in an hour. Probably cover it all",
                100,
            ),
            (
                2,
                "Writing Sample Data Made Easy",
                "Thinking of good sample data examples is tiring.",
                200,
            ),
        ];
        for (speaker_id, title, abstract_text, level) in talks {
            let talk_id = Tables::next_id(&mut tables.next_talk_id);
            tables.talks.insert(
                talk_id,
                Talk {
                    talk_id,
                    camp_id,
                    speaker_id: Some(speaker_id),
                    title: title.to_string(),
                    abstract_text: abstract_text.to_string(),
                    level,
                    speaker: None,
                },
            );
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl CampRepository for InMemoryCampStore {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.sorted_camps(tables.camps.values(), include_talks))
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .camp_by_moniker(moniker)
            .map(|c| tables.hydrate_camp(c, include_talks)))
    }

    async fn list_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let tables = self.tables.read().await;
        let matching = tables.camps.values().filter(|c| c.event_date.date() == date);
        Ok(tables.sorted_camps(matching, include_talks))
    }

    async fn insert_camp(&self, draft: CampDraft) -> Result<Option<Camp>, AppError> {
        let mut tables = self.tables.write().await;
        let camp_id = Tables::next_id(&mut tables.next_camp_id);
        let camp = draft.into_camp(camp_id);
        tables.camps.insert(camp_id, camp.clone());
        Ok(Some(camp))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.camps.get_mut(&camp.camp_id) {
            Some(row) => {
                *row = Camp {
                    talks: Vec::new(),
                    ..camp.clone()
                };
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        if tables.camps.remove(&camp_id).is_none() {
            return Ok(false);
        }
        tables.talks.retain(|_, t| t.camp_id != camp_id);
        Ok(true)
    }

    async fn count_camps(&self) -> Result<i64, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.camps.len() as i64)
    }
}

#[async_trait]
impl TalkRepository for InMemoryCampStore {
    async fn list_talks(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .camp_by_moniker(moniker)
            .map(|c| tables.talks_of(c.camp_id, include_speakers))
            .unwrap_or_default())
    }

    async fn find_talk(
        &self,
        moniker: &str,
        talk_id: i64,
        include_speakers: bool,
    ) -> Result<Option<Talk>, AppError> {
        let tables = self.tables.read().await;
        let Some(camp) = tables.camp_by_moniker(moniker) else {
            return Ok(None);
        };
        Ok(tables
            .talks
            .get(&talk_id)
            .filter(|t| t.camp_id == camp.camp_id)
            .map(|t| tables.hydrate_talk(t, include_speakers)))
    }

    async fn insert_talk(&self, new_talk: NewTalk) -> Result<Option<Talk>, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.camps.contains_key(&new_talk.camp_id) {
            return Ok(None);
        }

        let talk_id = Tables::next_id(&mut tables.next_talk_id);
        let talk = Talk {
            talk_id,
            camp_id: new_talk.camp_id,
            speaker_id: Some(new_talk.speaker_id),
            title: new_talk.title,
            abstract_text: new_talk.abstract_text,
            level: new_talk.level,
            speaker: None,
        };
        tables.talks.insert(talk_id, talk.clone());
        Ok(Some(talk))
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.talks.get_mut(&talk.talk_id) {
            Some(row) => {
                row.title.clone_from(&talk.title);
                row.abstract_text.clone_from(&talk.abstract_text);
                row.level = talk.level;
                row.speaker_id = talk.speaker_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        Ok(tables.talks.remove(&talk_id).is_some())
    }
}

#[async_trait]
impl SpeakerRepository for InMemoryCampStore {
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.speakers.get(&speaker_id).cloned())
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        let tables = self.tables.read().await;
        let mut speakers: Vec<Speaker> = tables.speakers.values().cloned().collect();
        speakers.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
                .then(a.speaker_id.cmp(&b.speaker_id))
        });
        Ok(speakers)
    }

    async fn insert_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let mut tables = self.tables.write().await;
        let speaker_id = Tables::next_id(&mut tables.next_speaker_id);
        let speaker = new_speaker.into_speaker(speaker_id);
        tables.speakers.insert(speaker_id, speaker.clone());
        Ok(speaker)
    }
}
