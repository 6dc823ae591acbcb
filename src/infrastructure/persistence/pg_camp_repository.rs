//! PostgreSQL implementation of the camp, talk and speaker repositories.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Camp, CampDraft, Location, NewSpeaker, NewTalk, Speaker, Talk};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use crate::error::AppError;

const CAMP_COLUMNS: &str = r#"
    camp_id, name, moniker, event_date, length,
    venue_name, address1, address2, address3,
    city_town, state_province, postal_code, country
"#;

const SPEAKER_COLUMNS: &str = r#"
    speaker_id, first_name, last_name, middle_name,
    company, company_url, blog_url, twitter, git_hub
"#;

/// Talk columns joined with the speaker row.
const TALK_WITH_SPEAKER: &str = r#"
    SELECT t.talk_id, t.camp_id, t.speaker_id, t.title, t.abstract, t.level,
           s.first_name, s.last_name, s.middle_name, s.company,
           s.company_url, s.blog_url, s.twitter, s.git_hub
    FROM talks t
    JOIN camps c ON c.camp_id = t.camp_id
    LEFT JOIN speakers s ON s.speaker_id = t.speaker_id
"#;

/// Talk columns with the speaker columns left empty.
const TALK_WITHOUT_SPEAKER: &str = r#"
    SELECT t.talk_id, t.camp_id, t.speaker_id, t.title, t.abstract, t.level,
           NULL::TEXT AS first_name, NULL::TEXT AS last_name, NULL::TEXT AS middle_name,
           NULL::TEXT AS company, NULL::TEXT AS company_url, NULL::TEXT AS blog_url,
           NULL::TEXT AS twitter, NULL::TEXT AS git_hub
    FROM talks t
    JOIN camps c ON c.camp_id = t.camp_id
"#;

#[derive(sqlx::FromRow)]
struct CampRow {
    camp_id: i64,
    name: String,
    moniker: String,
    event_date: NaiveDateTime,
    length: i32,
    venue_name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    city_town: Option<String>,
    state_province: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl From<CampRow> for Camp {
    fn from(r: CampRow) -> Self {
        Camp {
            camp_id: r.camp_id,
            name: r.name,
            moniker: r.moniker,
            event_date: r.event_date,
            length: r.length,
            location: Location {
                venue_name: r.venue_name,
                address1: r.address1,
                address2: r.address2,
                address3: r.address3,
                city_town: r.city_town,
                state_province: r.state_province,
                postal_code: r.postal_code,
                country: r.country,
            },
            talks: Vec::new(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SpeakerRow {
    speaker_id: i64,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    git_hub: Option<String>,
}

impl From<SpeakerRow> for Speaker {
    fn from(r: SpeakerRow) -> Self {
        Speaker {
            speaker_id: r.speaker_id,
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            company: r.company,
            company_url: r.company_url,
            blog_url: r.blog_url,
            twitter: r.twitter,
            git_hub: r.git_hub,
        }
    }
}

/// Talk row with the (possibly empty) joined speaker columns.
#[derive(sqlx::FromRow)]
struct TalkRow {
    talk_id: i64,
    camp_id: i64,
    speaker_id: Option<i64>,
    title: String,
    #[sqlx(rename = "abstract")]
    abstract_text: String,
    level: i32,
    first_name: Option<String>,
    last_name: Option<String>,
    middle_name: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    git_hub: Option<String>,
}

impl From<TalkRow> for Talk {
    fn from(r: TalkRow) -> Self {
        // first_name is NOT NULL in speakers, so it is only absent when the
        // speaker was not joined or does not exist.
        let speaker = match (r.speaker_id, r.first_name) {
            (Some(speaker_id), Some(first_name)) => Some(Speaker {
                speaker_id,
                first_name,
                last_name: r.last_name.unwrap_or_default(),
                middle_name: r.middle_name,
                company: r.company,
                company_url: r.company_url,
                blog_url: r.blog_url,
                twitter: r.twitter,
                git_hub: r.git_hub,
            }),
            _ => None,
        };

        Talk {
            talk_id: r.talk_id,
            camp_id: r.camp_id,
            speaker_id: r.speaker_id,
            title: r.title,
            abstract_text: r.abstract_text,
            level: r.level,
            speaker,
        }
    }
}

/// PostgreSQL repository for camps, talks and speakers.
///
/// Every method is a single statement (plus one talk query when camps are
/// loaded with their talks), so each call is atomic on its own.
pub struct PgCampRepository {
    pool: Arc<PgPool>,
}

impl PgCampRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads talks (with speakers) for the given camps and attaches them.
    async fn attach_talks(&self, camps: &mut [Camp]) -> Result<(), AppError> {
        if camps.is_empty() {
            return Ok(());
        }

        let camp_ids: Vec<i64> = camps.iter().map(|c| c.camp_id).collect();
        let sql = format!("{TALK_WITH_SPEAKER} WHERE t.camp_id = ANY($1) ORDER BY t.talk_id");

        let rows = sqlx::query_as::<_, TalkRow>(&sql)
            .bind(&camp_ids)
            .fetch_all(self.pool.as_ref())
            .await?;

        let mut by_camp: HashMap<i64, Vec<Talk>> = HashMap::new();
        for talk in rows.into_iter().map(Talk::from) {
            by_camp.entry(talk.camp_id).or_default().push(talk);
        }

        for camp in camps.iter_mut() {
            camp.talks = by_camp.remove(&camp.camp_id).unwrap_or_default();
        }

        Ok(())
    }

    async fn finish_camps(
        &self,
        rows: Vec<CampRow>,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let mut camps: Vec<Camp> = rows.into_iter().map(Camp::from).collect();
        if include_talks {
            self.attach_talks(&mut camps).await?;
        }
        Ok(camps)
    }
}

#[async_trait]
impl CampRepository for PgCampRepository {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let sql = format!("SELECT {CAMP_COLUMNS} FROM camps ORDER BY event_date DESC, camp_id");

        let rows = sqlx::query_as::<_, CampRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        self.finish_camps(rows, include_talks).await
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        // Moniker has no UNIQUE constraint; take the oldest match.
        let sql =
            format!("SELECT {CAMP_COLUMNS} FROM camps WHERE moniker = $1 ORDER BY camp_id LIMIT 1");

        let row = sqlx::query_as::<_, CampRow>(&sql)
            .bind(moniker)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.finish_camps(vec![row], include_talks).await?.pop())
    }

    async fn list_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let sql = format!(
            "SELECT {CAMP_COLUMNS} FROM camps WHERE event_date::date = $1 ORDER BY event_date DESC, camp_id"
        );

        let rows = sqlx::query_as::<_, CampRow>(&sql)
            .bind(date)
            .fetch_all(self.pool.as_ref())
            .await?;

        self.finish_camps(rows, include_talks).await
    }

    async fn insert_camp(&self, draft: CampDraft) -> Result<Option<Camp>, AppError> {
        let camp_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO camps (
                name, moniker, event_date, length,
                venue_name, address1, address2, address3,
                city_town, state_province, postal_code, country
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING camp_id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.moniker)
        .bind(draft.event_date)
        .bind(draft.length)
        .bind(&draft.location.venue_name)
        .bind(&draft.location.address1)
        .bind(&draft.location.address2)
        .bind(&draft.location.address3)
        .bind(&draft.location.city_town)
        .bind(&draft.location.state_province)
        .bind(&draft.location.postal_code)
        .bind(&draft.location.country)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(camp_id.map(|id| draft.into_camp(id)))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE camps SET
                name           = $2,
                moniker        = $3,
                event_date     = $4,
                length         = $5,
                venue_name     = $6,
                address1       = $7,
                address2       = $8,
                address3       = $9,
                city_town      = $10,
                state_province = $11,
                postal_code    = $12,
                country        = $13
            WHERE camp_id = $1
            "#,
        )
        .bind(camp.camp_id)
        .bind(&camp.name)
        .bind(&camp.moniker)
        .bind(camp.event_date)
        .bind(camp.length)
        .bind(&camp.location.venue_name)
        .bind(&camp.location.address1)
        .bind(&camp.location.address2)
        .bind(&camp.location.address3)
        .bind(&camp.location.city_town)
        .bind(&camp.location.state_province)
        .bind(&camp.location.postal_code)
        .bind(&camp.location.country)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM camps WHERE camp_id = $1")
            .bind(camp_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_camps(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM camps")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl TalkRepository for PgCampRepository {
    async fn list_talks(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError> {
        let select = if include_speakers {
            TALK_WITH_SPEAKER
        } else {
            TALK_WITHOUT_SPEAKER
        };
        let sql = format!("{select} WHERE c.moniker = $1 ORDER BY t.talk_id");

        let rows = sqlx::query_as::<_, TalkRow>(&sql)
            .bind(moniker)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Talk::from).collect())
    }

    async fn find_talk(
        &self,
        moniker: &str,
        talk_id: i64,
        include_speakers: bool,
    ) -> Result<Option<Talk>, AppError> {
        let select = if include_speakers {
            TALK_WITH_SPEAKER
        } else {
            TALK_WITHOUT_SPEAKER
        };
        let sql = format!("{select} WHERE c.moniker = $1 AND t.talk_id = $2");

        let row = sqlx::query_as::<_, TalkRow>(&sql)
            .bind(moniker)
            .bind(talk_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Talk::from))
    }

    async fn insert_talk(&self, new_talk: NewTalk) -> Result<Option<Talk>, AppError> {
        let talk_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO talks (camp_id, speaker_id, title, abstract, level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING talk_id
            "#,
        )
        .bind(new_talk.camp_id)
        .bind(new_talk.speaker_id)
        .bind(&new_talk.title)
        .bind(&new_talk.abstract_text)
        .bind(new_talk.level)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(talk_id.map(|talk_id| Talk {
            talk_id,
            camp_id: new_talk.camp_id,
            speaker_id: Some(new_talk.speaker_id),
            title: new_talk.title,
            abstract_text: new_talk.abstract_text,
            level: new_talk.level,
            speaker: None,
        }))
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE talks SET
                title      = $2,
                abstract   = $3,
                level      = $4,
                speaker_id = $5
            WHERE talk_id = $1
            "#,
        )
        .bind(talk.talk_id)
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .bind(talk.speaker_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM talks WHERE talk_id = $1")
            .bind(talk_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SpeakerRepository for PgCampRepository {
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        let sql = format!("SELECT {SPEAKER_COLUMNS} FROM speakers WHERE speaker_id = $1");

        let row = sqlx::query_as::<_, SpeakerRow>(&sql)
            .bind(speaker_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Speaker::from))
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        let sql =
            format!("SELECT {SPEAKER_COLUMNS} FROM speakers ORDER BY last_name, first_name, speaker_id");

        let rows = sqlx::query_as::<_, SpeakerRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Speaker::from).collect())
    }

    async fn insert_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let speaker_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO speakers (
                first_name, last_name, middle_name, company,
                company_url, blog_url, twitter, git_hub
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING speaker_id
            "#,
        )
        .bind(&new_speaker.first_name)
        .bind(&new_speaker.last_name)
        .bind(&new_speaker.middle_name)
        .bind(&new_speaker.company)
        .bind(&new_speaker.company_url)
        .bind(&new_speaker.blog_url)
        .bind(&new_speaker.twitter)
        .bind(&new_speaker.git_hub)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_speaker.into_speaker(speaker_id))
    }
}
