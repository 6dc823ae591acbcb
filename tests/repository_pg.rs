//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database with migrations (and their sample data)
//! applied. Run with `cargo test -- --ignored` and `DATABASE_URL` set.

use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use code_camp::domain::entities::{CampDraft, Location, NewSpeaker, NewTalk};
use code_camp::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use code_camp::infrastructure::persistence::PgCampRepository;

fn repo(pool: PgPool) -> PgCampRepository {
    PgCampRepository::new(Arc::new(pool))
}

fn draft(moniker: &str, y: i32, m: u32, d: u32) -> CampDraft {
    CampDraft {
        name: format!("{moniker} camp"),
        moniker: moniker.to_string(),
        event_date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        length: 2,
        location: Location {
            city_town: Some("Portland".to_string()),
            ..Default::default()
        },
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_sample_camp_with_talks(pool: PgPool) {
    let repo = repo(pool);

    let camp = repo.find_camp("ATL2018", true).await.unwrap().unwrap();

    assert_eq!(camp.name, "Atlanta Code Camp");
    assert_eq!(camp.location.state_province.as_deref(), Some("GA"));
    assert_eq!(camp.talks.len(), 2);
    assert_eq!(
        camp.talks[0].speaker.as_ref().unwrap().first_name,
        "Shawn"
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_camp_without_talks(pool: PgPool) {
    let repo = repo(pool);

    let camp = repo.find_camp("ATL2018", false).await.unwrap().unwrap();

    assert!(camp.talks.is_empty());
    assert!(repo.find_camp("atl2018", false).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_list_camps(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .insert_camp(draft("PDX2024", 2024, 5, 4))
        .await
        .unwrap()
        .unwrap();
    assert!(created.camp_id > 1);

    let camps = repo.list_camps(false).await.unwrap();
    assert_eq!(camps.len(), 2);
    assert_eq!(camps[0].moniker, "PDX2024");
    assert_eq!(camps[1].moniker, "ATL2018");
    assert_eq!(repo.count_camps().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_camps_by_date_ignores_time(pool: PgPool) {
    let repo = repo(pool);
    repo.insert_camp(draft("PDX2024", 2024, 5, 4)).await.unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
    let found = repo.list_camps_by_date(day, false).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].moniker, "PDX2024");

    let none = repo
        .list_camps_by_date(NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(), false)
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_camp(pool: PgPool) {
    let repo = repo(pool);
    let mut camp = repo.find_camp("ATL2018", false).await.unwrap().unwrap();

    camp.name = "Atlanta Code Camp 2018".to_string();
    camp.location.city_town = None;

    assert!(repo.update_camp(&camp).await.unwrap());

    let stored = repo.find_camp("ATL2018", false).await.unwrap().unwrap();
    assert_eq!(stored.name, "Atlanta Code Camp 2018");
    assert_eq!(stored.location.city_town, None);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_camp_cascades_to_talks(pool: PgPool) {
    let repo = repo(pool);
    let camp = repo.find_camp("ATL2018", false).await.unwrap().unwrap();

    assert!(repo.delete_camp(camp.camp_id).await.unwrap());
    assert!(!repo.delete_camp(camp.camp_id).await.unwrap());
    assert!(repo.find_talk("ATL2018", 1, false).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_talk_lifecycle(pool: PgPool) {
    let repo = repo(pool);
    let camp = repo.find_camp("ATL2018", false).await.unwrap().unwrap();

    let mut talk = repo
        .insert_talk(NewTalk {
            camp_id: camp.camp_id,
            speaker_id: 2,
            title: "Building APIs".to_string(),
            abstract_text: "A tour of REST design with real examples.".to_string(),
            level: 300,
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(talk.talk_id, 3);
    assert!(talk.speaker.is_none());

    talk.level = 400;
    talk.speaker_id = Some(1);
    assert!(repo.update_talk(&talk).await.unwrap());

    let stored = repo.find_talk("ATL2018", 3, true).await.unwrap().unwrap();
    assert_eq!(stored.level, 400);
    assert_eq!(stored.speaker.unwrap().first_name, "Shawn");

    assert_eq!(repo.list_talks("ATL2018", false).await.unwrap().len(), 3);

    assert!(repo.delete_talk(3).await.unwrap());
    assert!(repo.find_talk("ATL2018", 3, false).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_speakers(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .insert_speaker(NewSpeaker {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.speaker_id, 3);

    let found = repo.find_speaker(3).await.unwrap().unwrap();
    assert_eq!(found, created);

    let speakers = repo.list_speakers().await.unwrap();
    assert_eq!(speakers.len(), 3);
    assert_eq!(speakers[0].last_name, "Lovelace");
}
