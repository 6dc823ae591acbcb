//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgCampRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryCampStore`] - in-process tables guarded by an async `RwLock`
//!
//! Both implement [`crate::domain::repositories::CampRepository`],
//! [`crate::domain::repositories::TalkRepository`] and
//! [`crate::domain::repositories::SpeakerRepository`].

pub mod memory_store;
pub mod pg_camp_repository;

pub use memory_store::InMemoryCampStore;
pub use pg_camp_repository::PgCampRepository;
