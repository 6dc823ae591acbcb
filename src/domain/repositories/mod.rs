//! Repository trait definitions for the domain layer.
//!
//! These traits are the data-access facade: the application layer only ever
//! talks to them, and the infrastructure layer provides the implementations.
//!
//! # Available Repositories
//!
//! - [`CampRepository`] - camps, optionally with their talks
//! - [`TalkRepository`] - talks nested under a camp moniker
//! - [`SpeakerRepository`] - speaker lookups and registration
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests. See
//! `tests/repository_pg.rs` for the PostgreSQL implementation.

pub mod camp_repository;
pub mod speaker_repository;
pub mod talk_repository;

pub use camp_repository::CampRepository;
pub use speaker_repository::SpeakerRepository;
pub use talk_repository::TalkRepository;

#[cfg(test)]
pub use camp_repository::MockCampRepository;
#[cfg(test)]
pub use speaker_repository::MockSpeakerRepository;
#[cfg(test)]
pub use talk_repository::MockTalkRepository;
