//! Core domain entities representing the conference data model.
//!
//! Entities are plain data structures. Input records are kept separate from
//! the persisted shapes:
//!
//! - [`CampDraft`], [`TalkDraft`] - client-controlled fields, used for create and
//!   overwrite; their `apply_to` methods encode which fields a request may touch
//! - [`NewTalk`], [`NewSpeaker`] - rows ready for insertion

pub mod camp;
pub mod speaker;
pub mod talk;

pub use camp::{Camp, CampDraft, Location, default_event_date};
pub use speaker::{NewSpeaker, Speaker};
pub use talk::{NewTalk, Talk, TalkDraft};
