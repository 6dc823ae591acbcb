//! Domain layer containing the conference entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Camps, talks, speakers and their input records
//! - [`repositories`] - Data access trait definitions
//!
//! Request flow lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
