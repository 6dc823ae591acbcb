//! Application layer services implementing the request flow.
//!
//! Services consume repository traits and turn their results into the
//! outcomes the API promises: not-found checks, business-rule rejections,
//! relation assignment and persistence-failure reporting.
//!
//! # Available Services
//!
//! - [`services::camp_service::CampService`] - camp listing, search and CRUD
//! - [`services::talk_service::TalkService`] - talk CRUD under a camp

pub mod services;
