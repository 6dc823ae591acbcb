//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CampService, TalkService};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};

#[derive(Clone)]
pub struct AppState {
    pub camp_service: Arc<CampService>,
    pub talk_service: Arc<TalkService>,
}

impl AppState {
    pub fn new(camp_service: Arc<CampService>, talk_service: Arc<TalkService>) -> Self {
        Self {
            camp_service,
            talk_service,
        }
    }

    /// Wires both services to a single store implementing every repository.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CampRepository + TalkRepository + SpeakerRepository + 'static,
    {
        let camps: Arc<dyn CampRepository> = store.clone();
        let talks: Arc<dyn TalkRepository> = store.clone();
        let speakers: Arc<dyn SpeakerRepository> = store;

        Self::new(
            Arc::new(CampService::new(camps.clone())),
            Arc::new(TalkService::new(camps, talks, speakers)),
        )
    }
}
