use std::sync::Arc;

use crate::features::itinerary::ItineraryService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ItineraryService>,
}

impl AppState {
    pub fn new(service: Arc<ItineraryService>) -> Self {
        Self { service }
    }
}
