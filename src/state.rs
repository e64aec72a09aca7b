use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    IdAllocator, ListingService, RegistrationService, ResolutionService,
};
use crate::domain::repositories::UrlRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<RegistrationService>,
    pub resolution: Arc<ResolutionService>,
    pub listing: Arc<ListingService>,
    pub base_url: String,
}

impl AppState {
    /// Wires the services over the given repository.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        base_url: String,
        alloc_budget: Duration,
    ) -> Self {
        let allocator = IdAllocator::new(repository.clone(), alloc_budget);

        Self {
            registration: Arc::new(RegistrationService::new(repository.clone(), allocator)),
            resolution: Arc::new(ResolutionService::new(repository.clone())),
            listing: Arc::new(ListingService::new(repository)),
            base_url,
        }
    }

    /// Builds the public short URL for an identifier.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}
