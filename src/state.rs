//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::MemoryLinkRepository;

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
}

impl AppState {
    /// Creates application state over the given link service.
    pub fn new(link_service: Arc<LinkService<MemoryLinkRepository>>) -> Self {
        Self { link_service }
    }
}
