#![allow(dead_code)]

use std::sync::Arc;

use sniplink::application::services::LinkService;
use sniplink::domain::entities::{Link, NewLink};
use sniplink::domain::repositories::LinkRepository;
use sniplink::infrastructure::persistence::MemoryLinkRepository;
use sniplink::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

/// Builds handler state over a fresh in-memory store.
///
/// The repository handle is returned alongside the state so tests can seed
/// and inspect the store directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository.clone(), BASE_URL.to_string()));

    (AppState::new(link_service), repository)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    repository
        .insert(NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
        })
        .await
        .unwrap()
}

pub async fn get_link(repository: &MemoryLinkRepository, code: &str) -> Option<Link> {
    repository.find_by_code(code).await.unwrap()
}
