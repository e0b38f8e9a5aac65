// src/application/state.rs

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::services::{GuestService, GuestView, SessionService};

/// Application state managed by Tauri.
/// Services are initialized in main.rs and passed here; the guest view is
/// the single mutable surface and is serialized behind an async mutex.
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub guest_service: Arc<GuestService>,
    pub view: Mutex<GuestView>,
}

impl AppState {
    pub fn new(session_service: Arc<SessionService>, guest_service: Arc<GuestService>) -> Self {
        Self {
            session_service,
            guest_service,
            view: Mutex::new(GuestView::new()),
        }
    }
}
