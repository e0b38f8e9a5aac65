// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

// Direct imports for Tauri command handler macro
use guestdesk::application::commands::*;
// All other necessary components for initialization
use guestdesk::api::{GuestApi, HttpGuestApi};
use guestdesk::application::state::AppState;
use guestdesk::services::{GuestService, SessionService};
use guestdesk::session::SessionStore;

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. INFRASTRUCTURE
    let base_url =
        std::env::var("GUESTDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    log::info!("Guest service at {}", base_url);

    let session = Arc::new(SessionStore::open()?);

    // The type `Arc<dyn Trait>` is used to match the service constructor signatures exactly.
    let api: Arc<dyn GuestApi> = Arc::new(HttpGuestApi::new(base_url, session.clone()));

    // 2. SERVICES
    let session_service = Arc::new(SessionService::new(api.clone(), session));
    let guest_service = Arc::new(GuestService::new(api));

    // 3. APPLICATION STATE
    let app_state = AppState::new(session_service, guest_service);

    // 4. TAURI BOOTSTRAP
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Commands are in scope via `use` statements
            login,
            logout,
            session_status,
            load_guests,
            guest_table,
            set_search,
            set_page,
            set_page_size,
            open_add_dialog,
            open_edit_dialog,
            update_dialog_form,
            close_dialog,
            add_guest,
            update_guest,
            delete_guest,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
