// src/lib.rs
// GuestDesk - Administrative console for event-guest records
//
// Architecture:
// - Layered: domain → session/api → services → application (UI boundary)
// - Explicit: session state and view state are objects, not ambient globals
// - Thin client: the remote guest service owns the data; the in-memory
//   list is the only cache

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod api;
pub mod domain;
pub mod error;
pub mod services;
pub mod session;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{complete_draft, replacement_record, Guest, GuestDraft, NewGuest};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Session
// ============================================================================

pub use session::SessionStore;

// ============================================================================
// PUBLIC API - Data Access
// ============================================================================

pub use api::{GuestApi, HttpGuestApi, TokenResponse};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    DialogState,
    GuestService,
    // Guest Management view model
    GuestView,
    LoadState,
    SessionService,
    PAGE_SIZE_OPTIONS,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
