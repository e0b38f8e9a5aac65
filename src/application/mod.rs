// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer is the boundary between UI (Tauri) and the services
// - It translates between DTOs and domain entities

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use state::AppState;
