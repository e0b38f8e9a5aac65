// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Commands handle error conversion for Tauri
// - Commands NEVER contain business logic

pub mod guest_commands;
pub mod session_commands;

pub use guest_commands::*;
pub use session_commands::*;
