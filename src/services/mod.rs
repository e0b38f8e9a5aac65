// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod guest_service;
pub mod guest_view;
pub mod session_service;

#[cfg(test)]
mod guest_service_tests;

pub use guest_service::GuestService;
pub use guest_view::{DialogState, GuestView, LoadState, PAGE_SIZE_OPTIONS};
pub use session_service::SessionService;
