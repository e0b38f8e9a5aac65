// src/api/mod.rs
//
// Data Access Layer - remote guest service

pub mod client;

pub use client::{GuestApi, HttpGuestApi, TokenResponse};

#[cfg(test)]
pub use client::MockGuestApi;
