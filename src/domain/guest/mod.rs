// src/domain/guest/mod.rs

pub mod draft;
pub mod entity;

pub use draft::{complete_draft, replacement_record, GuestDraft};
pub use entity::{Guest, NewGuest};
