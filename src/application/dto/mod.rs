// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Form buffers carry text; parsing happens at the conversion boundary

use serde::{Deserialize, Serialize};

use crate::domain::{Guest, GuestDraft};
use crate::services::guest_view::{DialogState, GuestView, LoadState};

// ============================================================================
// SESSION DTOs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusDto {
    pub authenticated: bool,
}

// ============================================================================
// GUEST DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDto {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub organization: String,
    pub location: String,
    pub guest_level: Option<i64>,
    pub nationality: String,
    pub passport: String,
}

/// Raw dialog field buffers as the form holds them
///
/// Everything is text; the guest level is parsed on conversion and a
/// non-numeric entry counts as absent, like the form it replaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestFormDto {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub guest_level: Option<String>,
    pub nationality: Option<String>,
    pub passport: Option<String>,
}

// ============================================================================
// VIEW DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogDto {
    /// "closed", "add" or "edit"
    pub kind: String,
    /// Identifier of the record under edit
    pub id: Option<i64>,
    pub form: Option<GuestFormDto>,
}

/// Snapshot of everything the guest table needs to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestTableDto {
    /// "loading", "ready" or "failed"
    pub state: String,
    /// Message of a failed initial load ("failed" state only)
    pub load_error: Option<String>,
    /// Rows for the current page of the filtered set
    pub rows: Vec<GuestDto>,
    /// Size of the filtered set (drives the pagination footer)
    pub filtered_total: usize,
    pub page: usize,
    pub page_size: usize,
    /// Choices offered by the pagination footer
    pub page_size_options: Vec<usize>,
    pub search: String,
    /// Last mutation error, if any; the table stays interactive
    pub error: Option<String>,
    pub dialog: DialogDto,
}

// ============================================================================
// CONVERSION HELPERS
// ============================================================================

impl From<&Guest> for GuestDto {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name.clone(),
            contact: guest.contact.clone(),
            email: guest.email.clone(),
            organization: guest.organization.clone(),
            location: guest.location.clone(),
            guest_level: guest.guest_level,
            nationality: guest.nationality.clone(),
            passport: guest.passport.clone(),
        }
    }
}

impl From<GuestFormDto> for GuestDraft {
    fn from(form: GuestFormDto) -> Self {
        let text = |field: Option<String>| field.filter(|v| !v.trim().is_empty());
        Self {
            name: text(form.name),
            contact: text(form.contact),
            email: text(form.email),
            organization: text(form.organization),
            location: text(form.location),
            guest_level: form
                .guest_level
                .and_then(|v| v.trim().parse::<i64>().ok()),
            nationality: text(form.nationality),
            passport: text(form.passport),
        }
    }
}

impl From<&GuestDraft> for GuestFormDto {
    fn from(draft: &GuestDraft) -> Self {
        Self {
            name: draft.name.clone(),
            contact: draft.contact.clone(),
            email: draft.email.clone(),
            organization: draft.organization.clone(),
            location: draft.location.clone(),
            guest_level: draft.guest_level.map(|v| v.to_string()),
            nationality: draft.nationality.clone(),
            passport: draft.passport.clone(),
        }
    }
}

impl DialogDto {
    fn from_state(dialog: &DialogState) -> Self {
        match dialog {
            DialogState::Closed => Self {
                kind: "closed".to_string(),
                id: None,
                form: None,
            },
            DialogState::Add(draft) => Self {
                kind: "add".to_string(),
                id: None,
                form: Some(GuestFormDto::from(draft)),
            },
            DialogState::Edit { id, draft } => Self {
                kind: "edit".to_string(),
                id: Some(*id),
                form: Some(GuestFormDto::from(draft)),
            },
        }
    }
}

impl GuestTableDto {
    /// Project the current view model into a renderable snapshot
    pub fn from_view(view: &GuestView) -> Self {
        let (state, load_error) = match view.load_state() {
            LoadState::Loading => ("loading", None),
            LoadState::Ready => ("ready", None),
            LoadState::Failed(message) => ("failed", Some(message.clone())),
        };

        Self {
            state: state.to_string(),
            load_error,
            rows: view.visible().into_iter().map(GuestDto::from).collect(),
            filtered_total: view.filtered().len(),
            page: view.page(),
            page_size: view.page_size(),
            page_size_options: crate::services::PAGE_SIZE_OPTIONS.to_vec(),
            search: view.search().to_string(),
            error: view.error().map(String::from),
            dialog: DialogDto::from_state(view.dialog()),
        }
    }
}
