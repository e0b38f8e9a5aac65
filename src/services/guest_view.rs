// src/services/guest_view.rs
//
// Guest Management view model
//
// ARCHITECTURE:
// - Owns the in-memory guest list (the only cache) and all local UI state:
//   load state, dialog state, search text, pagination
// - Pure state transitions; network calls happen in commands, which feed
//   results back in through apply_* methods
//
// INVARIANTS:
// - Initial-load failure is terminal for the list: the view shows the error
//   until a fresh load is started
// - Mutation failures only set the error message; the view stays Ready and
//   interactive
// - Changing the page size resets the page index to zero
// - Changing the search text does NOT reset the page index

use crate::domain::{Guest, GuestDraft};

/// Page size choices offered by the table footer
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [8, 10, 25];

const DEFAULT_PAGE_SIZE: usize = 8;

/// Explicit load state of the guest list
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Initial fetch in progress; nothing to show yet
    Loading,
    /// List populated (possibly empty); table is interactive
    Ready,
    /// Initial fetch failed; replaces the table until the next load
    Failed(String),
}

/// Which form dialog is open, if any
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    Closed,
    /// Add dialog with empty field buffers
    Add(GuestDraft),
    /// Edit dialog pre-filled from the selected record
    Edit { id: i64, draft: GuestDraft },
}

pub struct GuestView {
    load: LoadState,
    guests: Vec<Guest>,
    search: String,
    page: usize,
    page_size: usize,
    error: Option<String>,
    dialog: DialogState,
}

impl GuestView {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            guests: Vec::new(),
            search: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            error: None,
            dialog: DialogState::Closed,
        }
    }

    // ========================================================================
    // Load lifecycle
    // ========================================================================

    /// Start (or restart) the initial fetch
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Record the outcome of the initial fetch
    ///
    /// On failure the list stays empty and the view is replaced by the error
    /// message; on success the list is populated and the table renders.
    pub fn finish_load(&mut self, outcome: Result<Vec<Guest>, String>) {
        match outcome {
            Ok(guests) => {
                self.guests = guests;
                self.load = LoadState::Ready;
            }
            Err(message) => {
                self.guests = Vec::new();
                self.load = LoadState::Failed(message);
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    // ========================================================================
    // Search and pagination
    // ========================================================================

    /// Update the free-text query; the page index is deliberately left alone
    pub fn set_search(&mut self, query: String) {
        self.search = query;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Switch the page size; only the advertised options are accepted.
    /// Accepting a new size resets the page index to zero.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Records whose name contains the query as a case-insensitive substring;
    /// an empty query yields the whole list
    pub fn filtered(&self) -> Vec<&Guest> {
        let needle = self.search.to_lowercase();
        self.guests
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The contiguous slice of the filtered set for the current page;
    /// an out-of-range page index yields no rows
    pub fn visible(&self) -> Vec<&Guest> {
        let filtered = self.filtered();
        let start = self.page * self.page_size;
        if start >= filtered.len() {
            return Vec::new();
        }
        let end = (start + self.page_size).min(filtered.len());
        filtered[start..end].to_vec()
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// Open the add dialog with empty field buffers
    pub fn open_add_dialog(&mut self) {
        self.dialog = DialogState::Add(GuestDraft::default());
    }

    /// Open the edit dialog pre-filled from the record with the given id;
    /// ignored when no such record is in the list
    pub fn open_edit_dialog(&mut self, id: i64) -> bool {
        match self.guests.iter().find(|g| g.id == id) {
            Some(guest) => {
                self.dialog = DialogState::Edit {
                    id,
                    draft: GuestDraft::from(guest),
                };
                true
            }
            None => false,
        }
    }

    /// Replace the open dialog's field buffers (keystroke sync)
    pub fn update_draft(&mut self, draft: GuestDraft) {
        match &mut self.dialog {
            DialogState::Add(current) => *current = draft,
            DialogState::Edit { draft: current, .. } => *current = draft,
            DialogState::Closed => {}
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    // ========================================================================
    // Mutation results
    // ========================================================================

    /// Append the server-assigned record and close the dialog
    pub fn apply_created(&mut self, guest: Guest) {
        self.guests.push(guest);
        self.close_dialog();
    }

    /// Replace the matching record in place by identifier and close the
    /// dialog; other records are untouched
    pub fn apply_updated(&mut self, updated: Guest) {
        for guest in &mut self.guests {
            if guest.id == updated.id {
                *guest = updated;
                break;
            }
        }
        self.close_dialog();
    }

    /// Remove the record with the given identifier
    pub fn apply_deleted(&mut self, id: i64) {
        self.guests.retain(|g| g.id != id);
    }

    /// Surface a mutation error, replacing any previous message;
    /// the table stays interactive
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }
}

impl Default for GuestView {
    fn default() -> Self {
        Self::new()
    }
}
