// src/services/guest_service.rs
//
// Guest mutation orchestration
//
// INVARIANTS:
// - At most one in-flight mutation per guest identifier: a second
//   update/delete targeting the same record is rejected as busy instead of
//   racing the first (rapid double-click delete would otherwise surface a
//   confusing not-found error).
// - Create is not guarded; the record has no identifier yet.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::api::GuestApi;
use crate::domain::{Guest, NewGuest};
use crate::error::{AppError, AppResult};

pub struct GuestService {
    api: Arc<dyn GuestApi>,
    in_flight: Mutex<HashSet<i64>>,
}

impl GuestService {
    pub fn new(api: Arc<dyn GuestApi>) -> Self {
        Self {
            api,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn list_guests(&self) -> AppResult<Vec<Guest>> {
        self.api.list_guests().await
    }

    pub async fn get_guest(&self, id: i64) -> AppResult<Guest> {
        self.api.get_guest(id).await
    }

    pub async fn create_guest(&self, guest: &NewGuest) -> AppResult<Guest> {
        self.api.create_guest(guest).await
    }

    pub async fn update_guest(&self, id: i64, guest: &NewGuest) -> AppResult<Guest> {
        let _guard = self.claim(id)?;
        self.api.update_guest(id, guest).await
    }

    pub async fn delete_guest(&self, id: i64) -> AppResult<()> {
        let _guard = self.claim(id)?;
        self.api.delete_guest(id).await
    }

    /// Claim the identifier for the duration of a mutation
    fn claim(&self, id: i64) -> AppResult<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().expect("in-flight lock poisoned");
        if !in_flight.insert(id) {
            log::warn!("Rejected concurrent mutation for guest {}", id);
            return Err(AppError::Busy(id));
        }
        Ok(InFlightGuard { service: self, id })
    }

    fn release(&self, id: i64) {
        self.in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .remove(&id);
    }
}

/// Releases the claimed identifier when the mutation resolves, on success
/// and on failure alike
struct InFlightGuard<'a> {
    service: &'a GuestService,
    id: i64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.service.release(self.id);
    }
}
