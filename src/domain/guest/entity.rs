// src/domain/guest/entity.rs
use serde::{Deserialize, Serialize};

/// Represents an event attendee managed by this console
/// This is the sole domain entity; all records live on the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Server-assigned immutable identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact phone
    pub contact: String,

    /// Email address (required at creation time)
    pub email: String,

    /// Organization the guest belongs to
    pub organization: String,

    /// Where the guest is based
    pub location: String,

    /// Numeric guest level; the service treats this as nullable
    pub guest_level: Option<i64>,

    /// Nationality
    pub nationality: String,

    /// Passport identifier
    pub passport: String,
}

/// A guest record without a server identifier
///
/// This is the request body for both create (server assigns the id)
/// and update (full-record replace of the addressed guest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGuest {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub organization: String,
    pub location: String,
    pub guest_level: Option<i64>,
    pub nationality: String,
    pub passport: String,
}

impl From<Guest> for NewGuest {
    fn from(guest: Guest) -> Self {
        Self {
            name: guest.name,
            contact: guest.contact,
            email: guest.email,
            organization: guest.organization,
            location: guest.location,
            guest_level: guest.guest_level,
            nationality: guest.nationality,
            passport: guest.passport,
        }
    }
}
