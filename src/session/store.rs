// src/session/store.rs
//
// Session token persistence
//
// PRINCIPLES:
// - Explicit session object, no ambient global lookups
// - One opaque token string, surviving restarts
// - Set on login, cleared on logout; no expiry or refresh logic

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{AppError, AppResult};

/// Holds the administrator's session token
///
/// The token is kept in memory behind a lock and mirrored to a file under
/// the platform data directory so the session survives restarts. Absence of
/// a token means the route guard sends the user back to the login view.
pub struct SessionStore {
    token: RwLock<Option<String>>,
    path: PathBuf,
}

/// Token file path: {APP_DATA}/guestdesk/session.token
fn default_token_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let guestdesk_dir = app_data_dir.join("guestdesk");

    // Ensure directory exists
    fs::create_dir_all(&guestdesk_dir).map_err(AppError::Io)?;

    Ok(guestdesk_dir.join("session.token"))
}

impl SessionStore {
    /// Open the store at the default platform location, loading any
    /// previously persisted token.
    pub fn open() -> AppResult<Self> {
        Self::at_path(default_token_path()?)
    }

    /// Open the store at an explicit path (tests use a temp directory)
    pub fn at_path(path: PathBuf) -> AppResult<Self> {
        let token = match fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(AppError::Io(e)),
        };

        Ok(Self {
            token: RwLock::new(token),
            path,
        })
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Whether a session token is present (the route guard's question)
    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }

    /// Store a new token and persist it
    pub fn set(&self, token: String) -> AppResult<()> {
        fs::write(&self.path, &token).map_err(AppError::Io)?;
        *self.token.write().expect("session lock poisoned") = Some(token);
        Ok(())
    }

    /// Drop the token and remove the persisted file (logout)
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AppError::Io(e)),
        }
        *self.token.write().expect("session lock poisoned") = None;
        Ok(())
    }
}
