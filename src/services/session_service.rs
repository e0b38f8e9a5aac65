// src/services/session_service.rs
use std::sync::Arc;

use crate::api::GuestApi;
use crate::error::AppResult;
use crate::session::SessionStore;

/// Login/logout orchestration over the credential exchange and token store
pub struct SessionService {
    api: Arc<dyn GuestApi>,
    session: Arc<SessionStore>,
}

impl SessionService {
    pub fn new(api: Arc<dyn GuestApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Exchange credentials and persist the returned token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<()> {
        let token = self.api.login(username, password).await?;
        self.session.set(token.access_token)?;
        log::info!("Session established for {}", username);
        Ok(())
    }

    /// Clear the persisted token; subsequent dashboard navigation redirects
    pub fn logout(&self) -> AppResult<()> {
        self.session.clear()?;
        log::info!("Session cleared");
        Ok(())
    }

    /// Route guard query: is a token present?
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockGuestApi, TokenResponse};
    use crate::error::AppError;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> Arc<SessionStore> {
        Arc::new(SessionStore::at_path(dir.path().join("session.token")).unwrap())
    }

    #[tokio::test]
    async fn test_login_persists_the_returned_token() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut api = MockGuestApi::new();
        api.expect_login()
            .withf(|user, pass| user == "admin" && pass == "hunter2")
            .returning(|_, _| {
                Ok(TokenResponse {
                    access_token: "jwt-token".to_string(),
                    token_type: "bearer".to_string(),
                })
            });

        let service = SessionService::new(Arc::new(api), store.clone());
        service.login("admin", "hunter2").await.unwrap();

        assert!(service.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("jwt-token"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_no_session() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut api = MockGuestApi::new();
        api.expect_login().returning(|_, _| {
            Err(AppError::Api {
                status: 400,
                message: "Incorrect username or password".to_string(),
            })
        });

        let service = SessionService::new(Arc::new(api), store);
        assert!(service.login("admin", "wrong").await.is_err());
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.set("jwt-token".to_string()).unwrap();

        let api = MockGuestApi::new();
        let service = SessionService::new(Arc::new(api), store);

        assert!(service.is_authenticated());
        service.logout().unwrap();
        assert!(!service.is_authenticated());
    }
}
