// src/api/client.rs
//
// Remote guest service client
//
// ARCHITECTURE:
// - Wraps the five remote operations plus the credential exchange
// - Attaches the stored session token as a bearer credential
// - Maps non-2xx responses to AppError; never retries, never caches
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - An absent token means the request goes out unauthenticated;
//   the service is trusted to reject it

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::Deserialize;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Guest, NewGuest};
use crate::error::{AppError, AppResult};
use crate::session::SessionStore;

/// Payload returned by the credential exchange
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// The remote operations the console depends on
///
/// Services talk to this trait so tests can substitute a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GuestApi: Send + Sync {
    /// Exchange credentials for a session token (form-encoded POST /login)
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse>;

    /// Full ordered guest list; filtering and pagination are client-side
    async fn list_guests(&self) -> AppResult<Vec<Guest>>;

    /// Single record by identifier
    async fn get_guest(&self, id: i64) -> AppResult<Guest>;

    /// Create a record; the server assigns the identifier
    async fn create_guest(&self, guest: &NewGuest) -> AppResult<Guest>;

    /// Full-record replace of the addressed guest
    async fn update_guest(&self, id: i64, guest: &NewGuest) -> AppResult<Guest>;

    /// Remove the addressed guest
    async fn delete_guest(&self, id: i64) -> AppResult<()>;
}

/// reqwest-backed implementation against the guest service
pub struct HttpGuestApi {
    base_url: String,
    http_client: Client,
    session: Arc<SessionStore>,
}

impl HttpGuestApi {
    pub fn new(base_url: String, session: Arc<SessionStore>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            http_client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is present
    fn with_bearer(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Check the status and pull the service's error message out of the body
    async fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }
}

/// Map a non-2xx response to an AppError
///
/// The service reports failures as `{"detail": "..."}`; anything else falls
/// back to a generic message carrying the status code.
fn error_from_response(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized,
        _ => {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

            AppError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl GuestApi for HttpGuestApi {
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        log::info!("Exchanging credentials for {}", username);

        let response = self
            .http_client
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let token: TokenResponse = Self::check(response).await?.json().await?;
        Ok(token)
    }

    async fn list_guests(&self) -> AppResult<Vec<Guest>> {
        let request = self.with_bearer(self.http_client.get(self.url("/guests/")));
        let response = request.send().await?;

        let guests: Vec<Guest> = Self::check(response).await?.json().await?;
        log::info!("Fetched {} guest records", guests.len());
        Ok(guests)
    }

    async fn get_guest(&self, id: i64) -> AppResult<Guest> {
        let request = self.with_bearer(self.http_client.get(self.url(&format!("/guests/{}", id))));
        let response = request.send().await?;

        let guest: Guest = Self::check(response).await?.json().await?;
        Ok(guest)
    }

    async fn create_guest(&self, guest: &NewGuest) -> AppResult<Guest> {
        let request = self
            .with_bearer(self.http_client.post(self.url("/guests/")))
            .json(guest);
        let response = request.send().await?;

        let created: Guest = Self::check(response).await?.json().await?;
        log::info!("Created guest {}", created.id);
        Ok(created)
    }

    async fn update_guest(&self, id: i64, guest: &NewGuest) -> AppResult<Guest> {
        let request = self
            .with_bearer(self.http_client.put(self.url(&format!("/guests/{}", id))))
            .json(guest);
        let response = request.send().await?;

        let updated: Guest = Self::check(response).await?.json().await?;
        log::info!("Updated guest {}", updated.id);
        Ok(updated)
    }

    async fn delete_guest(&self, id: i64) -> AppResult<()> {
        let request =
            self.with_bearer(self.http_client.delete(self.url(&format!("/guests/{}", id))));
        let response = request.send().await?;

        Self::check(response).await?;
        log::info!("Deleted guest {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> Arc<SessionStore> {
        Arc::new(SessionStore::at_path(dir.path().join("session.token")).unwrap())
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let dir = tempdir().unwrap();
        let api = HttpGuestApi::new("http://localhost:8000/".to_string(), store_in(&dir));
        assert_eq!(api.url("/guests/"), "http://localhost:8000/guests/");
        assert_eq!(api.url("/guests/7"), "http://localhost:8000/guests/7");
    }

    #[test]
    fn test_error_message_prefers_service_detail() {
        let err = error_from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail": "Something broke"}"#,
        );
        match err {
            AppError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Something broke");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "<html>nope</html>");
        match err {
            AppError::Api { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_not_found_and_unauthorized_are_distinct() {
        assert!(matches!(
            error_from_response(StatusCode::NOT_FOUND, r#"{"detail": "Guest not found"}"#),
            AppError::NotFound
        ));
        assert!(matches!(
            error_from_response(StatusCode::UNAUTHORIZED, "{}"),
            AppError::Unauthorized
        ));
    }
}
