// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Keeps the service's own message when it supplied one,
//   falls back to a generic message otherwise

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Required field missing; handled before any network call
    Validation,

    /// Addressed record does not exist on the service
    NotFound,

    /// No valid session; the shell should redirect to login
    Unauthorized,

    /// A mutation for the same record is still in flight
    Busy,

    /// Request reached the service and was rejected, or never got through
    Network,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(message) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message,
            },

            AppError::NotFound => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: "Resource not found".to_string(),
            },

            AppError::Unauthorized => Self {
                success: false,
                error_type: ErrorType::Unauthorized,
                message: "Not authenticated".to_string(),
            },

            AppError::Busy(id) => Self {
                success: false,
                error_type: ErrorType::Busy,
                message: format!("Another operation is in progress for guest {}", id),
            },

            AppError::Api { message, .. } => Self {
                success: false,
                error_type: ErrorType::Network,
                message,
            },

            AppError::Http(http_error) => {
                log::error!("Transport error: {}", http_error);

                Self {
                    success: false,
                    error_type: ErrorType::Network,
                    message: "Could not reach the guest service".to_string(),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "File system operation failed".to_string(),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                }
            }
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
