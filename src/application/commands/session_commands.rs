// src/application/commands/session_commands.rs
//
// Session Command Handlers

use tauri::State;

use crate::application::dto::{LoginDto, SessionStatusDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

/// Exchange credentials for a session; the token is persisted on success
#[tauri::command]
pub async fn login(dto: LoginDto, state: State<'_, AppState>) -> Result<SessionStatusDto, String> {
    state
        .session_service
        .login(&dto.username, &dto.password)
        .await
        .to_error_response()?;

    Ok(SessionStatusDto {
        authenticated: true,
    })
}

/// Tear down the session; the shell redirects to the login view
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<SessionStatusDto, String> {
    state.session_service.logout().to_error_response()?;

    Ok(SessionStatusDto {
        authenticated: false,
    })
}

/// Route guard query: the shell redirects to login when this is false
#[tauri::command]
pub async fn session_status(state: State<'_, AppState>) -> Result<SessionStatusDto, String> {
    Ok(SessionStatusDto {
        authenticated: state.session_service.is_authenticated(),
    })
}
