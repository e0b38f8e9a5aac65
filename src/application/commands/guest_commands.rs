// src/application/commands/guest_commands.rs
//
// Guest Command Handlers
//
// Every command returns a fresh table snapshot so the UI re-renders from
// a single source of truth. Mutation failures record their message on the
// view (the table stays interactive) and surface a categorized error.

use tauri::State;

use crate::application::dto::{GuestFormDto, GuestTableDto};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::domain::{complete_draft, replacement_record, GuestDraft};
use crate::error::AppError;
use crate::services::GuestView;

/// Record a mutation failure on the view and build the command error
fn fail<T>(view: &mut GuestView, error: AppError) -> Result<T, String> {
    let response = ErrorResponse::from_app_error(error);
    view.set_error(response.message.clone());
    Err(serde_json::to_string(&response).unwrap_or_else(|_| "Internal error".to_string()))
}

/// Fetch the full guest list (initial load, or reload after a failure)
///
/// A failed fetch is not a command error: it puts the view in the failed
/// state and the snapshot carries the message.
#[tauri::command]
pub async fn load_guests(state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    {
        let mut view = state.view.lock().await;
        view.begin_load();
    }

    let outcome = state
        .guest_service
        .list_guests()
        .await
        .map_err(|e| ErrorResponse::from_app_error(e).message);

    let mut view = state.view.lock().await;
    view.finish_load(outcome);
    Ok(GuestTableDto::from_view(&view))
}

/// Current table snapshot without touching the server
#[tauri::command]
pub async fn guest_table(state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    let view = state.view.lock().await;
    Ok(GuestTableDto::from_view(&view))
}

/// Update the free-text search query (called per keystroke)
#[tauri::command]
pub async fn set_search(query: String, state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.set_search(query);
    Ok(GuestTableDto::from_view(&view))
}

#[tauri::command]
pub async fn set_page(page: usize, state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.set_page(page);
    Ok(GuestTableDto::from_view(&view))
}

/// Switch the rows-per-page choice; resets the page index to zero
#[tauri::command]
pub async fn set_page_size(size: usize, state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.set_page_size(size);
    Ok(GuestTableDto::from_view(&view))
}

#[tauri::command]
pub async fn open_add_dialog(state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.open_add_dialog();
    Ok(GuestTableDto::from_view(&view))
}

#[tauri::command]
pub async fn open_edit_dialog(
    id: i64,
    state: State<'_, AppState>,
) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.open_edit_dialog(id);
    Ok(GuestTableDto::from_view(&view))
}

/// Sync the open dialog's field buffers
#[tauri::command]
pub async fn update_dialog_form(
    form: GuestFormDto,
    state: State<'_, AppState>,
) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.update_draft(GuestDraft::from(form));
    Ok(GuestTableDto::from_view(&view))
}

#[tauri::command]
pub async fn close_dialog(state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    let mut view = state.view.lock().await;
    view.close_dialog();
    Ok(GuestTableDto::from_view(&view))
}

/// Confirm the add dialog: validate, create on the server, append the
/// returned record
#[tauri::command]
pub async fn add_guest(
    form: GuestFormDto,
    state: State<'_, AppState>,
) -> Result<GuestTableDto, String> {
    let draft = GuestDraft::from(form);

    // Client-side gate: no network call without an email
    let record = match complete_draft(&draft) {
        Ok(record) => record,
        Err(e) => {
            let mut view = state.view.lock().await;
            return fail(&mut view, e);
        }
    };

    match state.guest_service.create_guest(&record).await {
        Ok(created) => {
            let mut view = state.view.lock().await;
            view.apply_created(created);
            Ok(GuestTableDto::from_view(&view))
        }
        Err(e) => {
            let mut view = state.view.lock().await;
            fail(&mut view, e)
        }
    }
}

/// Confirm the edit dialog: full-record replace, then swap the record
/// in the local list by identifier
#[tauri::command]
pub async fn update_guest(
    id: i64,
    form: GuestFormDto,
    state: State<'_, AppState>,
) -> Result<GuestTableDto, String> {
    let record = replacement_record(&GuestDraft::from(form));

    match state.guest_service.update_guest(id, &record).await {
        Ok(updated) => {
            let mut view = state.view.lock().await;
            view.apply_updated(updated);
            Ok(GuestTableDto::from_view(&view))
        }
        Err(e) => {
            let mut view = state.view.lock().await;
            fail(&mut view, e)
        }
    }
}

/// Delete the addressed record; no confirmation step
#[tauri::command]
pub async fn delete_guest(id: i64, state: State<'_, AppState>) -> Result<GuestTableDto, String> {
    match state.guest_service.delete_guest(id).await {
        Ok(()) => {
            let mut view = state.view.lock().await;
            view.apply_deleted(id);
            Ok(GuestTableDto::from_view(&view))
        }
        Err(e) => {
            let mut view = state.view.lock().await;
            fail(&mut view, e)
        }
    }
}
