// Tauri commands exposed to the controls frontend.
//
// All pane commands are async so they run off the main thread: creating or
// moving child webviews dispatches to the event loop and waits for it, which
// would deadlock if the caller were the event loop itself.

use tauri::{AppHandle, Emitter, State};

use crate::modules::collection::PaneView;
use crate::modules::layout::Viewport;
use crate::modules::theme::{Theme, ThemeStyle};
use crate::settings::Settings;
use crate::state::AppState;

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> Settings {
    state.settings.clone()
}

#[tauri::command]
pub async fn get_panes(state: State<'_, AppState>) -> Result<Vec<PaneView>, String> {
    let panes = state.panes.lock().map_err(|e| e.to_string())?;
    Ok(panes.views())
}

/// Stepper change. The requested value is clamped the way the stepper clamps.
#[tauri::command]
pub async fn set_pane_count(
    app: AppHandle,
    state: State<'_, AppState>,
    count: i64,
) -> Result<Vec<PaneView>, String> {
    let count = state.settings.clamp_pane_count(count);

    let (result, views) = {
        let mut panes = state.panes.lock().map_err(|e| e.to_string())?;
        let result = panes.set_pane_count(count);
        (result, panes.views())
    };

    // Emitted on failure too: the frontend must drop headers whose panes are gone.
    if let Err(e) = app.emit("panes-rebuilt", &views) {
        log::warn!("[Panes] Failed to emit panes-rebuilt: {}", e);
    }

    result.map_err(|e| {
        log::error!("[Panes] Rebuild to {} panes failed: {}", count, e);
        e.to_string()
    })?;
    Ok(views)
}

/// Mirrors a pane's text field. Never navigates.
#[tauri::command]
pub async fn set_pane_entry(state: State<'_, AppState>, index: usize, text: String) -> Result<(), String> {
    let mut panes = state.panes.lock().map_err(|e| e.to_string())?;
    panes.set_entry(index, text).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn navigate_pane(state: State<'_, AppState>, index: usize) -> Result<(), String> {
    let panes = state.panes.lock().map_err(|e| e.to_string())?;
    panes.navigate(index).map_err(|e| {
        log::warn!("[Panes] Pane {} could not navigate: {}", index, e);
        e.to_string()
    })
}

#[tauri::command]
pub async fn set_theme(app: AppHandle, state: State<'_, AppState>, theme: Theme) -> Result<ThemeStyle, String> {
    let style = {
        let mut panes = state.panes.lock().map_err(|e| e.to_string())?;
        panes.set_theme(theme)
    };

    if let Err(e) = app.emit("theme-changed", &style) {
        log::warn!("[Theme] Failed to emit theme-changed: {}", e);
    }
    Ok(style)
}

#[tauri::command]
pub async fn get_theme(state: State<'_, AppState>) -> Result<ThemeStyle, String> {
    let panes = state.panes.lock().map_err(|e| e.to_string())?;
    Ok(panes.theme().style())
}

/// Scroll or resize of the pane list. Re-places every child webview.
#[tauri::command]
pub async fn sync_viewport(state: State<'_, AppState>, viewport: Viewport) -> Result<(), String> {
    let mut panes = state.panes.lock().map_err(|e| e.to_string())?;
    panes.sync_viewport(viewport).map_err(|e| e.to_string())
}
