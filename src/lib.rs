// Pane Browser library entry point.
// main.rs only calls `run`; the modules are public so they can be tested
// independently.

use std::sync::Mutex;

use tauri::Manager;

pub mod commands;
pub mod error;
pub mod settings;
pub mod state;
pub mod webview;

// Pure logic modules (no Tauri imports)
pub mod modules;

use modules::collection::PaneCollection;
use modules::layout::Viewport;
use settings::Settings;
use state::AppState;
use webview::WebviewSurfaceFactory;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let log_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::default().level(log_level).build())
        .setup(|app| {
            let settings = Settings::default();
            let window = app.get_window("main").ok_or("main window is not configured")?;

            let size = window.inner_size()?.to_logical::<f64>(window.scale_factor()?);
            let viewport = Viewport::initial(&settings, size.width, size.height);

            let factory = WebviewSurfaceFactory::new(window, &settings)?;
            let mut panes = PaneCollection::new(factory, settings.clone(), viewport);
            panes.set_pane_count(settings.initial_panes)?;
            log::info!("[Setup] Started with {} pane(s)", panes.len());

            app.manage(AppState {
                panes: Mutex::new(panes),
                settings,
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_settings,
            commands::get_panes,
            commands::set_pane_count,
            commands::set_pane_entry,
            commands::navigate_pane,
            commands::set_theme,
            commands::get_theme,
            commands::sync_viewport
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
