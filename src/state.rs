// Shared application state managed by Tauri.

use std::sync::Mutex;

use crate::modules::collection::PaneCollection;
use crate::settings::Settings;
use crate::webview::WebviewSurfaceFactory;

pub struct AppState {
    /// Every command touching the panes holds this lock for the whole
    /// operation, so rebuilds never interleave with navigation or layout.
    pub panes: Mutex<PaneCollection<WebviewSurfaceFactory>>,
    pub settings: Settings,
}
