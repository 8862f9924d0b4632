use thiserror::Error;

/// Failures raised while driving pane surfaces.
///
/// URL problems are never reported here: whatever text the user typed is handed
/// to the surface as-is and the surface renders its own error page.
#[derive(Debug, Error)]
pub enum PaneError {
    #[error("webview operation failed: {0}")]
    Webview(#[from] tauri::Error),

    #[error("failed to encode navigation script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("invalid start page: {0}")]
    Url(#[from] url::ParseError),

    #[error("no pane at index {0}")]
    InvalidPane(usize),

    /// Raised by non-webview surfaces (tests, headless runs).
    #[error("surface failure: {0}")]
    Surface(String),
}

pub type PaneResult<T> = Result<T, PaneError>;
