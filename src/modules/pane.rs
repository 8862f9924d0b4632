// Single browser pane - pure logic, no Tauri imports.

use crate::error::PaneResult;
use crate::modules::layout::PaneRect;

/// Rendering surface a pane drives. The production implementation is a Tauri
/// child webview (see `webview.rs`).
pub trait BrowserSurface {
    /// Unique handle name, fresh for every surface ever created.
    fn label(&self) -> &str;

    /// Hands `url` to the surface verbatim. What happens with text that is not
    /// a URL is up to the surface.
    fn load(&self, url: &str) -> PaneResult<()>;

    /// First load of a freshly created surface. Surfaces that were already
    /// started on `url` by their factory can skip it.
    fn load_initial(&self, url: &str) -> PaneResult<()> {
        self.load(url)
    }

    /// Places the surface, or hides it when `None`.
    fn place(&self, bounds: Option<PaneRect>) -> PaneResult<()>;

    /// Detaches and destroys the surface.
    fn close(self) -> PaneResult<()>;
}

/// URL entry + trigger + surface.
///
/// The entry text is the pane's only URL state. It is never synced back from
/// the surface, so it may differ from what the surface actually shows.
#[derive(Debug)]
pub struct BrowserPane<S> {
    entry: String,
    surface: S,
}

impl<S: BrowserSurface> BrowserPane<S> {
    pub fn new(surface: S) -> Self {
        Self {
            entry: String::new(),
            surface,
        }
    }

    /// Seeds the entry with `url` and loads it. Empty strings leave the pane
    /// blank. Only called right after construction.
    pub fn set_initial_url(&mut self, url: &str) -> PaneResult<()> {
        if url.is_empty() {
            return Ok(());
        }
        self.entry = url.to_string();
        log::debug!("[Pane] Seeding {:?}", self.entry);
        self.surface.load_initial(&self.entry)
    }

    /// Mirrors the text field. Does not navigate.
    pub fn set_entry_text(&mut self, text: impl Into<String>) {
        self.entry = text.into();
    }

    pub fn navigate(&self) -> PaneResult<()> {
        log::debug!("[Pane] Loading {:?}", self.entry);
        self.surface.load(&self.entry)
    }

    pub fn current_url(&self) -> &str {
        &self.entry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
