// Tauri child-webview surfaces backing each pane.

use tauri::{LogicalPosition, LogicalSize, Position, Rect, Size, Webview, WebviewBuilder, WebviewUrl, Window};
use url::Url;

use crate::error::PaneResult;
use crate::modules::collection::SurfaceFactory;
use crate::modules::layout::PaneRect;
use crate::modules::pane::BrowserSurface;
use crate::settings::Settings;

/// Script that points the page at `target` exactly as typed. The engine
/// resolves (or fails to resolve) it, same as a location bar would.
fn location_script(target: &str) -> PaneResult<String> {
    let literal = serde_json::to_string(target)?;
    Ok(format!("window.location.href = {};", literal))
}

/// Page a new pane webview opens on. Seeds that parse as absolute URLs are
/// opened directly so the first load cannot race the blank start page; the
/// `bool` says whether that happened. Anything else starts blank and goes
/// through `location_script`.
fn start_page(seed: &str, blank: &Url) -> (Url, bool) {
    if seed.is_empty() {
        return (blank.clone(), false);
    }
    match Url::parse(seed) {
        Ok(url) => (url, true),
        Err(_) => (blank.clone(), false),
    }
}

pub struct WebviewSurface {
    webview: Webview,
    /// Already opened on its seed by the factory.
    seeded: bool,
}

impl BrowserSurface for WebviewSurface {
    fn label(&self) -> &str {
        self.webview.label()
    }

    fn load(&self, url: &str) -> PaneResult<()> {
        self.webview.eval(&location_script(url)?)?;
        Ok(())
    }

    fn load_initial(&self, url: &str) -> PaneResult<()> {
        if self.seeded {
            return Ok(());
        }
        self.load(url)
    }

    fn place(&self, bounds: Option<PaneRect>) -> PaneResult<()> {
        match bounds {
            Some(rect) => {
                self.webview.set_bounds(Rect {
                    position: Position::Logical(LogicalPosition::new(rect.x, rect.y)),
                    size: Size::Logical(LogicalSize::new(rect.width, rect.height)),
                })?;
                self.webview.show()?;
            }
            None => self.webview.hide()?,
        }
        Ok(())
    }

    fn close(self) -> PaneResult<()> {
        self.webview.close()?;
        Ok(())
    }
}

/// Adds pane webviews as children of the main window.
pub struct WebviewSurfaceFactory {
    window: Window,
    start_page: Url,
    size: LogicalSize<f64>,
}

impl WebviewSurfaceFactory {
    pub fn new(window: Window, settings: &Settings) -> PaneResult<Self> {
        Ok(Self {
            window,
            start_page: Url::parse(&settings.start_page)?,
            size: LogicalSize::new(settings.pane_width, settings.surface_height()),
        })
    }
}

impl SurfaceFactory for WebviewSurfaceFactory {
    type Surface = WebviewSurface;

    fn create(&mut self, label: &str, seed: &str) -> PaneResult<WebviewSurface> {
        let (start, seeded) = start_page(seed, &self.start_page);
        let builder = WebviewBuilder::new(label, WebviewUrl::External(start));
        let webview = self
            .window
            .add_child(builder, LogicalPosition::new(0.0, 0.0), self.size)?;
        // Hidden until the layout pass gives it a slot.
        webview.hide()?;
        log::debug!("[Webview] Created {} (seeded: {})", label, seeded);
        Ok(WebviewSurface { webview, seeded })
    }
}
