// Pane collection manager - pure logic, no Tauri imports.
//
// Owns the pane sequence, the URL snapshot carried across rebuilds, the theme
// selection and the last reported viewport. Every count change tears down all
// panes and builds a fresh set; nothing is patched in place.

use serde::Serialize;

use crate::error::{PaneError, PaneResult};
use crate::modules::layout::{self, Viewport};
use crate::modules::pane::{BrowserPane, BrowserSurface};
use crate::modules::theme::{Theme, ThemeStyle};
use crate::settings::Settings;

/// Produces a new surface for every pane the collection builds.
pub trait SurfaceFactory {
    type Surface: BrowserSurface;

    /// `seed` is the URL the pane will be seeded with (possibly empty). A
    /// factory may start the surface on it directly; the pane still calls
    /// `BrowserSurface::load_initial` with the same text afterwards.
    fn create(&mut self, label: &str, seed: &str) -> PaneResult<Self::Surface>;
}

/// What the frontend needs to draw one pane header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneView {
    pub index: usize,
    pub url: String,
    pub label: String,
}

pub struct PaneCollection<F: SurfaceFactory> {
    factory: F,
    settings: Settings,
    panes: Vec<BrowserPane<F::Surface>>,
    snapshot: Vec<String>,
    theme: Theme,
    viewport: Viewport,
    generation: u64,
}

impl<F: SurfaceFactory> PaneCollection<F> {
    /// Empty collection. Call `set_pane_count` to build the first panes.
    pub fn new(factory: F, settings: Settings, viewport: Viewport) -> Self {
        let theme = settings.initial_theme;
        Self {
            factory,
            settings,
            panes: Vec::new(),
            snapshot: Vec::new(),
            theme,
            viewport,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Entry text of every pane, in index order.
    pub fn current_urls(&self) -> Vec<String> {
        self.panes.iter().map(|p| p.current_url().to_string()).collect()
    }

    pub fn views(&self) -> Vec<PaneView> {
        self.panes
            .iter()
            .enumerate()
            .map(|(index, pane)| PaneView {
                index,
                url: pane.current_url().to_string(),
                label: pane.surface().label().to_string(),
            })
            .collect()
    }

    pub fn set_theme(&mut self, theme: Theme) -> ThemeStyle {
        self.theme = theme;
        log::info!("[Theme] Applied {}", theme.label());
        theme.style()
    }

    /// Rebuilds the collection with exactly `count` panes.
    ///
    /// Pane `i` is seeded with the URL the previous pane `i` held, or left
    /// empty when the previous set was shorter. On failure the collection is
    /// left empty and the snapshot is kept, so the next call rebuilds from the
    /// same URLs.
    pub fn set_pane_count(&mut self, count: usize) -> PaneResult<()> {
        if !self.panes.is_empty() {
            self.snapshot = self.current_urls();
        }
        log::info!(
            "[Panes] Rebuilding {} -> {} panes (carrying {} urls)",
            self.panes.len(),
            count,
            self.snapshot.len()
        );

        self.destroy_panes();
        self.generation += 1;

        let mut rebuilt = Vec::with_capacity(count);
        for index in 0..count {
            let label = format!("pane-{}-{}", self.generation, index);
            let seed = self.snapshot.get(index).map(String::as_str).unwrap_or("");
            let surface = match self.factory.create(&label, seed) {
                Ok(surface) => surface,
                Err(e) => {
                    log::error!("[Panes] Failed to create {}: {}", label, e);
                    close_all(rebuilt);
                    return Err(e);
                }
            };

            let mut pane = BrowserPane::new(surface);
            if let Err(e) = pane.set_initial_url(seed) {
                log::error!("[Panes] Failed to load {:?} into {}: {}", seed, label, e);
                rebuilt.push(pane);
                close_all(rebuilt);
                return Err(e);
            }
            rebuilt.push(pane);
        }

        self.panes = rebuilt;
        if let Err(e) = self.apply_layout() {
            log::error!("[Panes] Failed to place rebuilt panes: {}", e);
            self.destroy_panes();
            return Err(e);
        }
        Ok(())
    }

    pub fn set_entry(&mut self, index: usize, text: impl Into<String>) -> PaneResult<()> {
        let pane = self.panes.get_mut(index).ok_or(PaneError::InvalidPane(index))?;
        pane.set_entry_text(text);
        Ok(())
    }

    pub fn navigate(&self, index: usize) -> PaneResult<()> {
        let pane = self.panes.get(index).ok_or(PaneError::InvalidPane(index))?;
        log::info!("[Panes] Pane {} navigating to {:?}", index, pane.current_url());
        pane.navigate()
    }

    pub fn sync_viewport(&mut self, viewport: Viewport) -> PaneResult<()> {
        self.viewport = viewport;
        self.apply_layout()
    }

    /// Places every surface over its slot, in index order.
    fn apply_layout(&self) -> PaneResult<()> {
        for (index, pane) in self.panes.iter().enumerate() {
            let bounds = layout::visible_surface(index, &self.settings, &self.viewport);
            pane.surface().place(bounds)?;
        }
        Ok(())
    }

    fn destroy_panes(&mut self) {
        close_all(std::mem::take(&mut self.panes));
    }
}

fn close_all<S: BrowserSurface>(panes: Vec<BrowserPane<S>>) {
    for pane in panes {
        let surface = pane.into_surface();
        let label = surface.label().to_string();
        if let Err(e) = surface.close() {
            log::warn!("[Panes] Failed to close {}: {}", label, e);
        }
    }
}
