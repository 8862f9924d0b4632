// Pane geometry - pure logic, no Tauri imports.
//
// Panes are stacked vertically in fixed-size slots. Child webviews are native
// views layered over the window, so they do not scroll with the HTML list; the
// frontend reports the list's viewport and every surface is re-placed from it.

use serde::Deserialize;

use crate::settings::Settings;

/// Logical-pixel rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PaneRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Overlapping area, or `None` when the rectangles share no area.
    pub fn intersect(&self, other: &PaneRect) -> Option<PaneRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(PaneRect::new(x, y, right - x, bottom - y))
    }
}

/// Visible part of the scroll list as reported by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport assumed before the frontend has reported one: the list fills
    /// the window below the controls and is scrolled to the top.
    pub fn initial(settings: &Settings, window_width: f64, window_height: f64) -> Self {
        Self {
            top: settings.controls_height,
            left: 0.0,
            width: window_width.max(0.0),
            height: (window_height - settings.controls_height).max(0.0),
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn rect(&self) -> PaneRect {
        PaneRect::new(self.left, self.top, self.width, self.height)
    }
}

/// Full slot of pane `index`, header included.
pub fn slot_rect(index: usize, settings: &Settings, viewport: &Viewport) -> PaneRect {
    PaneRect::new(
        viewport.left - viewport.scroll_x,
        viewport.top - viewport.scroll_y + index as f64 * settings.slot_stride(),
        settings.pane_width,
        settings.pane_height,
    )
}

/// Area of pane `index` covered by its browser surface.
pub fn surface_rect(index: usize, settings: &Settings, viewport: &Viewport) -> PaneRect {
    let slot = slot_rect(index, settings, viewport);
    PaneRect::new(
        slot.x,
        slot.y + settings.pane_header_height,
        slot.width,
        settings.surface_height(),
    )
}

/// Where the surface of pane `index` should be drawn, clipped to the
/// viewport. `None` means the surface is scrolled fully out of view.
pub fn visible_surface(index: usize, settings: &Settings, viewport: &Viewport) -> Option<PaneRect> {
    surface_rect(index, settings, viewport).intersect(&viewport.rect())
}
