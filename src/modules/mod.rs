// Module exports for pure logic
pub mod collection;  // Rebuild/reconciliation of the pane set
pub mod layout;      // Slot geometry and viewport clipping
pub mod pane;        // Single pane: entry text + surface
pub mod theme;       // Fixed theme palettes

#[cfg(test)]
pub mod testing;     // Recording fake surfaces
