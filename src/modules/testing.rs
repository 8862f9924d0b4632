// Test doubles for pane surfaces. Compiled for tests only.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{PaneError, PaneResult};
use crate::modules::collection::SurfaceFactory;
use crate::modules::layout::PaneRect;
use crate::modules::pane::BrowserSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Created(String),
    Load(String, String),
    Place(String, Option<PaneRect>),
    Closed(String),
}

/// Shared, ordered record of everything done to fake surfaces.
#[derive(Debug, Clone, Default)]
pub struct SurfaceLog(Rc<RefCell<Vec<SurfaceEvent>>>);

impl SurfaceLog {
    fn push(&self, event: SurfaceEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn loads(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Load(label, url) => Some((label, url)),
                _ => None,
            })
            .collect()
    }

    pub fn created(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Created(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn closed(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Closed(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn placements(&self) -> Vec<(String, Option<PaneRect>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SurfaceEvent::Place(label, rect) => Some((label, rect)),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct FakeSurface {
    label: String,
    log: SurfaceLog,
    fail_loads: bool,
    fail_places: bool,
}

impl FakeSurface {
    pub fn new(label: &str, log: SurfaceLog) -> Self {
        Self {
            label: label.to_string(),
            log,
            fail_loads: false,
            fail_places: false,
        }
    }

    pub fn failing_loads(label: &str, log: SurfaceLog) -> Self {
        Self {
            fail_loads: true,
            ..Self::new(label, log)
        }
    }

    pub fn failing_places(label: &str, log: SurfaceLog) -> Self {
        Self {
            fail_places: true,
            ..Self::new(label, log)
        }
    }
}

impl BrowserSurface for FakeSurface {
    fn label(&self) -> &str {
        &self.label
    }

    fn load(&self, url: &str) -> PaneResult<()> {
        if self.fail_loads {
            return Err(PaneError::Surface(format!("{} refused load", self.label)));
        }
        self.log.push(SurfaceEvent::Load(self.label.clone(), url.to_string()));
        Ok(())
    }

    fn place(&self, bounds: Option<PaneRect>) -> PaneResult<()> {
        if self.fail_places {
            return Err(PaneError::Surface(format!("{} refused placement", self.label)));
        }
        self.log.push(SurfaceEvent::Place(self.label.clone(), bounds));
        Ok(())
    }

    fn close(self) -> PaneResult<()> {
        self.log.push(SurfaceEvent::Closed(self.label));
        Ok(())
    }
}

/// Creates `FakeSurface`s, optionally failing on the `fail_on`-th creation
/// (zero-based, counted over the factory's lifetime). With `fail_places` every
/// surface it hands out refuses to be placed.
#[derive(Debug, Default)]
pub struct FakeFactory {
    pub log: SurfaceLog,
    pub fail_on: Option<usize>,
    pub fail_places: bool,
    created: usize,
}

impl FakeFactory {
    pub fn new(log: SurfaceLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn failing_on(log: SurfaceLog, attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Self::new(log)
        }
    }

    pub fn failing_places(log: SurfaceLog) -> Self {
        Self {
            fail_places: true,
            ..Self::new(log)
        }
    }
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create(&mut self, label: &str, _seed: &str) -> PaneResult<FakeSurface> {
        let attempt = self.created;
        self.created += 1;
        if self.fail_on == Some(attempt) {
            return Err(PaneError::Surface(format!("could not create {}", label)));
        }
        self.log.push(SurfaceEvent::Created(label.to_string()));
        if self.fail_places {
            return Ok(FakeSurface::failing_places(label, self.log.clone()));
        }
        Ok(FakeSurface::new(label, self.log.clone()))
    }
}
