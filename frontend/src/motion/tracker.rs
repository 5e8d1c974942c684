//! Active-section tracking for the navigation bar.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use thiserror::Error;

use super::visibility::LayoutProbe;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
    /// DOM id of the element marking the section.
    pub anchor: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            anchor: id.clone(),
            id,
            label: label.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("at least one section is required")]
    NoSections,
    #[error("section id `{0}` is used more than once")]
    DuplicateSection(String),
}

type Listener = Rc<dyn Fn(&str)>;

struct ActiveInner {
    current: String,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Read side of the active section id. Clones share the same value.
#[derive(Clone)]
pub struct ActiveSection {
    inner: Rc<RefCell<ActiveInner>>,
}

impl fmt::Debug for ActiveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ActiveSection")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl PartialEq for ActiveSection {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ActiveSection {
    pub fn current(&self) -> String {
        self.inner.borrow().current.clone()
    }

    /// Calls `listener` with every new id. Dropping the returned handle
    /// unsubscribes.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

pub struct Subscription {
    inner: Weak<RefCell<ActiveInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// The only write handle; owned by the tracker.
struct ActiveSectionWriter {
    inner: Rc<RefCell<ActiveInner>>,
}

impl ActiveSectionWriter {
    fn new(initial: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ActiveInner {
                current: initial.to_string(),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    fn reader(&self) -> ActiveSection {
        ActiveSection {
            inner: self.inner.clone(),
        }
    }

    fn set(&self, id: &str) -> bool {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == id {
                return false;
            }
            inner.current = id.to_string();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Outside the borrow so listeners may read the value back.
        for listener in listeners {
            listener(id);
        }
        true
    }
}

pub struct SectionTracker {
    sections: Vec<Section>,
    margin: f64,
    writer: ActiveSectionWriter,
}

impl SectionTracker {
    /// The first section is active until a scroll says otherwise.
    pub fn new(sections: Vec<Section>, margin: f64) -> Result<Self, TrackerError> {
        let first = sections.first().ok_or(TrackerError::NoSections)?;
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(TrackerError::DuplicateSection(section.id.clone()));
            }
        }
        let writer = ActiveSectionWriter::new(&first.id);
        Ok(Self {
            sections,
            margin,
            writer,
        })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> ActiveSection {
        self.writer.reader()
    }

    pub fn current(&self) -> String {
        self.writer.inner.borrow().current.clone()
    }

    /// First section whose `[top - margin, top + height - margin)` range holds
    /// `scroll_y`. Geometry is read fresh from `probe` on every call; sections
    /// without a mounted anchor are skipped.
    pub fn resolve(&self, scroll_y: f64, probe: &dyn LayoutProbe) -> Option<&Section> {
        self.sections.iter().find(|section| {
            probe.offset_box(&section.anchor).map_or(false, |b| {
                scroll_y >= b.top - self.margin && scroll_y < b.top + b.height - self.margin
            })
        })
    }

    /// Updates the active section for a new scroll offset. When no section
    /// matches, the previous one stays active. Returns `true` on change.
    pub fn on_scroll(&self, scroll_y: f64, probe: &dyn LayoutProbe) -> bool {
        let Some(section) = self.resolve(scroll_y, probe) else {
            return false;
        };
        let changed = self.writer.set(&section.id);
        if changed {
            tracing::debug!(section = %section.id, scroll_y, "active section changed");
        }
        changed
    }
}
