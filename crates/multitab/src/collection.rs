//! Reactive, append-only collection of tabs.

use leptos::prelude::*;

use crate::error::TabBarError;
use crate::tab::Tab;

/// Ordered set of [`Tab`]s backing a [`TabBar`](crate::TabBar).
///
/// A `Copy` handle over a signal, the same way a Leptos app shares its
/// stores: every copy reads and writes the same list, and any view
/// reading it re-renders when the list changes.
///
/// The public contract is append-only. Tabs cannot be removed or
/// reordered once added, so insertion order fixes both the render order
/// and the meaning of the selection index.
#[derive(Clone, Copy)]
pub struct TabCollection {
    tabs: RwSignal<Vec<Tab>>,
}

impl TabCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(Vec::new()),
        }
    }

    /// Appends a tab to the end of the collection.
    ///
    /// No uniqueness check is made on title or tag; duplicates are
    /// permitted.
    pub fn push(&self, tab: Tab) {
        self.tabs.update(|tabs| {
            tabs.push(tab);
            log::debug!("tab appended, collection now holds {}", tabs.len());
        });
    }

    /// Number of tabs. Reactive when read inside a tracking context.
    pub fn len(&self) -> usize {
        self.tabs.with(|tabs| tabs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.with(|tabs| tabs.is_empty())
    }

    /// Returns the tab at `index`, or [`TabBarError::IndexOutOfRange`]
    /// when `index` falls outside `[0, len)`.
    pub fn at(&self, index: usize) -> Result<Tab, TabBarError> {
        self.tabs.with(|tabs| {
            tabs.get(index)
                .cloned()
                .ok_or(TabBarError::IndexOutOfRange {
                    index,
                    len: tabs.len(),
                })
        })
    }

    /// Read-only access to the tabs in insertion order.
    pub fn with<U>(&self, f: impl FnOnce(&[Tab]) -> U) -> U {
        self.tabs.with(|tabs| f(tabs))
    }
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::new()
    }
}
