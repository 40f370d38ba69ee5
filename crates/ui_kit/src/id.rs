//! Stable identifier allocation for widgets that link DOM elements.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::*;

static FALLBACK_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
/// Monotonic allocator for widget DOM identifiers.
///
/// Clones share one counter, so a host can install a single allocator via
/// [`provide_id_allocator`] and every widget below it draws unique ids.
pub struct IdAllocator {
    counter: Arc<AtomicU64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// A fresh allocator starting at 1.
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The next identifier under `prefix`, e.g. `ui-dialog-3`.
    pub fn next_id(&self, prefix: &str) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{seq}")
    }
}

/// Installs an allocator into context for the component tree below.
pub fn provide_id_allocator(ids: IdAllocator) {
    provide_context(ids);
}

/// Allocates an id from the context allocator, falling back to a
/// process-wide counter when no host installed one.
pub(crate) fn use_widget_id(prefix: &str) -> String {
    match use_context::<IdAllocator>() {
        Some(ids) => ids.next_id(prefix),
        None => format!(
            "{prefix}-{}",
            FALLBACK_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_are_monotonic_under_a_prefix() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next_id("ui-dialog"), "ui-dialog-1");
        assert_eq!(ids.next_id("ui-dialog"), "ui-dialog-2");
        assert_eq!(ids.next_id("ui-menu"), "ui-menu-3");
    }

    #[test]
    fn clones_share_one_counter() {
        let ids = IdAllocator::new();
        let clone = ids.clone();
        assert_eq!(ids.next_id("ui-dialog"), "ui-dialog-1");
        assert_eq!(clone.next_id("ui-dialog"), "ui-dialog-2");
    }

    #[test]
    fn separate_allocators_do_not_interfere() {
        let first = IdAllocator::new();
        let second = IdAllocator::new();
        assert_eq!(first.next_id("ui-dialog"), "ui-dialog-1");
        assert_eq!(second.next_id("ui-dialog"), "ui-dialog-1");
    }
}
