//! Session freshness tracker.
//!
//! In-memory marker set answering "has this key been fetched at least once
//! since the page was loaded?". Client-side navigation keeps the markers,
//! so repeat visits are served from the persistent store; a full reload
//! (F5) drops the whole set and forces one network fetch per key, ensuring
//! a fresh session never trusts data from a previous one without at least
//! one revalidation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::CacheKey;

/// Process-lifetime set of freshness markers.
///
/// Cheap to clone; all clones share the same underlying set, so the one
/// instance created at startup can be handed to every orchestrator.
#[derive(Clone, Default)]
pub struct SessionTracker {
    fetched: Rc<RefCell<HashSet<CacheKey>>>,
}

impl SessionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `mark_fetched` was called for this key during the current
    /// page lifetime and the tracker has not been cleared since.
    pub fn has_fetched(&self, key: &CacheKey) -> bool {
        self.fetched.borrow().contains(key)
    }

    /// Record the key as fetched. Idempotent.
    pub fn mark_fetched(&self, key: &CacheKey) {
        self.fetched.borrow_mut().insert(key.clone());
    }

    /// Wipe all markers. Invoked on logout.
    pub fn clear(&self) {
        self.fetched.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeFilter;

    #[test]
    fn test_unmarked_key_is_not_fetched() {
        let tracker = SessionTracker::new();
        assert!(!tracker.has_fetched(&CacheKey::sellers_list()));
    }

    #[test]
    fn test_mark_is_idempotent() {
        let tracker = SessionTracker::new();
        let key = CacheKey::plans_list();
        tracker.mark_fetched(&key);
        tracker.mark_fetched(&key);
        assert!(tracker.has_fetched(&key));
    }

    #[test]
    fn test_clear_wipes_everything() {
        let tracker = SessionTracker::new();
        tracker.mark_fetched(&CacheKey::sellers_list());
        tracker.mark_fetched(&CacheKey::dashboard(TimeFilter::All));
        tracker.clear();
        assert!(!tracker.has_fetched(&CacheKey::sellers_list()));
        assert!(!tracker.has_fetched(&CacheKey::dashboard(TimeFilter::All)));
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = SessionTracker::new();
        let clone = tracker.clone();
        tracker.mark_fetched(&CacheKey::sellers_list());
        assert!(clone.has_fetched(&CacheKey::sellers_list()));
    }
}
