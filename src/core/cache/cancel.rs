//! Cooperative cancellation for in-flight requests.
//!
//! A [`CancelToken`] is created per fetch and owned by the view run that
//! issued it. Cancelling is a flag flip, not an interrupt: the orchestrator
//! checks the token after the network call resolves and before any cache
//! write or state update, so a late response from a superseded request can
//! never overwrite fresher data. The wire-level abort (AbortSignal) is
//! layered on top by the view hook; this token is what the cache core
//! trusts, which also keeps it testable off-browser.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag for one in-flight request.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Create a live (not cancelled) token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// True iff `cancel` was called on this token or any of its clones.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_live() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn test_cancel_is_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
