//! Cooperative cancellation token (spec §5).
//!
//! Checked "at the top of every iteration and at every suspension point
//! inside the evaluator" and honored by network calls on the same token.
//! Deliberately a plain atomic flag rather than a pull-in of `tokio-util`:
//! the engine only ever needs "has someone asked us to stop", never
//! `tokio_util::sync::CancellationToken`'s hierarchical child-token
//! machinery.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_visible_across_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
