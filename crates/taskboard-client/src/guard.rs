//! Mount Guard
//!
//! Shared flag a view flips on unmount so responses that arrive later are
//! dropped instead of written into disposed state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Run `apply` only while the view is still mounted.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let guard = MountGuard::new();
        let clone = guard.clone();
        assert!(clone.is_live());

        guard.dispose();
        assert!(!clone.is_live());
    }

    #[test]
    fn test_apply_skipped_after_dispose() {
        let guard = MountGuard::new();
        let mut written = Vec::new();

        assert!(guard.apply(1, |v| written.push(v)));
        guard.dispose();
        assert!(!guard.apply(2, |v| written.push(v)));

        assert_eq!(written, vec![1]);
    }
}
