//! Cooperative cancellation for long-running operators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cancellation token shared between a caller and in-flight operators.
///
/// Every operator loop polls the token at each element boundary, so a large
/// operation can be aborted mid-flight. Cancellation is a signal, not an
/// error: a cancelled operator returns `Ok` early and its output container
/// is left in an undefined, partially-written state. Callers decide whether
/// a result is usable by checking [`Context::is_cancelled`] afterwards.
///
/// Cloning shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A fresh, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. All clones observe the flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_visible_through_clone() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_cancelled());

        ctx.cancel();
        assert!(other.is_cancelled());
    }
}
