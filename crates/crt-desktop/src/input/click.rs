//! Double-click detection
//!
//! Time is passed in by the caller (milliseconds, same clock for every
//! call) so tests can drive it deterministically.

use super::DragSubject;

/// Pairs consecutive clicks on the same target into double clicks
#[derive(Clone, Debug)]
pub struct ClickTracker {
    window_ms: f64,
    last: Option<(DragSubject, f64)>,
}

impl ClickTracker {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Record a click; returns true when it completes a double click
    ///
    /// A completed double click clears the tracker so a third click starts
    /// a new pair.
    pub fn register(&mut self, target: DragSubject, now_ms: f64) -> bool {
        let is_double = matches!(
            &self.last,
            Some((prev, at)) if *prev == target && now_ms - *at <= self.window_ms
        );
        if is_double {
            self.last = None;
        } else {
            self.last = Some((target, now_ms));
        }
        is_double
    }

    /// Forget the pending click (after a drag or when the target goes away)
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppId, InstanceId};

    fn about() -> DragSubject {
        DragSubject::Icon(AppId::from("about"))
    }

    #[test]
    fn test_two_quick_clicks() {
        let mut clicks = ClickTracker::new(400.0);
        assert!(!clicks.register(about(), 1000.0));
        assert!(clicks.register(about(), 1250.0));
        // Third click starts over
        assert!(!clicks.register(about(), 1300.0));
    }

    #[test]
    fn test_slow_clicks() {
        let mut clicks = ClickTracker::new(400.0);
        assert!(!clicks.register(about(), 0.0));
        assert!(!clicks.register(about(), 401.0));
        assert!(clicks.register(about(), 700.0));
    }

    #[test]
    fn test_different_targets() {
        let mut clicks = ClickTracker::new(400.0);
        assert!(!clicks.register(about(), 0.0));
        assert!(!clicks.register(DragSubject::TitleBar(InstanceId::new(1)), 100.0));
        assert!(!clicks.register(about(), 200.0));
    }

    #[test]
    fn test_reset() {
        let mut clicks = ClickTracker::new(400.0);
        clicks.register(about(), 0.0);
        clicks.reset();
        assert!(!clicks.register(about(), 100.0));
    }
}
