//! Pointer input: drag state machine and click discrimination
//!
//! One [`DragController`] serves both desktop icons and window title bars.
//! A press that never travels past the threshold is reported as a click;
//! the [`ClickTracker`] pairs clicks into double clicks.

mod click;
mod drag;
mod result;

pub use click::ClickTracker;
pub use drag::{DragController, DragOutcome, DragPhase, DragRelease, DragSession, DragSubject};
pub use result::InputResult;
