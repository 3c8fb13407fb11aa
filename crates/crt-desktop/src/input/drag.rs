//! Drag state machine
//!
//! ```text
//!   Idle ──press──▶ Pressed ──motion past threshold──▶ Dragging
//!    ▲                 │                                   │
//!    └─────release─────┴───────────release/cancel──────────┘
//! ```
//!
//! While dragging, the live position is `origin + (pointer - origin_pointer)`
//! clamped to the subject's rules. Window drags clamp against the workspace
//! bounds captured at press time, not the live bounds.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bounds::clamp_into;
use crate::math::{Size, Vec2};
use crate::types::{AppId, InstanceId};

/// What is being dragged
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragSubject {
    /// A desktop icon, by the app it launches
    Icon(AppId),
    /// A window, by its title bar
    TitleBar(InstanceId),
}

/// Current phase of the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Pressed,
    Dragging,
}

/// State of one press-move-release interaction
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub subject: DragSubject,
    pub origin_pointer: Vec2,
    pub origin_position: Vec2,
    /// Window size at press time; `None` for icons
    pub origin_size: Option<Size>,
    /// Workspace bounds at press time
    pub bounds: Size,
    pub has_crossed_threshold: bool,
    /// Last position produced by `motion`
    pub live_position: Vec2,
}

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// Released without crossing the threshold
    Click,
    /// Released after a drag, at this position
    Dropped(Vec2),
}

/// A finished session
#[derive(Clone, Debug, PartialEq)]
pub struct DragRelease {
    pub subject: DragSubject,
    pub outcome: DragOutcome,
}

/// Pointer-drag tracker shared by icons and window title bars
#[derive(Clone, Debug)]
pub struct DragController {
    session: Option<DragSession>,
    threshold: f32,
}

impl DragController {
    pub fn new(threshold: f32) -> Self {
        Self {
            session: None,
            threshold,
        }
    }

    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(s) if s.has_crossed_threshold => DragPhase::Dragging,
            Some(_) => DragPhase::Pressed,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn subject(&self) -> Option<&DragSubject> {
        self.session.as_ref().map(|s| &s.subject)
    }

    /// True once the current session has crossed the threshold
    pub fn is_dragging(&self) -> bool {
        self.phase() == DragPhase::Dragging
    }

    /// Idle → Pressed
    ///
    /// A press while another session is live replaces it; the old session is
    /// dropped without committing anything.
    pub fn press(
        &mut self,
        subject: DragSubject,
        pointer: Vec2,
        origin_position: Vec2,
        origin_size: Option<Size>,
        bounds: Size,
    ) {
        trace!(?subject, x = pointer.x, y = pointer.y, "drag pressed");
        self.session = Some(DragSession {
            subject,
            origin_pointer: pointer,
            origin_position,
            origin_size,
            bounds,
            has_crossed_threshold: false,
            live_position: origin_position,
        });
    }

    /// Feed a pointer move
    ///
    /// Returns the new live position once the session is dragging, `None`
    /// while idle or still inside the click threshold.
    pub fn motion(&mut self, pointer: Vec2) -> Option<Vec2> {
        let threshold = self.threshold;
        let session = self.session.as_mut()?;
        let delta = pointer - session.origin_pointer;

        if !session.has_crossed_threshold {
            if delta.x.abs() <= threshold && delta.y.abs() <= threshold {
                return None;
            }
            session.has_crossed_threshold = true;
            trace!(subject = ?session.subject, "drag started");
        }

        let raw = session.origin_position + delta;
        let live = match (&session.subject, session.origin_size) {
            (DragSubject::TitleBar(_), Some(size)) => clamp_into(session.bounds, raw, size),
            _ => raw.non_negative(),
        };
        session.live_position = live;
        Some(live)
    }

    /// Any state → Idle, reporting how the session ended
    pub fn release(&mut self) -> Option<DragRelease> {
        let session = self.session.take()?;
        let outcome = if session.has_crossed_threshold {
            DragOutcome::Dropped(session.live_position)
        } else {
            DragOutcome::Click
        };
        trace!(subject = ?session.subject, ?outcome, "drag released");
        Some(DragRelease {
            subject: session.subject,
            outcome,
        })
    }

    /// Abandon the session; nothing beyond the last frame is committed
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon() -> DragSubject {
        DragSubject::Icon(AppId::from("about"))
    }

    #[test]
    fn test_small_motion_is_a_click() {
        let mut drag = DragController::new(5.0);
        drag.press(icon(), Vec2::new(100.0, 100.0), Vec2::new(8.0, 8.0), None, Size::new(800.0, 600.0));
        assert_eq!(drag.phase(), DragPhase::Pressed);

        assert_eq!(drag.motion(Vec2::new(103.0, 102.0)), None);
        assert_eq!(drag.phase(), DragPhase::Pressed);

        let release = drag.release().unwrap();
        assert_eq!(release.outcome, DragOutcome::Click);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_threshold_is_per_axis() {
        let mut drag = DragController::new(5.0);
        drag.press(icon(), Vec2::ZERO, Vec2::new(8.0, 8.0), None, Size::new(800.0, 600.0));
        // 5px exactly does not cross; 6px on one axis does
        assert_eq!(drag.motion(Vec2::new(5.0, 5.0)), None);
        assert_eq!(drag.motion(Vec2::new(0.0, 6.0)), Some(Vec2::new(8.0, 14.0)));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_dragging_stays_dragging_below_threshold() {
        let mut drag = DragController::new(5.0);
        drag.press(icon(), Vec2::ZERO, Vec2::new(50.0, 50.0), None, Size::new(800.0, 600.0));
        drag.motion(Vec2::new(20.0, 0.0));
        assert_eq!(drag.motion(Vec2::new(1.0, 0.0)), Some(Vec2::new(51.0, 50.0)));
        assert_eq!(
            drag.release().unwrap().outcome,
            DragOutcome::Dropped(Vec2::new(51.0, 50.0))
        );
    }

    #[test]
    fn test_icon_position_is_non_negative() {
        let mut drag = DragController::new(5.0);
        drag.press(icon(), Vec2::new(50.0, 50.0), Vec2::new(8.0, 8.0), None, Size::new(800.0, 600.0));
        assert_eq!(drag.motion(Vec2::new(0.0, 0.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn test_window_clamped_to_bounds_snapshot() {
        let mut drag = DragController::new(5.0);
        let subject = DragSubject::TitleBar(InstanceId::new(1));
        drag.press(
            subject,
            Vec2::new(100.0, 40.0),
            Vec2::new(60.0, 30.0),
            Some(Size::new(480.0, 320.0)),
            Size::new(800.0, 600.0),
        );
        assert_eq!(
            drag.motion(Vec2::new(900.0, 900.0)),
            Some(Vec2::new(320.0, 280.0))
        );
        assert_eq!(drag.motion(Vec2::new(-500.0, -500.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn test_cancel_discards() {
        let mut drag = DragController::new(5.0);
        drag.press(icon(), Vec2::ZERO, Vec2::ZERO, None, Size::new(800.0, 600.0));
        drag.motion(Vec2::new(30.0, 30.0));
        assert!(drag.cancel().is_some());
        assert!(drag.release().is_none());
        assert_eq!(drag.motion(Vec2::new(60.0, 60.0)), None);
    }
}
