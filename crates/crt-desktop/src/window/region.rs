//! Hit testing of the window chrome

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Vec2, FRAME_STYLE};

/// Part of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowRegion {
    /// Drag handle; excludes the control buttons
    TitleBar,
    MinimizeButton,
    MaximizeButton,
    CloseButton,
    /// Everything below the title bar
    Content,
}

impl WindowRegion {
    /// Classify `point` against a window occupying `rect`
    ///
    /// Control buttons sit at the right end of the title bar in the order
    /// minimize, maximize, close.
    pub fn at(rect: Rect, point: Vec2) -> Option<WindowRegion> {
        if !rect.contains(point) {
            return None;
        }

        let style = &FRAME_STYLE;
        let title_bottom = rect.y + style.border_width + style.title_bar_height;
        if point.y >= title_bottom {
            return Some(WindowRegion::Content);
        }

        let buttons = [
            WindowRegion::CloseButton,
            WindowRegion::MaximizeButton,
            WindowRegion::MinimizeButton,
        ];
        let mut right = rect.right() - style.border_width - style.button_margin;
        for button in buttons {
            let left = right - style.button_size;
            if point.x >= left && point.x < right {
                return Some(button);
            }
            right = left - style.button_spacing;
        }

        Some(WindowRegion::TitleBar)
    }

    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::MinimizeButton | WindowRegion::MaximizeButton | WindowRegion::CloseButton
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Rect = Rect::new(100.0, 100.0, 400.0, 300.0);

    #[test]
    fn test_outside_is_none() {
        assert_eq!(WindowRegion::at(WINDOW, Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_title_bar_and_content() {
        assert_eq!(
            WindowRegion::at(WINDOW, Vec2::new(150.0, 110.0)),
            Some(WindowRegion::TitleBar)
        );
        assert_eq!(
            WindowRegion::at(WINDOW, Vec2::new(150.0, 200.0)),
            Some(WindowRegion::Content)
        );
    }

    #[test]
    fn test_control_buttons() {
        // right edge 500, border 2, margin 4 -> close spans [478, 494)
        assert_eq!(
            WindowRegion::at(WINDOW, Vec2::new(490.0, 110.0)),
            Some(WindowRegion::CloseButton)
        );
        // maximize spans [460, 476)
        assert_eq!(
            WindowRegion::at(WINDOW, Vec2::new(470.0, 110.0)),
            Some(WindowRegion::MaximizeButton)
        );
        // minimize spans [442, 458)
        assert_eq!(
            WindowRegion::at(WINDOW, Vec2::new(450.0, 110.0)),
            Some(WindowRegion::MinimizeButton)
        );
        assert!(WindowRegion::CloseButton.is_button());
        assert!(!WindowRegion::TitleBar.is_button());
    }
}
