//! 2D size

use serde::{Deserialize, Serialize};

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise minimum
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Shrink both dimensions by `margin`, never below zero
    pub fn inset(self, margin: f32) -> Size {
        Size::new(
            (self.width - margin).max(0.0),
            (self.height - margin).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_floors_at_zero() {
        assert_eq!(Size::new(800.0, 600.0).inset(20.0), Size::new(780.0, 580.0));
        assert_eq!(Size::new(10.0, 30.0).inset(20.0), Size::new(0.0, 10.0));
    }
}
