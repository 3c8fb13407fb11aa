//! Desktop configuration
//!
//! Every tunable constant of the window manager and icon grid lives here.
//! The defaults reproduce the portfolio site; a host can override any
//! subset by passing JSON to [`DesktopConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Tunable constants for the desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Width of one icon grid cell
    pub cell_width: f32,
    /// Height of one icon grid cell
    pub cell_height: f32,
    /// Gap between the workspace edge and the first grid cell
    pub grid_padding: f32,
    /// Icons placed per column before wrapping to the next column
    pub rows_per_column: u32,
    /// Stagger applied to each additional instance of the same app
    pub cascade_offset: f32,
    /// Space kept free around a newly opened window
    pub open_margin: f32,
    /// Window size for apps that declare none
    pub default_window_size: Size,
    /// Window position for apps that declare none
    pub default_window_pos: Vec2,
    /// Smallest size a resize may produce
    pub min_window_size: Size,
    /// Z value before the first window opens
    pub initial_z: u64,
    /// Per-axis pointer travel that turns a press into a drag
    pub drag_threshold: f32,
    /// Maximum gap between two clicks of a double click (milliseconds)
    pub double_click_ms: f64,
    /// Workspace size assumed until the host reports one
    pub fallback_container: Size,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            cell_width: 80.0,
            cell_height: 85.0,
            grid_padding: 8.0,
            rows_per_column: 8,
            cascade_offset: 24.0,
            open_margin: 20.0,
            default_window_size: Size::new(480.0, 320.0),
            default_window_pos: Vec2::new(60.0, 30.0),
            min_window_size: Size::new(160.0, 100.0),
            initial_z: 10,
            drag_threshold: 5.0,
            double_click_ms: 400.0,
            fallback_container: Size::new(800.0, 600.0),
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the grid and drag math cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        fn positive(field: &'static str, value: f32) -> DesktopResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(DesktopError::InvalidConfig {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> DesktopResult<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(DesktopError::InvalidConfig {
                    field,
                    reason: "must not be negative",
                })
            }
        }

        positive("cell_width", self.cell_width)?;
        positive("cell_height", self.cell_height)?;
        non_negative("grid_padding", self.grid_padding)?;
        non_negative("cascade_offset", self.cascade_offset)?;
        non_negative("open_margin", self.open_margin)?;
        positive("default_window_size.width", self.default_window_size.width)?;
        positive("default_window_size.height", self.default_window_size.height)?;
        non_negative("min_window_size.width", self.min_window_size.width)?;
        non_negative("min_window_size.height", self.min_window_size.height)?;
        non_negative("drag_threshold", self.drag_threshold)?;
        positive("fallback_container.width", self.fallback_container.width)?;
        positive("fallback_container.height", self.fallback_container.height)?;

        if self.rows_per_column == 0 {
            return Err(DesktopError::InvalidConfig {
                field: "rows_per_column",
                reason: "must be at least 1",
            });
        }
        if !(self.double_click_ms.is_finite() && self.double_click_ms > 0.0) {
            return Err(DesktopError::InvalidConfig {
                field: "double_click_ms",
                reason: "must be a positive number",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DesktopConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DesktopConfig::from_json(r#"{ "cascade_offset": 30.0, "rows_per_column": 6 }"#)
            .unwrap();
        assert_eq!(config.cascade_offset, 30.0);
        assert_eq!(config.rows_per_column, 6);
        assert_eq!(config.cell_width, 80.0);
        assert_eq!(config.default_window_pos, Vec2::new(60.0, 30.0));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DesktopConfig::from_json(r#"{ "cell_width": 0.0 }"#).unwrap_err();
        assert_eq!(
            err,
            DesktopError::InvalidConfig {
                field: "cell_width",
                reason: "must be a positive number",
            }
        );

        let err = DesktopConfig::from_json(r#"{ "rows_per_column": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            DesktopError::InvalidConfig {
                field: "rows_per_column",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = DesktopConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
