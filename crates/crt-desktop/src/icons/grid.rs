//! Cell grid math

use serde::{Deserialize, Serialize};

use crate::config::DesktopConfig;
use crate::math::{Size, Vec2};

/// Logical grid coordinate; negative values only arise from positions left
/// of or above the first cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Cell dimensions shared by every icon
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cell_width: f32,
    pub cell_height: f32,
    pub padding: f32,
    pub rows_per_column: u32,
}

impl GridSpec {
    pub fn from_config(config: &DesktopConfig) -> Self {
        Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            padding: config.grid_padding,
            rows_per_column: config.rows_per_column,
        }
    }

    /// Nearest cell to a pixel position (rounding, not flooring)
    pub fn cell_of(&self, pos: Vec2) -> GridCell {
        GridCell::new(
            ((pos.x - self.padding) / self.cell_width).round() as i32,
            ((pos.y - self.padding) / self.cell_height).round() as i32,
        )
    }

    /// Canonical pixel position of a cell
    pub fn cell_position(&self, cell: GridCell) -> Vec2 {
        Vec2::new(
            cell.col as f32 * self.cell_width + self.padding,
            cell.row as f32 * self.cell_height + self.padding,
        )
    }

    /// Column-major placement of the `index`-th icon
    pub fn initial_cell(&self, index: usize) -> GridCell {
        let rows = self.rows_per_column.max(1) as usize;
        GridCell::new((index / rows) as i32, (index % rows) as i32)
    }

    /// Clickable area of an icon and size of the drop highlight
    pub fn icon_size(&self) -> Size {
        Size::new(self.cell_width - 4.0, self.cell_height - 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpec {
        GridSpec::from_config(&DesktopConfig::default())
    }

    #[test]
    fn test_cell_position() {
        let g = grid();
        assert_eq!(g.cell_position(GridCell::new(0, 0)), Vec2::new(8.0, 8.0));
        assert_eq!(g.cell_position(GridCell::new(2, 3)), Vec2::new(168.0, 263.0));
    }

    #[test]
    fn test_cell_of_rounds_to_nearest() {
        let g = grid();
        // 8 + 80*0.6 = 56 -> past the midpoint of cell 0, lands in cell 1
        assert_eq!(g.cell_of(Vec2::new(56.0, 8.0)), GridCell::new(1, 0));
        // 8 + 80*0.4 = 40 -> stays in cell 0
        assert_eq!(g.cell_of(Vec2::new(40.0, 8.0)), GridCell::new(0, 0));
        assert_eq!(g.cell_of(Vec2::new(0.0, 0.0)), GridCell::new(0, 0));
    }

    #[test]
    fn test_initial_cells_are_column_major() {
        let g = grid();
        assert_eq!(g.initial_cell(0), GridCell::new(0, 0));
        assert_eq!(g.initial_cell(7), GridCell::new(0, 7));
        assert_eq!(g.initial_cell(8), GridCell::new(1, 0));
        assert_eq!(g.initial_cell(11), GridCell::new(1, 3));
    }
}
