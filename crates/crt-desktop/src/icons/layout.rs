//! Icon positions, drag preview and snap resolution

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{GridCell, GridSpec};
use crate::math::{Rect, Vec2};
use crate::types::AppId;

/// One icon on the desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub app_id: AppId,
    /// Committed position; what occupancy checks compare against
    pub position: Vec2,
    /// Unsnapped position while the icon is being dragged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_position: Option<Vec2>,
}

impl DesktopIcon {
    /// Where the icon should be drawn right now
    pub fn display_position(&self) -> Vec2 {
        self.live_position.unwrap_or(self.position)
    }
}

/// Drop target preview shown while dragging
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverCell {
    pub cell: GridCell,
    /// Canonical pixel position of the cell
    pub position: Vec2,
    /// Another icon already rests there; a drop would be rejected
    pub occupied: bool,
}

/// Layout engine for the desktop icons
#[derive(Clone, Debug)]
pub struct IconLayoutEngine {
    grid: GridSpec,
    /// Icons in app declaration order
    icons: Vec<DesktopIcon>,
}

impl IconLayoutEngine {
    /// Lay out `apps` column-major from the top-left cell
    pub fn new<I>(grid: GridSpec, apps: I) -> Self
    where
        I: IntoIterator<Item = AppId>,
    {
        let icons = apps
            .into_iter()
            .enumerate()
            .map(|(i, app_id)| DesktopIcon {
                app_id,
                position: grid.cell_position(grid.initial_cell(i)),
                live_position: None,
            })
            .collect();
        Self { grid, icons }
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn get(&self, app_id: &AppId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|i| &i.app_id == app_id)
    }

    fn get_mut(&mut self, app_id: &AppId) -> Option<&mut DesktopIcon> {
        self.icons.iter_mut().find(|i| &i.app_id == app_id)
    }

    /// Committed position of an icon
    pub fn position_of(&self, app_id: &AppId) -> Option<Vec2> {
        self.get(app_id).map(|i| i.position)
    }

    /// True when an icon other than `excluding` is committed to `cell`
    ///
    /// Live drag positions are ignored.
    pub fn is_occupied(&self, cell: GridCell, excluding: Option<&AppId>) -> bool {
        let target = self.grid.cell_position(cell);
        self.icons
            .iter()
            .filter(|i| Some(&i.app_id) != excluding)
            .any(|i| i.position == target)
    }

    /// Move an icon's drawn position during a drag; nothing is committed
    pub fn set_live_position(&mut self, app_id: &AppId, pos: Vec2) -> bool {
        match self.get_mut(app_id) {
            Some(icon) => {
                icon.live_position = Some(pos);
                true
            }
            None => false,
        }
    }

    /// Preview of where a dragged icon would land
    pub fn hover_cell(&self, app_id: &AppId) -> Option<HoverCell> {
        let icon = self.get(app_id)?;
        let live = icon.live_position?;
        let cell = self.grid.cell_of(live);
        Some(HoverCell {
            cell,
            position: self.snap_position(cell),
            occupied: self.is_occupied(cell, Some(app_id)),
        })
    }

    /// Commit a drop of `app_id` onto `cell`
    ///
    /// An occupied cell is rejected and the icon keeps its committed
    /// position. Otherwise the icon moves to the cell's canonical position,
    /// clamped so it never sits left of or above the padding. Returns the
    /// committed position either way.
    pub fn resolve_snap(&mut self, cell: GridCell, app_id: &AppId) -> Option<Vec2> {
        let occupied = self.is_occupied(cell, Some(app_id));
        let target = self.snap_position(cell);
        let icon = self.get_mut(app_id)?;
        icon.live_position = None;

        if occupied {
            debug!(app = %app_id, col = cell.col, row = cell.row, "icon drop rejected: cell occupied");
        } else {
            icon.position = target;
            debug!(app = %app_id, col = cell.col, row = cell.row, "icon snapped");
        }
        Some(icon.position)
    }

    /// Drop an icon at a free pixel position: snap to the nearest cell
    pub fn drop_at(&mut self, app_id: &AppId, pos: Vec2) -> Option<Vec2> {
        let cell = self.grid.cell_of(pos);
        self.resolve_snap(cell, app_id)
    }

    /// Abandon a drag; the icon returns to its committed position
    pub fn cancel_drag(&mut self, app_id: &AppId) {
        if let Some(icon) = self.get_mut(app_id) {
            if icon.live_position.take().is_some() {
                trace!(app = %app_id, "icon drag cancelled");
            }
        }
    }

    /// Icon under `point`, if any
    pub fn icon_at(&self, point: Vec2) -> Option<&DesktopIcon> {
        let size = self.grid.icon_size();
        self.icons
            .iter()
            .rev()
            .find(|i| Rect::from_pos_size(i.display_position(), size).contains(point))
    }

    fn snap_position(&self, cell: GridCell) -> Vec2 {
        let pos = self.grid.cell_position(cell);
        let padding = self.grid.padding;
        Vec2::new(pos.x.max(padding), pos.y.max(padding))
    }
}
