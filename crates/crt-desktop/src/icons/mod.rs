//! Desktop icon grid
//!
//! Icons rest on a fixed grid of cells. They move freely while dragged and
//! snap to the nearest cell on release; a drop onto a cell held by another
//! icon is rejected and the icon returns to where it was.

mod grid;
mod layout;

pub use grid::{GridCell, GridSpec};
pub use layout::{DesktopIcon, HoverCell, IconLayoutEngine};
