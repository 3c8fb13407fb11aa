//! Window management module
//!
//! Provides window lifecycle, z-order, geometry patches and hit testing of
//! the window chrome.

mod patch;
mod region;
mod registry;
#[allow(clippy::module_inception)]
mod window;

pub use patch::GeometryPatch;
pub use region::WindowRegion;
pub use registry::WindowRegistry;
pub use window::WindowInstance;

pub use crate::types::InstanceId;
