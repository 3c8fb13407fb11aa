//! Window manager for a retro desktop portfolio
//!
//! This crate provides the interaction layer behind a CRT-styled desktop
//! site:
//! - Window management (open, focus, minimize, restore, close, maximize)
//! - Monotonic z-order and cascading placement
//! - Desktop icons on a snapping grid
//! - Click/drag discrimination and double clicks
//! - Taskbar projection of the open windows
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and chrome metrics
//! - [`apps`]: App descriptors, the registry and the built-in apps
//! - [`window`]: Window instances, the registry and chrome hit testing
//! - [`input`]: Drag state machine and double-click tracking
//! - [`icons`]: Icon grid, occupancy and snapping
//! - [`bounds`]: Workspace size and clamping
//! - [`taskbar`]: Read-only taskbar entries
//!
//! [`DesktopEngine`] ties them together and is what a host talks to.
//!
//! ## Example
//!
//! ```rust
//! use crt_desktop::{AppId, DesktopEngine, Vec2};
//!
//! let mut engine = DesktopEngine::new();
//! engine.resize_container(1024.0, 768.0);
//!
//! let id = engine.open_app(&AppId::from("about")).unwrap();
//! assert_eq!(engine.visible_windows()[0].instance_id, id);
//!
//! // Drag the About icon to the next column and drop it
//! engine.handle_pointer_down(Vec2::new(20.0, 20.0));
//! engine.handle_pointer_move(Vec2::new(100.0, 20.0));
//! engine.handle_pointer_up(0.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Injected Time**: Double-click timing takes `now_ms` from the caller
//! 3. **Silent Staleness**: Events for windows that no longer exist are ignored

pub mod apps;
pub mod bounds;
pub mod config;
pub mod error;
pub mod icons;
pub mod input;
pub mod math;
pub mod taskbar;
pub mod types;
pub mod window;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use apps::{AppContent, AppDescriptor, AppRegistry, BuiltinApp, ContentBlock, ContentView};
pub use bounds::ContainerBoundsTracker;
pub use config::DesktopConfig;
pub use engine::{DesktopEngine, IconView, VisibleWindow};
pub use error::{DesktopError, DesktopResult};
pub use icons::{DesktopIcon, GridCell, GridSpec, HoverCell, IconLayoutEngine};
pub use input::{ClickTracker, DragController, DragOutcome, DragPhase, DragSubject, InputResult};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use taskbar::{TaskbarAction, TaskbarEntry, TaskbarProjection};
pub use types::{AppId, InstanceId};
pub use window::{GeometryPatch, WindowInstance, WindowRegion, WindowRegistry};
