//! Window registry: lifecycle and z-order
//!
//! The registry is the only writer of the window collection, the z counter
//! and the instance-id counter. Both counters only ever grow, so the most
//! recently opened or focused window is always the one with the highest z.
//!
//! Operations that name an instance that no longer exists are ignored and
//! return `false`; stale ids are expected when the UI fires events for a
//! window that was just closed.

use tracing::{debug, trace};

use super::{GeometryPatch, WindowInstance};
use crate::apps::AppRegistry;
use crate::bounds::ContainerBoundsTracker;
use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2};
use crate::types::{AppId, InstanceId};

/// Placement rules copied out of the config at construction
#[derive(Clone, Debug)]
struct Placement {
    default_size: Size,
    default_pos: Vec2,
    cascade_offset: f32,
    open_margin: f32,
    min_size: Size,
}

/// Owner of all live window instances
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    /// Open windows in the order they were opened
    windows: Vec<WindowInstance>,
    /// Last z value handed out
    z_top: u64,
    /// Last instance id handed out
    last_id: u64,
    placement: Placement,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(&DesktopConfig::default())
    }
}

impl WindowRegistry {
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            z_top: config.initial_z,
            last_id: 0,
            placement: Placement {
                default_size: config.default_window_size,
                default_pos: config.default_window_pos,
                cascade_offset: config.cascade_offset,
                open_margin: config.open_margin,
                min_size: config.min_window_size,
            },
        }
    }

    fn next_z(&mut self) -> u64 {
        self.z_top += 1;
        self.z_top
    }

    fn get_mut(&mut self, id: InstanceId) -> Option<&mut WindowInstance> {
        self.windows.iter_mut().find(|w| w.instance_id == id)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a new instance of `app_id`
    ///
    /// Returns `None` (and opens nothing) when the app is not registered.
    pub fn open(
        &mut self,
        apps: &AppRegistry,
        app_id: &AppId,
        bounds: &ContainerBoundsTracker,
    ) -> Option<InstanceId> {
        let Some(app) = apps.get(app_id) else {
            debug!(app = %app_id, "open ignored: unknown app");
            return None;
        };

        let declared = app.initial_size.unwrap_or(self.placement.default_size);
        let size = bounds.fit_window_size(
            declared,
            self.placement.open_margin,
            self.placement.min_size,
        );

        let existing = self.count_for_app(app_id) as f32;
        let base = app.initial_pos.unwrap_or(self.placement.default_pos);
        let cascaded = base + Vec2::new(1.0, 1.0) * (existing * self.placement.cascade_offset);
        let position = bounds.clamp_window_position(cascaded, size);

        self.last_id += 1;
        let instance_id = InstanceId::new(self.last_id);
        let z = self.next_z();

        debug!(
            id = %instance_id,
            app = %app_id,
            x = position.x,
            y = position.y,
            z,
            "window opened"
        );

        self.windows.push(WindowInstance {
            instance_id,
            app_id: app_id.clone(),
            position,
            size,
            z,
            minimized: false,
            pre_maximize: None,
        });
        Some(instance_id)
    }

    /// Raise a window to the top and un-minimize it
    pub fn focus(&mut self, id: InstanceId) -> bool {
        if !self.contains(id) {
            debug!(id = %id, "focus ignored: no such window");
            return false;
        }
        let z = self.next_z();
        if let Some(window) = self.get_mut(id) {
            window.z = z;
            window.minimized = false;
        }
        trace!(id = %id, z, "window focused");
        true
    }

    /// Hide a window from the render set; its z is kept
    pub fn minimize(&mut self, id: InstanceId) -> bool {
        match self.get_mut(id) {
            Some(window) => {
                window.minimized = true;
                debug!(id = %id, "window minimized");
                true
            }
            None => {
                debug!(id = %id, "minimize ignored: no such window");
                false
            }
        }
    }

    /// Bring a minimized window back; always re-focuses
    pub fn restore(&mut self, id: InstanceId) -> bool {
        self.focus(id)
    }

    /// Remove a window for good; other windows keep their z values
    pub fn close(&mut self, id: InstanceId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.instance_id != id);
        let closed = self.windows.len() != before;
        if closed {
            debug!(id = %id, "window closed");
        } else {
            debug!(id = %id, "close ignored: no such window");
        }
        closed
    }

    /// Merge a partial geometry update into a window
    ///
    /// Position fields are taken as given; moves are clamped by the drag
    /// code before they get here. Size fields are clamped so the window's
    /// right and bottom edges stay inside the workspace and the window never
    /// shrinks below the configured minimum.
    pub fn move_resize(
        &mut self,
        id: InstanceId,
        patch: GeometryPatch,
        bounds: &ContainerBoundsTracker,
    ) -> bool {
        let min_size = self.placement.min_size;
        let Some(window) = self.get_mut(id) else {
            debug!(id = %id, "move_resize ignored: no such window");
            return false;
        };
        if patch.is_empty() {
            return false;
        }

        if let Some(x) = patch.x {
            window.position.x = x;
        }
        if let Some(y) = patch.y {
            window.position.y = y;
        }
        if patch.touches_size() {
            let requested = Size::new(
                patch.w.unwrap_or(window.size.width),
                patch.h.unwrap_or(window.size.height),
            );
            window.size = bounds.clamp_window_size(window.position, requested, min_size);
        }
        trace!(
            id = %id,
            x = window.position.x,
            y = window.position.y,
            w = window.size.width,
            h = window.size.height,
            "window geometry updated"
        );
        true
    }

    /// Toggle between the saved geometry and filling the workspace
    ///
    /// Always focuses the window as well.
    pub fn maximize(&mut self, id: InstanceId, bounds: &ContainerBoundsTracker) -> bool {
        if !self.focus(id) {
            return false;
        }
        let container = bounds.size();
        if let Some(window) = self.get_mut(id) {
            match window.pre_maximize.take() {
                Some(saved) => {
                    window.set_rect(saved);
                    debug!(id = %id, "window un-maximized");
                }
                None => {
                    window.pre_maximize = Some(window.rect());
                    window.set_rect(Rect::new(0.0, 0.0, container.width, container.height));
                    debug!(id = %id, "window maximized");
                }
            }
        }
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, id: InstanceId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.instance_id == id)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.get(id).is_some()
    }

    /// All open windows, minimized included, in the order they were opened
    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    /// Non-minimized windows, lowest z first (paint order)
    pub fn list_visible(&self) -> Vec<&WindowInstance> {
        let mut visible: Vec<&WindowInstance> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z);
        visible
    }

    /// The visible window that paints on top
    pub fn top(&self) -> Option<&WindowInstance> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z)
    }

    pub fn is_maximized(&self, id: InstanceId) -> bool {
        self.get(id).is_some_and(|w| w.is_maximized())
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn count_for_app(&self, app_id: &AppId) -> usize {
        self.windows.iter().filter(|w| &w.app_id == app_id).count()
    }

    /// Highest z value handed out so far
    pub fn z_top(&self) -> u64 {
        self.z_top
    }
}
