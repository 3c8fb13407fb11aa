//! Desktop engine
//!
//! The single owner of all desktop state. The host feeds it pointer and
//! keyboard events plus workspace resizes, and reads back render lists for
//! the windows, the icons and the taskbar.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::apps::{AppRegistry, ContentView};
use crate::bounds::ContainerBoundsTracker;
use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::icons::{GridSpec, HoverCell, IconLayoutEngine};
use crate::input::{ClickTracker, DragController, DragOutcome, DragSubject, InputResult};
use crate::math::{Rect, Vec2};
use crate::taskbar::{TaskbarAction, TaskbarEntry, TaskbarProjection};
use crate::types::{AppId, InstanceId};
use crate::window::{GeometryPatch, WindowInstance, WindowRegion, WindowRegistry};

/// A window as the host should draw it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub instance_id: InstanceId,
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    pub rect: Rect,
    pub z: u64,
    /// Topmost visible window
    pub focused: bool,
    pub maximized: bool,
}

/// A desktop icon as the host should draw it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconView {
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    pub position: Vec2,
    pub selected: bool,
    pub dragging: bool,
}

/// Window manager plus desktop icon layer
#[derive(Debug)]
pub struct DesktopEngine {
    config: DesktopConfig,
    apps: AppRegistry,
    bounds: ContainerBoundsTracker,
    windows: WindowRegistry,
    icons: IconLayoutEngine,
    drag: DragController,
    clicks: ClickTracker,
    selected: Option<AppId>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::build(DesktopConfig::default(), AppRegistry::builtin())
    }
}

impl DesktopEngine {
    /// Create an engine with the built-in apps and default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine for a custom config and app set
    pub fn with_apps(config: DesktopConfig, apps: AppRegistry) -> DesktopResult<Self> {
        config.validate()?;
        Ok(Self::build(config, apps))
    }

    fn build(config: DesktopConfig, apps: AppRegistry) -> Self {
        let grid = GridSpec::from_config(&config);
        let icons = IconLayoutEngine::new(grid, apps.iter().map(|a| a.id.clone()));
        Self {
            bounds: ContainerBoundsTracker::new(config.fallback_container),
            windows: WindowRegistry::new(&config),
            drag: DragController::new(config.drag_threshold),
            clicks: ClickTracker::new(config.double_click_ms),
            selected: None,
            icons,
            apps,
            config,
        }
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// Open a new window for `app_id`; `None` for unknown apps
    pub fn open_app(&mut self, app_id: &AppId) -> Option<InstanceId> {
        self.windows.open(&self.apps, app_id, &self.bounds)
    }

    pub fn focus_window(&mut self, id: InstanceId) -> bool {
        self.windows.focus(id)
    }

    pub fn minimize_window(&mut self, id: InstanceId) -> bool {
        self.windows.minimize(id)
    }

    pub fn restore_window(&mut self, id: InstanceId) -> bool {
        self.windows.restore(id)
    }

    /// Close a window; a drag on its title bar is abandoned
    pub fn close_window(&mut self, id: InstanceId) -> bool {
        if self.drag.subject() == Some(&DragSubject::TitleBar(id)) {
            self.drag.cancel();
            self.clicks.reset();
        }
        self.windows.close(id)
    }

    /// Toggle maximize
    pub fn maximize_window(&mut self, id: InstanceId) -> bool {
        self.windows.maximize(id, &self.bounds)
    }

    pub fn move_resize_window(&mut self, id: InstanceId, patch: GeometryPatch) -> bool {
        self.windows.move_resize(id, patch, &self.bounds)
    }

    /// Taskbar button: restore a minimized window, otherwise focus it
    pub fn taskbar_click(&mut self, id: InstanceId) -> bool {
        let action = self
            .taskbar()
            .into_iter()
            .find(|entry| entry.instance_id == id)
            .map(|entry| entry.action());
        match action {
            Some(TaskbarAction::Restore) => self.restore_window(id),
            Some(TaskbarAction::Focus) => self.focus_window(id),
            None => {
                debug!(id = %id, "taskbar click ignored: no such window");
                false
            }
        }
    }

    /// Workspace resize observer callback
    pub fn resize_container(&mut self, width: f32, height: f32) -> bool {
        self.bounds.observe(width, height)
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Route a primary-button press at a workspace-local point
    ///
    /// Windows are tested top-down first, then icons. A press on the bare
    /// desktop clears the icon selection.
    pub fn handle_pointer_down(&mut self, point: Vec2) -> InputResult {
        self.abandon_drag();
        let hit = self
            .windows
            .list_visible()
            .into_iter()
            .rev()
            .find_map(|w| WindowRegion::at(w.rect(), point).map(|r| (w.instance_id, w.position, r)));

        if let Some((id, origin, region)) = hit {
            if region.is_button() {
                self.clicks.reset();
            }
            match region {
                WindowRegion::CloseButton => {
                    self.close_window(id);
                }
                WindowRegion::MinimizeButton => {
                    self.minimize_window(id);
                }
                WindowRegion::MaximizeButton => {
                    self.maximize_window(id);
                }
                WindowRegion::TitleBar => {
                    self.press_title_bar(id, point);
                }
                WindowRegion::Content => {
                    self.focus_window(id);
                    let local = point - origin;
                    return InputResult::Forward {
                        instance_id: id,
                        local_x: local.x,
                        local_y: local.y,
                    };
                }
            }
            return InputResult::Handled;
        }

        let icon = self.icons.icon_at(point).map(|i| i.app_id.clone());
        if let Some(app_id) = icon {
            self.press_icon(&app_id, point);
            return InputResult::Handled;
        }

        if self.selected.take().is_some() {
            trace!("icon selection cleared");
        }
        self.clicks.reset();
        InputResult::Unhandled
    }

    /// Press on a known icon: select it and arm a drag
    pub fn press_icon(&mut self, app_id: &AppId, point: Vec2) -> bool {
        self.abandon_drag();
        let Some(origin) = self.icons.position_of(app_id) else {
            debug!(app = %app_id, "icon press ignored: no such icon");
            return false;
        };
        self.selected = Some(app_id.clone());
        self.drag.press(
            DragSubject::Icon(app_id.clone()),
            point,
            origin,
            None,
            self.bounds.snapshot(),
        );
        true
    }

    /// Press on a known window's title bar: focus it and arm a drag
    pub fn press_title_bar(&mut self, id: InstanceId, point: Vec2) -> bool {
        self.abandon_drag();
        if !self.windows.focus(id) {
            return false;
        }
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        let (origin, size) = (window.position, window.size);
        self.drag.press(
            DragSubject::TitleBar(id),
            point,
            origin,
            Some(size),
            self.bounds.snapshot(),
        );
        true
    }

    /// Pointer motion; only matters while a press is armed
    pub fn handle_pointer_move(&mut self, point: Vec2) -> InputResult {
        let was_dragging = self.drag.is_dragging();
        let Some(live) = self.drag.motion(point) else {
            return InputResult::Unhandled;
        };
        if !was_dragging {
            // A drag is never half of a double click
            self.clicks.reset();
        }
        let Some(subject) = self.drag.subject().cloned() else {
            return InputResult::Unhandled;
        };

        match subject {
            DragSubject::Icon(app_id) => {
                self.icons.set_live_position(&app_id, live);
            }
            DragSubject::TitleBar(id) => {
                // Maximized windows stay put
                if !self.windows.is_maximized(id) {
                    self.windows
                        .move_resize(id, GeometryPatch::position(live.x, live.y), &self.bounds);
                }
            }
        }
        InputResult::Handled
    }

    /// Pointer release, wherever it happens
    ///
    /// Ends the armed drag: icons snap, windows keep their last position,
    /// and clicks feed the double-click tracker (icon: open, title bar:
    /// maximize toggle).
    pub fn handle_pointer_up(&mut self, now_ms: f64) -> InputResult {
        let Some(release) = self.drag.release() else {
            return InputResult::Unhandled;
        };

        match (release.subject, release.outcome) {
            (DragSubject::Icon(app_id), DragOutcome::Dropped(pos)) => {
                self.icons.drop_at(&app_id, pos);
            }
            (DragSubject::Icon(app_id), DragOutcome::Click) => {
                if self.clicks.register(DragSubject::Icon(app_id.clone()), now_ms) {
                    debug!(app = %app_id, "icon double-clicked");
                    self.open_app(&app_id);
                }
            }
            (DragSubject::TitleBar(id), DragOutcome::Dropped(pos)) => {
                trace!(id = %id, x = pos.x, y = pos.y, "window drag ended");
            }
            (DragSubject::TitleBar(id), DragOutcome::Click) => {
                if self.clicks.register(DragSubject::TitleBar(id), now_ms) {
                    debug!(id = %id, "title bar double-clicked");
                    self.maximize_window(id);
                }
            }
        }
        InputResult::Handled
    }

    /// Abandon the armed drag (pointercancel); a dragged icon goes back to
    /// its committed cell, a dragged window stays where it was last drawn
    pub fn cancel_pointer(&mut self) {
        self.abandon_drag();
        self.clicks.reset();
    }

    /// End a session whose release never arrived (lost pointerup, a second
    /// pointer) before a new one is armed
    fn abandon_drag(&mut self) {
        let Some(session) = self.drag.cancel() else {
            return;
        };
        if let DragSubject::Icon(app_id) = &session.subject {
            self.icons.cancel_drag(app_id);
        }
        trace!(subject = ?session.subject, "drag abandoned");
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Enter on the selected icon
    pub fn activate_selected(&mut self) -> Option<InstanceId> {
        let app_id = self.selected.clone()?;
        self.open_app(&app_id)
    }

    /// Select an icon and open its app
    pub fn activate_icon(&mut self, app_id: &AppId) -> Option<InstanceId> {
        if !self.apps.contains(app_id) {
            debug!(app = %app_id, "activate ignored: unknown app");
            return None;
        }
        self.selected = Some(app_id.clone());
        self.open_app(app_id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Non-minimized windows in paint order (lowest z first)
    pub fn visible_windows(&self) -> Vec<VisibleWindow> {
        let top = self.windows.top().map(|w| w.instance_id);
        self.windows
            .list_visible()
            .into_iter()
            .filter_map(|w| {
                let app = self.apps.get(&w.app_id)?;
                Some(VisibleWindow {
                    instance_id: w.instance_id,
                    app_id: w.app_id.clone(),
                    title: app.title.clone(),
                    icon: app.icon.clone(),
                    rect: w.rect(),
                    z: w.z,
                    focused: top == Some(w.instance_id),
                    maximized: w.is_maximized(),
                })
            })
            .collect()
    }

    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        TaskbarProjection::project(&self.windows, &self.apps)
    }

    /// Desktop icons at their drawn positions
    pub fn icons(&self) -> Vec<IconView> {
        let dragging = match self.drag.subject() {
            Some(DragSubject::Icon(app_id)) if self.drag.is_dragging() => Some(app_id),
            _ => None,
        };
        self.icons
            .icons()
            .iter()
            .filter_map(|icon| {
                let app = self.apps.get(&icon.app_id)?;
                Some(IconView {
                    app_id: icon.app_id.clone(),
                    title: app.title.clone(),
                    icon: app.icon.clone(),
                    position: icon.display_position(),
                    selected: self.selected.as_ref() == Some(&icon.app_id),
                    dragging: dragging == Some(&icon.app_id),
                })
            })
            .collect()
    }

    /// Drop target under the icon being dragged
    pub fn hover_cell(&self) -> Option<HoverCell> {
        match self.drag.subject() {
            Some(DragSubject::Icon(app_id)) if self.drag.is_dragging() => {
                self.icons.hover_cell(app_id)
            }
            _ => None,
        }
    }

    pub fn selected_icon(&self) -> Option<&AppId> {
        self.selected.as_ref()
    }

    /// Rendered content of a window's app
    pub fn content(&self, id: InstanceId) -> Option<ContentView> {
        let window = self.windows.get(id)?;
        let app = self.apps.get(&window.app_id)?;
        Some(app.content.render())
    }

    pub fn window(&self, id: InstanceId) -> Option<&WindowInstance> {
        self.windows.get(id)
    }

    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    pub fn icon_layout(&self) -> &IconLayoutEngine {
        &self.icons
    }

    pub fn apps(&self) -> &AppRegistry {
        &self.apps
    }

    pub fn bounds(&self) -> &ContainerBoundsTracker {
        &self.bounds
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn about() -> AppId {
        AppId::from("about")
    }

    /// Press and release without moving
    fn click(engine: &mut DesktopEngine, at: Vec2, now_ms: f64) {
        engine.handle_pointer_down(at);
        engine.handle_pointer_up(now_ms);
    }

    #[test]
    fn test_new_engine() {
        let engine = DesktopEngine::new();
        assert_eq!(engine.bounds().size(), Size::new(800.0, 600.0));
        assert_eq!(engine.icons().len(), 4);
        assert!(engine.visible_windows().is_empty());
        assert!(engine.selected_icon().is_none());
    }

    #[test]
    fn test_with_apps_rejects_bad_config() {
        let config = DesktopConfig {
            cell_width: 0.0,
            ..DesktopConfig::default()
        };
        assert!(DesktopEngine::with_apps(config, AppRegistry::builtin()).is_err());
    }

    #[test]
    fn test_icon_press_selects() {
        let mut engine = DesktopEngine::new();
        assert_eq!(
            engine.handle_pointer_down(Vec2::new(20.0, 20.0)),
            InputResult::Handled
        );
        assert_eq!(engine.selected_icon(), Some(&about()));
        engine.handle_pointer_up(0.0);

        // Bare desktop clears it
        assert_eq!(
            engine.handle_pointer_down(Vec2::new(500.0, 500.0)),
            InputResult::Unhandled
        );
        assert!(engine.selected_icon().is_none());
    }

    #[test]
    fn test_icon_double_click_opens() {
        let mut engine = DesktopEngine::new();
        click(&mut engine, Vec2::new(20.0, 20.0), 1000.0);
        assert!(engine.visible_windows().is_empty());
        click(&mut engine, Vec2::new(22.0, 21.0), 1200.0);
        let windows = engine.visible_windows();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].title, "About Me");
        assert!(windows[0].focused);
    }

    #[test]
    fn test_icon_drag_snaps_and_previews() {
        let mut engine = DesktopEngine::new();
        engine.handle_pointer_down(Vec2::new(20.0, 20.0));
        engine.handle_pointer_move(Vec2::new(262.0, 200.0));
        assert!(engine.is_dragging());

        let hover = engine.hover_cell().unwrap();
        assert!(!hover.occupied);
        assert_eq!(hover.position, Vec2::new(248.0, 178.0));
        assert!(engine.icons()[0].dragging);

        engine.handle_pointer_up(100.0);
        assert_eq!(
            engine.icon_layout().position_of(&about()),
            Some(Vec2::new(248.0, 178.0))
        );
        assert!(engine.hover_cell().is_none());
    }

    #[test]
    fn test_cancel_returns_icon() {
        let mut engine = DesktopEngine::new();
        engine.handle_pointer_down(Vec2::new(20.0, 20.0));
        engine.handle_pointer_move(Vec2::new(300.0, 300.0));
        engine.cancel_pointer();
        assert_eq!(engine.icons()[0].position, Vec2::new(8.0, 8.0));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_new_press_abandons_unreleased_icon_drag() {
        let mut engine = DesktopEngine::new();
        engine.handle_pointer_down(Vec2::new(20.0, 20.0));
        engine.handle_pointer_move(Vec2::new(300.0, 300.0));
        assert_eq!(engine.icons()[0].position, Vec2::new(288.0, 288.0));

        // Second press arrives without a release for the first
        engine.handle_pointer_down(Vec2::new(20.0, 105.0));
        engine.handle_pointer_up(0.0);

        let about = engine.icon_layout().get(&about()).unwrap();
        assert_eq!(about.display_position(), Vec2::new(8.0, 8.0));
        assert!(about.live_position.is_none());
        assert!(engine.icons().iter().all(|i| !i.dragging));
        assert_eq!(engine.selected_icon(), Some(&AppId::from("projects")));
    }

    #[test]
    fn test_title_bar_press_abandons_unreleased_icon_drag() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&AppId::from("projects")).unwrap();
        engine.press_icon(&about(), Vec2::new(20.0, 20.0));
        engine.handle_pointer_move(Vec2::new(200.0, 400.0));

        assert!(engine.press_title_bar(id, Vec2::new(100.0, 40.0)));
        assert_eq!(engine.icons()[0].position, Vec2::new(8.0, 8.0));
        engine.handle_pointer_move(Vec2::new(150.0, 90.0));
        assert_eq!(engine.window(id).unwrap().position, Vec2::new(110.0, 80.0));
        assert_eq!(
            engine.icon_layout().position_of(&about()),
            Some(Vec2::new(8.0, 8.0))
        );
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&AppId::from("projects")).unwrap();
        // Window at (60,30); title bar around y = 40
        assert_eq!(
            engine.handle_pointer_down(Vec2::new(100.0, 40.0)),
            InputResult::Handled
        );
        engine.handle_pointer_move(Vec2::new(200.0, 140.0));
        assert_eq!(engine.window(id).unwrap().position, Vec2::new(160.0, 130.0));

        // Clamped to the bounds snapshot
        engine.handle_pointer_move(Vec2::new(2000.0, 2000.0));
        assert_eq!(engine.window(id).unwrap().position, Vec2::new(320.0, 280.0));
        engine.handle_pointer_up(0.0);
        assert_eq!(engine.window(id).unwrap().position, Vec2::new(320.0, 280.0));
    }

    #[test]
    fn test_title_bar_double_click_toggles_maximize() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&AppId::from("projects")).unwrap();
        click(&mut engine, Vec2::new(100.0, 40.0), 0.0);
        click(&mut engine, Vec2::new(100.0, 40.0), 150.0);
        assert!(engine.windows().is_maximized(id));

        // Maximized window does not move when dragged
        engine.handle_pointer_down(Vec2::new(100.0, 10.0));
        engine.handle_pointer_move(Vec2::new(300.0, 200.0));
        engine.handle_pointer_up(1000.0);
        assert_eq!(engine.window(id).unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_chrome_buttons() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&AppId::from("projects")).unwrap();
        // Window spans x 60..540; close button [518, 534)
        engine.handle_pointer_down(Vec2::new(525.0, 40.0));
        assert!(engine.window(id).is_none());

        let id = engine.open_app(&AppId::from("projects")).unwrap();
        // minimize button [482, 498)
        engine.handle_pointer_down(Vec2::new(490.0, 40.0));
        assert!(engine.window(id).unwrap().minimized);
        engine.taskbar_click(id);

        // maximize button [500, 516)
        engine.handle_pointer_down(Vec2::new(508.0, 40.0));
        assert!(engine.windows().is_maximized(id));
    }

    #[test]
    fn test_content_press_forwards() {
        let mut engine = DesktopEngine::new();
        let a = engine.open_app(&AppId::from("projects")).unwrap();
        let b = engine.open_app(&AppId::from("projects")).unwrap();
        // b cascades to (84,54) and covers (100,100)
        let result = engine.handle_pointer_down(Vec2::new(100.0, 100.0));
        assert_eq!(
            result,
            InputResult::Forward {
                instance_id: b,
                local_x: 16.0,
                local_y: 46.0,
            }
        );
        // a is only reachable where b does not cover it
        let result = engine.handle_pointer_down(Vec2::new(70.0, 200.0));
        assert!(matches!(result, InputResult::Forward { instance_id, .. } if instance_id == a));
        assert_eq!(engine.windows().top().map(|w| w.instance_id), Some(a));
    }

    #[test]
    fn test_window_covers_icon() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&AppId::from("projects")).unwrap();
        engine.move_resize_window(id, GeometryPatch::position(0.0, 0.0));
        let result = engine.handle_pointer_down(Vec2::new(20.0, 40.0));
        assert!(matches!(result, InputResult::Forward { .. }));
        assert!(engine.selected_icon().is_none());
    }

    #[test]
    fn test_keyboard_activation() {
        let mut engine = DesktopEngine::new();
        assert!(engine.activate_selected().is_none());
        engine.press_icon(&AppId::from("gallery"), Vec2::new(20.0, 190.0));
        engine.handle_pointer_up(0.0);
        let id = engine.activate_selected().unwrap();
        assert_eq!(engine.window(id).unwrap().app_id, "gallery");

        assert!(engine.activate_icon(&AppId::from("paint")).is_none());
        assert!(engine.activate_icon(&AppId::from("socials")).is_some());
        assert_eq!(engine.selected_icon(), Some(&AppId::from("socials")));
    }

    #[test]
    fn test_close_during_drag_abandons_it() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&about()).unwrap();
        engine.press_title_bar(id, Vec2::new(100.0, 40.0));
        assert!(engine.close_window(id));
        assert_eq!(
            engine.handle_pointer_move(Vec2::new(200.0, 200.0)),
            InputResult::Unhandled
        );
        assert_eq!(engine.handle_pointer_up(0.0), InputResult::Unhandled);
    }

    #[test]
    fn test_taskbar_click_unknown() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&about()).unwrap();
        engine.close_window(id);
        assert!(!engine.taskbar_click(id));
    }

    #[test]
    fn test_content_rendering() {
        let mut engine = DesktopEngine::new();
        let id = engine.open_app(&AppId::from("projects")).unwrap();
        let view = engine.content(id).unwrap();
        assert_eq!(view.heading, "Projects");
        assert_eq!(view.blocks.len(), 3);
    }
}
