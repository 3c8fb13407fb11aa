//! Browser bindings
//!
//! `DesktopShell` wraps a [`DesktopEngine`] for the page script. Window ids
//! cross the boundary as plain JS numbers; render lists come back as JSON
//! strings. The double-click clock is `Date.now()`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::apps::AppRegistry;
use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::error::{DesktopError, DesktopResult};
use crate::input::InputResult;
use crate::math::Vec2;
use crate::types::{AppId, InstanceId};
use crate::window::GeometryPatch;

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

fn to_js_error(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    let json: DesktopResult<String> = serde_json::to_string(value).map_err(DesktopError::from);
    json.map_err(to_js_error)
}

fn instance(id: f64) -> InstanceId {
    InstanceId::from_raw(id as u64)
}

fn raw_id(id: InstanceId) -> f64 {
    id.get() as f64
}

/// Desktop state owned by the page
#[wasm_bindgen]
pub struct DesktopShell {
    engine: DesktopEngine,
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopShell {
    /// Built-in apps, default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> DesktopShell {
        log("[desktop] shell created");
        DesktopShell {
            engine: DesktopEngine::new(),
        }
    }

    /// Built-in apps with a (partial) JSON config
    pub fn with_config(json: &str) -> Result<DesktopShell, JsValue> {
        let config = DesktopConfig::from_json(json).map_err(to_js_error)?;
        let engine =
            DesktopEngine::with_apps(config, AppRegistry::builtin()).map_err(to_js_error)?;
        log("[desktop] shell created with custom config");
        Ok(DesktopShell { engine })
    }

    /// A chosen subset of the built-in apps, e.g. `["about", "gallery"]`,
    /// with a (partial) JSON config
    pub fn with_apps(config_json: &str, app_ids_json: &str) -> Result<DesktopShell, JsValue> {
        let config = DesktopConfig::from_json(config_json).map_err(to_js_error)?;
        let ids: Vec<AppId> = serde_json::from_str(app_ids_json)
            .map_err(DesktopError::from)
            .map_err(to_js_error)?;
        let apps = AppRegistry::builtin_selection(&ids).map_err(to_js_error)?;
        let engine = DesktopEngine::with_apps(config, apps).map_err(to_js_error)?;
        log(&format!("[desktop] shell created with {} apps", ids.len()));
        Ok(DesktopShell { engine })
    }

    /// Resize observer callback for the workspace element
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.engine.resize_container(width, height)
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    pub fn open_app(&mut self, app_id: &str) -> Option<f64> {
        self.engine.open_app(&AppId::from(app_id)).map(raw_id)
    }

    pub fn focus_window(&mut self, id: f64) -> bool {
        self.engine.focus_window(instance(id))
    }

    pub fn minimize_window(&mut self, id: f64) -> bool {
        self.engine.minimize_window(instance(id))
    }

    pub fn restore_window(&mut self, id: f64) -> bool {
        self.engine.restore_window(instance(id))
    }

    pub fn close_window(&mut self, id: f64) -> bool {
        self.engine.close_window(instance(id))
    }

    pub fn maximize_window(&mut self, id: f64) -> bool {
        self.engine.maximize_window(instance(id))
    }

    /// Apply a JSON `{x?, y?, w?, h?}` geometry patch
    pub fn move_resize_window(&mut self, id: f64, patch_json: &str) -> Result<bool, JsValue> {
        let patch: GeometryPatch = serde_json::from_str(patch_json)
            .map_err(DesktopError::from)
            .map_err(to_js_error)?;
        Ok(self.engine.move_resize_window(instance(id), patch))
    }

    pub fn taskbar_click(&mut self, id: f64) -> bool {
        self.engine.taskbar_click(instance(id))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Returns the JSON-encoded routing result
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_down(Vec2::new(x, y));
        to_json(&result)
    }

    pub fn press_icon(&mut self, app_id: &str, x: f32, y: f32) -> bool {
        self.engine.press_icon(&AppId::from(app_id), Vec2::new(x, y))
    }

    pub fn press_title_bar(&mut self, id: f64, x: f32, y: f32) -> bool {
        self.engine.press_title_bar(instance(id), Vec2::new(x, y))
    }

    /// True when the frame needs redrawing
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(Vec2::new(x, y)) == InputResult::Handled
    }

    pub fn pointer_up(&mut self) -> bool {
        self.engine.handle_pointer_up(js_sys::Date::now()) == InputResult::Handled
    }

    pub fn pointer_cancel(&mut self) {
        self.engine.cancel_pointer();
    }

    /// Enter key on the desktop
    pub fn activate_selected(&mut self) -> Option<f64> {
        self.engine.activate_selected().map(raw_id)
    }

    pub fn activate_icon(&mut self, app_id: &str) -> Option<f64> {
        self.engine.activate_icon(&AppId::from(app_id)).map(raw_id)
    }

    // =========================================================================
    // Render lists
    // =========================================================================

    pub fn windows_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.visible_windows())
    }

    pub fn taskbar_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.taskbar())
    }

    pub fn icons_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.icons())
    }

    /// `null` unless an icon is being dragged
    pub fn hover_cell_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.hover_cell())
    }

    pub fn selected_icon(&self) -> Option<String> {
        self.engine.selected_icon().map(|id| id.to_string())
    }

    /// `null` for unknown windows
    pub fn content_json(&self, id: f64) -> Result<String, JsValue> {
        to_json(&self.engine.content(instance(id)))
    }
}
