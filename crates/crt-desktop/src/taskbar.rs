//! Taskbar projection
//!
//! The taskbar owns no state. It is recomputed from the window registry
//! whenever the host re-renders.

use serde::{Deserialize, Serialize};

use crate::apps::AppRegistry;
use crate::types::{AppId, InstanceId};
use crate::window::WindowRegistry;

/// What clicking a taskbar button does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskbarAction {
    Focus,
    Restore,
}

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub instance_id: InstanceId,
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    pub minimized: bool,
    /// Topmost visible window
    pub focused: bool,
}

impl TaskbarEntry {
    pub fn action(&self) -> TaskbarAction {
        if self.minimized {
            TaskbarAction::Restore
        } else {
            TaskbarAction::Focus
        }
    }
}

/// Read-only view of the open windows for the taskbar
pub struct TaskbarProjection;

impl TaskbarProjection {
    /// One entry per open window, minimized ones included, in open order
    pub fn project(windows: &WindowRegistry, apps: &AppRegistry) -> Vec<TaskbarEntry> {
        let top = windows.top().map(|w| w.instance_id);
        windows
            .windows()
            .iter()
            .filter_map(|w| {
                let app = apps.get(&w.app_id)?;
                Some(TaskbarEntry {
                    instance_id: w.instance_id,
                    app_id: w.app_id.clone(),
                    title: app.title.clone(),
                    icon: app.icon.clone(),
                    minimized: w.minimized,
                    focused: top == Some(w.instance_id),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::ContainerBoundsTracker;
    use crate::math::Size;

    #[test]
    fn test_entries_in_open_order() {
        let apps = AppRegistry::builtin();
        let bounds = ContainerBoundsTracker::new(Size::new(800.0, 600.0));
        let mut windows = WindowRegistry::default();
        let a = windows.open(&apps, &AppId::from("about"), &bounds).unwrap();
        let b = windows.open(&apps, &AppId::from("socials"), &bounds).unwrap();
        windows.focus(a);
        windows.minimize(b);

        let entries = TaskbarProjection::project(&windows, &apps);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].instance_id, a);
        assert_eq!(entries[0].title, "About Me");
        assert!(entries[0].focused);
        assert_eq!(entries[0].action(), TaskbarAction::Focus);

        assert_eq!(entries[1].instance_id, b);
        assert!(entries[1].minimized);
        assert!(!entries[1].focused);
        assert_eq!(entries[1].action(), TaskbarAction::Restore);
    }

    #[test]
    fn test_empty() {
        let entries = TaskbarProjection::project(&WindowRegistry::default(), &AppRegistry::builtin());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_minimized_top_is_not_focused() {
        let apps = AppRegistry::builtin();
        let bounds = ContainerBoundsTracker::new(Size::new(800.0, 600.0));
        let mut windows = WindowRegistry::default();
        let a = windows.open(&apps, &AppId::from("about"), &bounds).unwrap();
        windows.minimize(a);
        let entries = TaskbarProjection::project(&windows, &apps);
        assert!(entries.iter().all(|e| !e.focused));
    }
}
