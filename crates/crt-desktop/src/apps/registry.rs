//! Ordered, read-only collection of app descriptors

use std::collections::HashMap;

use super::{AppDescriptor, BuiltinApp};
use crate::error::{DesktopError, DesktopResult};
use crate::types::AppId;

/// Ordered app descriptors with id lookup
///
/// Declaration order matters: it drives the initial desktop icon layout.
#[derive(Debug, Default)]
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
    index: HashMap<AppId, usize>,
}

impl AppRegistry {
    /// Build a registry, rejecting duplicate ids
    pub fn new(apps: Vec<AppDescriptor>) -> DesktopResult<Self> {
        let mut index = HashMap::with_capacity(apps.len());
        for (i, app) in apps.iter().enumerate() {
            if index.insert(app.id.clone(), i).is_some() {
                return Err(DesktopError::DuplicateApp(app.id.clone()));
            }
        }
        Ok(Self { apps, index })
    }

    /// The portfolio's About, Projects, Gallery and Socials apps
    pub fn builtin() -> Self {
        let apps: Vec<AppDescriptor> = BuiltinApp::all()
            .iter()
            .map(|app| app.descriptor())
            .collect();
        let index = apps
            .iter()
            .enumerate()
            .map(|(i, app)| (app.id.clone(), i))
            .collect();
        Self { apps, index }
    }

    /// A subset of the built-in apps, in the order given
    ///
    /// Lets a host pick which apps appear on the desktop. Ids that name no
    /// built-in app are rejected, as are repeated ids.
    pub fn builtin_selection(ids: &[AppId]) -> DesktopResult<Self> {
        let apps = ids
            .iter()
            .map(|id| {
                BuiltinApp::from_id(id.as_str())
                    .map(BuiltinApp::descriptor)
                    .ok_or_else(|| DesktopError::UnknownApp(id.clone()))
            })
            .collect::<DesktopResult<Vec<_>>>()?;
        Self::new(apps)
    }

    pub fn get(&self, id: &AppId) -> Option<&AppDescriptor> {
        self.index.get(id).map(|&i| &self.apps[i])
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.index.contains_key(id)
    }

    /// Descriptors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
