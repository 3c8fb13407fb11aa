//! Application registry
//!
//! The desktop knows applications only through their descriptors: a stable
//! id, a title and icon for the chrome, optional initial geometry, and a
//! content unit that can render itself. The registry is built once and is
//! read-only for the rest of the session.

mod builtin;
mod content;
mod descriptor;
mod registry;

pub use builtin::BuiltinApp;
pub use content::{AppContent, ContentBlock, ContentView};
pub use descriptor::AppDescriptor;
pub use registry::AppRegistry;
