//! Renderable content of an application window

use serde::Serialize;

/// A unit that can render the body of its window with no arguments
pub trait AppContent: Send + Sync {
    /// Produce the view shown inside the window's content area
    fn render(&self) -> ContentView;
}

/// Host-agnostic description of a window body
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentView {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

impl ContentView {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            subtitle: None,
            blocks: Vec::new(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }
}

/// One block of window content
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
        cite: String,
    },
    /// A titled card with tags and an outbound link
    Card {
        icon: String,
        title: String,
        body: String,
        tags: Vec<String>,
        link: String,
        link_text: String,
    },
    /// Data the host fetches and renders itself (the gallery manifest)
    Remote {
        source: String,
    },
}
