//! The portfolio's own applications

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{AppContent, AppDescriptor, ContentBlock, ContentView};

/// Applications shipped with the portfolio desktop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinApp {
    About,
    Projects,
    Gallery,
    Socials,
}

/// Path of the gallery manifest produced by the image build script
pub const GALLERY_MANIFEST: &str = "gallery.json";

struct Project {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    link: &'static str,
    link_text: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        icon: "🖥️",
        name: "Active Directory Lab",
        description: "A pentesting lab environment built with infrastructure-as-code. \
                      Features Windows Active Directory, Kali Linux, and automated provisioning.",
        tags: &["Ansible", "Terraform", "Packer", "AWS", "Active Directory"],
        link: "https://github.com/tigcho/issp",
        link_text: "View on GitHub",
    },
    Project {
        icon: "🎬",
        name: "Shufflies '23",
        description: "Letterboxd Wrapped for a Discord film club. Visualizes movie \
                      recommendations and reviews from a community event.",
        tags: &["Web", "Data Visualization", "Letterboxd"],
        link: "https://tigcho.github.io/shufflies23/",
        link_text: "View Site",
    },
    Project {
        icon: "🔧",
        name: "My PC Build",
        description: "Current desktop setup and hardware configuration.",
        tags: &["Hardware", "PC Build"],
        link: "https://pcpartpicker.com/list/wNNtkJ",
        link_text: "View on PCPartPicker",
    },
];

/// (icon, name, handle, description, url)
const SOCIALS: &[(&str, &str, &str, &str, &str)] = &[
    ("📷", "Instagram", "@tigcho", "Photos & stories", "https://www.instagram.com/tigcho"),
    ("🎬", "Letterboxd", "tigcho", "Film diary & reviews", "https://letterboxd.com/tigcho/"),
    ("🎵", "Last.fm", "tigcho", "Music scrobbles", "https://www.last.fm/user/tigcho"),
    ("💻", "GitHub", "tigcho", "Code & projects", "https://github.com/tigcho"),
    ("📚", "StoryGraph", "tigcho", "Book tracking", "https://app.thestorygraph.com/profile/tigcho"),
];

impl BuiltinApp {
    /// All built-in apps in desktop order
    pub fn all() -> &'static [BuiltinApp] {
        &[
            BuiltinApp::About,
            BuiltinApp::Projects,
            BuiltinApp::Gallery,
            BuiltinApp::Socials,
        ]
    }

    /// Parse from string ID (e.g., "about", "gallery")
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "about" => Some(BuiltinApp::About),
            "projects" => Some(BuiltinApp::Projects),
            "gallery" => Some(BuiltinApp::Gallery),
            "socials" => Some(BuiltinApp::Socials),
            _ => None,
        }
    }

    /// Get the string ID for this app
    pub fn id(&self) -> &'static str {
        match self {
            BuiltinApp::About => "about",
            BuiltinApp::Projects => "projects",
            BuiltinApp::Gallery => "gallery",
            BuiltinApp::Socials => "socials",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuiltinApp::About => "About Me",
            BuiltinApp::Projects => "Projects",
            BuiltinApp::Gallery => "Gallery",
            BuiltinApp::Socials => "Socials",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BuiltinApp::About => "📁",
            BuiltinApp::Projects => "📝",
            BuiltinApp::Gallery => "🖼️",
            BuiltinApp::Socials => "🌐",
        }
    }

    /// Build the registry descriptor, including any declared window size
    pub fn descriptor(self) -> AppDescriptor {
        let descriptor = AppDescriptor::new(self.id(), self.title(), self.icon(), Arc::new(self));
        match self {
            BuiltinApp::About => descriptor.with_size(520.0, 400.0),
            BuiltinApp::Gallery => descriptor.with_size(600.0, 500.0),
            BuiltinApp::Projects | BuiltinApp::Socials => descriptor,
        }
    }
}

impl AppContent for BuiltinApp {
    fn render(&self) -> ContentView {
        match self {
            BuiltinApp::About => ContentView::new("About Me")
                .block(ContentBlock::Quote {
                    text: "I am searching for that which is real of my heart, and which when \
                           completed I can stand humble to one side of and say: 'This is it, \
                           this is how I feel, this is my honest interpretation of the world; \
                           this is not influenced by money, or trickery, or pressure... except \
                           the pressure of my soul.'"
                        .to_string(),
                    cite: "W. Eugene Smith".to_string(),
                })
                .block(ContentBlock::Paragraph {
                    text: "Hi, my name is Selin! I'm passionate about exploring the inner \
                           workings of technology, discovering media from cultures different \
                           from my own, and sometimes simply immersing myself in a good video game. \
                           I tend to think deeply about things, and I prefer taking my time to \
                           understand them thoroughly. I value honesty, authenticity, and freedom \
                           in all aspects of life, and I strive to live by these principles every day."
                        .to_string(),
                }),
            BuiltinApp::Projects => PROJECTS.iter().fold(
                ContentView::new("Projects").subtitle("Things I've built and created"),
                |view, p| {
                    view.block(ContentBlock::Card {
                        icon: p.icon.to_string(),
                        title: p.name.to_string(),
                        body: p.description.to_string(),
                        tags: p.tags.iter().map(|t| t.to_string()).collect(),
                        link: p.link.to_string(),
                        link_text: p.link_text.to_string(),
                    })
                },
            ),
            BuiltinApp::Gallery => ContentView::new("Gallery").block(ContentBlock::Remote {
                source: GALLERY_MANIFEST.to_string(),
            }),
            BuiltinApp::Socials => SOCIALS.iter().fold(
                ContentView::new("Connect with me").subtitle("Find me on these platforms"),
                |view, (icon, name, handle, description, url)| {
                    view.block(ContentBlock::Card {
                        icon: icon.to_string(),
                        title: name.to_string(),
                        body: description.to_string(),
                        tags: vec![handle.to_string()],
                        link: url.to_string(),
                        link_text: "→".to_string(),
                    })
                },
            ),
        }
    }
}
