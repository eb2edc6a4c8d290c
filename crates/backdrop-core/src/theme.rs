//! Light/dark theme and scene selection.

use serde::{Deserialize, Serialize};

use crate::color::{CYAN, PRIMARY_BLUE, Rgba};

/// Color variant of the page behind the animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Page background the animation is composited over.
    pub fn background(self) -> Rgba {
        match self {
            Theme::Dark => Rgba::rgb(11, 17, 32),
            Theme::Light => Rgba::rgb(255, 255, 255),
        }
    }

    /// Color for headline text and counters.
    pub fn accent(self) -> Rgba {
        match self {
            Theme::Dark => CYAN,
            Theme::Light => PRIMARY_BLUE,
        }
    }

    /// Color for secondary text.
    pub fn muted(self) -> Rgba {
        match self {
            Theme::Dark => Rgba::rgb(107, 114, 128),
            Theme::Light => Rgba::rgb(156, 163, 175),
        }
    }
}

/// Which animated background is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    /// Particle network with proximity links.
    #[default]
    Network,
    /// Layered sine waves with drifting dots.
    Waves,
}

impl Scene {
    /// Cycle to the next scene.
    pub fn next(self) -> Self {
        match self {
            Scene::Network => Scene::Waves,
            Scene::Waves => Scene::Network,
        }
    }

    /// Display name for the scene.
    pub fn name(self) -> &'static str {
        match self {
            Scene::Network => "network",
            Scene::Waves => "waves",
        }
    }
}
