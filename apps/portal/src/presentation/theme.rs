use serde::{Deserialize, Serialize};

use crate::models::job::{ExperienceLevel, RemoteType};

/// Colour scheme requested by the caller. Threaded explicitly into every view
/// builder that needs it; there is no process-wide theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "bg-gray-50",
                surface: "bg-white",
                text: "text-gray-900",
                muted_text: "text-gray-600",
                accent: "from-cyan-600 to-blue-600",
            },
            Theme::Dark => Palette {
                background: "bg-gray-900",
                surface: "bg-gray-800",
                text: "text-white",
                muted_text: "text-gray-400",
                accent: "from-cyan-400 to-blue-500",
            },
        }
    }
}

/// Accent colour of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Cyan,
    Purple,
}

impl Accent {
    pub fn gradient(self) -> &'static str {
        match self {
            Accent::Blue => "from-blue-500 to-blue-600",
            Accent::Green => "from-green-500 to-green-600",
            Accent::Cyan => "from-cyan-500 to-cyan-600",
            Accent::Purple => "from-purple-500 to-purple-600",
        }
    }
}

/// Label plus style classes for a pill badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

pub fn experience_badge(level: ExperienceLevel) -> Badge {
    let class = match level {
        ExperienceLevel::Entry => "bg-green-900 text-green-200",
        ExperienceLevel::Mid => "bg-blue-900 text-blue-200",
        ExperienceLevel::Senior => "bg-purple-900 text-purple-200",
        ExperienceLevel::Lead => "bg-red-900 text-red-200",
        ExperienceLevel::Executive => "bg-pink-900 text-pink-200",
        ExperienceLevel::Unspecified => "bg-gray-700 text-gray-200",
    };
    Badge {
        label: level.label(),
        class,
    }
}

pub fn remote_badge(remote: RemoteType) -> Badge {
    let class = match remote {
        RemoteType::FullyRemote => "bg-cyan-900 text-cyan-200",
        RemoteType::RemoteFirst => "bg-teal-900 text-teal-200",
        RemoteType::Hybrid => "bg-yellow-900 text-yellow-200",
        RemoteType::OnSite => "bg-gray-700 text-gray-200",
        RemoteType::Unspecified => "bg-gray-700 text-gray-400",
    };
    Badge {
        label: remote.label(),
        class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_have_distinct_palettes() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }

    #[test]
    fn test_theme_parses_lowercase() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_unspecified_values_still_get_styling() {
        assert!(!experience_badge(ExperienceLevel::Unspecified).class.is_empty());
        assert!(!remote_badge(RemoteType::Unspecified).class.is_empty());
    }
}
