//! Records stored in locale documents

use serde::Deserialize;

/// Call-to-action link
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtaData {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Footer social link; `icon` names an entry of the social icon table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub href: String,
    /// Accessible name, defaults to the icon key
    #[serde(default)]
    pub label: Option<String>,
}

impl SocialLink {
    pub fn accessible_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.icon)
    }
}

/// Arrangement of an icon card at large breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    Horizontal,
    /// Also used for any unrecognised layout name
    #[default]
    #[serde(other)]
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutCardData {
    pub icon: String,
    #[serde(default)]
    pub layout: CardLayout,
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureCardData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenefitPointData {
    pub icon: String,
    pub label: String,
    pub description: String,
}
