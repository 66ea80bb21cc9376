//! Rendering preferences and the settings resolver.
//!
//! Defaults are resolved once, when a CV is constructed — call sites never
//! fall back field-by-field.

use serde::{Deserialize, Serialize};

use crate::models::entities::SectionKey;

/// Identifier of a registered template implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Slate,
    #[default]
    Blue,
    Teal,
    Burgundy,
    Forest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

/// Fallback section display order. Sections missing from a CV's
/// `sections_order` are appended in this order.
pub const DEFAULT_SECTION_ORDER: &[SectionKey] = &[
    SectionKey::Experience,
    SectionKey::Education,
    SectionKey::Skills,
    SectionKey::Projects,
    SectionKey::Certifications,
    SectionKey::Languages,
    SectionKey::Awards,
    SectionKey::Publications,
    SectionKey::Volunteer,
    SectionKey::References,
    SectionKey::CustomSections,
];

/// Resolved rendering preferences. Every field has a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSettings {
    pub template: TemplateId,
    pub theme: Theme,
    pub accent: AccentColor,
    pub font_size: FontSize,
    pub spacing: Spacing,
    /// Canonical section display order consumed by every template.
    pub sections_order: Vec<SectionKey>,
}

impl Default for CvSettings {
    fn default() -> Self {
        CvSettings {
            template: TemplateId::default(),
            theme: Theme::default(),
            accent: AccentColor::default(),
            font_size: FontSize::default(),
            spacing: Spacing::default(),
            sections_order: DEFAULT_SECTION_ORDER.to_vec(),
        }
    }
}

/// User-provided settings fragment, as sent by the form layer. Every field
/// is optional; `resolve_settings` merges it over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvSettingsPatch {
    pub template: Option<TemplateId>,
    pub theme: Option<Theme>,
    pub accent: Option<AccentColor>,
    pub font_size: Option<FontSize>,
    pub spacing: Option<Spacing>,
    pub sections_order: Option<Vec<SectionKey>>,
}

/// Merges a user patch over `CvSettings::default()`.
pub fn resolve_settings(patch: CvSettingsPatch) -> CvSettings {
    let defaults = CvSettings::default();
    CvSettings {
        template: patch.template.unwrap_or(defaults.template),
        theme: patch.theme.unwrap_or(defaults.theme),
        accent: patch.accent.unwrap_or(defaults.accent),
        font_size: patch.font_size.unwrap_or(defaults.font_size),
        spacing: patch.spacing.unwrap_or(defaults.spacing),
        sections_order: patch.sections_order.unwrap_or(defaults.sections_order),
    }
}
