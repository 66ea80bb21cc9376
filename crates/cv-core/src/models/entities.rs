//! Entity types for every CV collection.
//!
//! Each collection entry carries its own `id` (document-unique, assigned by
//! the editor) and an `order` field that drives display ordering. Fields the
//! form has not filled yet are represented as empty strings / `None` so a
//! partially edited CV stays representable — validation flags the gaps, it
//! never rejects the value.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Section keys
// ────────────────────────────────────────────────────────────────────────────

/// Identifier for a renderable CV section.
///
/// `Unknown` absorbs unrecognized keys found in stored `sections_order`
/// values — renderers skip them, validation never rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Certifications,
    Awards,
    Publications,
    Volunteer,
    References,
    CustomSections,
    Unknown,
}

impl SectionKey {
    /// Parses a stored section key. Unrecognized keys map to `Unknown`
    /// rather than failing — older clients may persist keys newer builds
    /// renamed or dropped.
    pub fn from_key(raw: &str) -> SectionKey {
        match raw {
            "experience" => SectionKey::Experience,
            "education" => SectionKey::Education,
            "skills" => SectionKey::Skills,
            "languages" => SectionKey::Languages,
            "projects" => SectionKey::Projects,
            "certifications" => SectionKey::Certifications,
            "awards" => SectionKey::Awards,
            "publications" => SectionKey::Publications,
            "volunteer" => SectionKey::Volunteer,
            "references" => SectionKey::References,
            "custom_sections" => SectionKey::CustomSections,
            _ => SectionKey::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for SectionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SectionKey::from_key(&raw))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info (singleton, not a collection)
// ────────────────────────────────────────────────────────────────────────────

/// The singleton identity block. First name, last name, and a contactable
/// email are always required — they gate minimal completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    /// Professional headline shown under the name ("Senior Rust Engineer").
    pub title: Option<String>,
    pub summary: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub photo_url: Option<String>,
}

impl PersonalInfo {
    /// Full display name, with surrounding whitespace collapsed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Collection entities
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub order: i32,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    /// `YYYY-MM` or `YYYY-MM-DD`.
    pub start_date: String,
    /// Ignored while `current` is true.
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
    /// Ordered bullet list.
    pub achievements: Vec<String>,
    /// Set-like — duplicates permitted but discouraged.
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub order: i32,
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub gpa: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tool,
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub order: i32,
    pub name: String,
    pub level: Option<SkillLevel>,
    pub category: SkillCategory,
    pub years: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageProficiency {
    Basic,
    #[default]
    Conversational,
    Fluent,
    Native,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: String,
    pub order: i32,
    pub name: String,
    pub proficiency: LanguageProficiency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub order: i32,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub order: i32,
    pub name: String,
    pub issuer: String,
    pub date: Option<String>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub id: String,
    pub order: i32,
    pub title: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub id: String,
    pub order: i32,
    pub title: String,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volunteer {
    pub id: String,
    pub order: i32,
    pub organization: String,
    pub role: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    pub id: String,
    pub order: i32,
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSectionItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// User-defined section with its own display title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub id: String,
    pub order: i32,
    pub title: String,
    /// Optional anchor slug used by the UI for deep links.
    pub slug: Option<String>,
    pub items: Vec<CustomSectionItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// SectionEntity — shared id/order access for editor and renderers
// ────────────────────────────────────────────────────────────────────────────

/// Common surface of every collection entity: the document-unique `id` and
/// the `order` field used for stable display sorting.
pub trait SectionEntity {
    fn id(&self) -> &str;
    fn display_order(&self) -> i32;
    /// Assigns identity and position. Called by the editor on add/move.
    fn assign(&mut self, id: String, order: i32);
}

macro_rules! impl_section_entity {
    ($($ty:ty),+ $(,)?) => {
        $(impl SectionEntity for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn display_order(&self) -> i32 {
                self.order
            }
            fn assign(&mut self, id: String, order: i32) {
                self.id = id;
                self.order = order;
            }
        })+
    };
}

impl_section_entity!(
    Experience,
    Education,
    Skill,
    Language,
    Project,
    Certification,
    Award,
    Publication,
    Volunteer,
    ReferenceEntry,
    CustomSection,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_unknown_absorbs_unrecognized() {
        let key: SectionKey = serde_json::from_str("\"hobbies\"").unwrap();
        assert_eq!(key, SectionKey::Unknown);
    }

    #[test]
    fn test_section_key_round_trips_known_keys() {
        let key: SectionKey = serde_json::from_str("\"experience\"").unwrap();
        assert_eq!(key, SectionKey::Experience);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"experience\"");
    }

    #[test]
    fn test_partial_form_payload_deserializes() {
        // The form layer may send sparse objects mid-edit.
        let exp: Experience =
            serde_json::from_str(r#"{"company": "Acme", "current": true}"#).unwrap();
        assert_eq!(exp.company, "Acme");
        assert!(exp.current);
        assert!(exp.position.is_empty());
        assert!(exp.end_date.is_none());
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let info = PersonalInfo {
            first_name: "Ada".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.full_name(), "Ada");
    }

    #[test]
    fn test_assign_sets_id_and_order() {
        let mut skill = Skill::default();
        skill.assign("abc".to_string(), 4);
        assert_eq!(skill.id(), "abc");
        assert_eq!(skill.display_order(), 4);
    }
}
