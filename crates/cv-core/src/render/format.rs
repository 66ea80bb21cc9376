//! Shared formatting helpers. Every template goes through these — date
//! semantics, entity ordering, and section ordering are contract-level
//! behavior, not per-template styling.

use crate::models::entities::{
    LanguageProficiency, SectionEntity, SectionKey, SkillCategory, SkillLevel,
};
use crate::models::settings::{CvSettings, DEFAULT_SECTION_ORDER};
use crate::validation::primitives::parse_cv_date;

/// Formats a raw CV date as `"Jun 2020"`. Blank input yields `None`;
/// unparseable input falls back to the trimmed raw text — a template never
/// shows an empty placeholder or silently drops a date the user typed.
pub fn format_month_year(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_cv_date(trimmed) {
        Some(date) => Some(date.format("%b %Y").to_string()),
        None => Some(trimmed.to_string()),
    }
}

/// The one shared date-range formatter: `"{start} - {end|Present}"`.
/// `current` pins the end label to the literal `"Present"`.
pub fn format_date_range(start: Option<&str>, end: Option<&str>, current: bool) -> Option<String> {
    let start_label = start.and_then(format_month_year);
    let end_label = if current {
        Some("Present".to_string())
    } else {
        end.and_then(format_month_year)
    };

    match (start_label, end_label) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s),
        (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}

/// Entities sorted for display: ascending `order`, ties kept in original
/// array position (stable sort).
pub fn by_display_order<T: SectionEntity>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|e| e.display_order());
    sorted
}

/// Resolves the section emission order: the CV's `sections_order` filtered
/// to known keys and deduplicated, then every remaining known section in the
/// fixed default order.
pub fn ordered_sections(settings: &CvSettings) -> Vec<SectionKey> {
    let mut order: Vec<SectionKey> = Vec::new();
    for key in &settings.sections_order {
        if *key != SectionKey::Unknown && !order.contains(key) {
            order.push(*key);
        }
    }
    for key in DEFAULT_SECTION_ORDER {
        if !order.contains(key) {
            order.push(*key);
        }
    }
    order
}

pub fn section_title(key: SectionKey) -> &'static str {
    match key {
        SectionKey::Experience => "Experience",
        SectionKey::Education => "Education",
        SectionKey::Skills => "Skills",
        SectionKey::Languages => "Languages",
        SectionKey::Projects => "Projects",
        SectionKey::Certifications => "Certifications",
        SectionKey::Awards => "Awards",
        SectionKey::Publications => "Publications",
        SectionKey::Volunteer => "Volunteering",
        SectionKey::References => "References",
        SectionKey::CustomSections => "More",
        SectionKey::Unknown => "",
    }
}

pub fn skill_level_label(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => "Beginner",
        SkillLevel::Intermediate => "Intermediate",
        SkillLevel::Advanced => "Advanced",
        SkillLevel::Expert => "Expert",
    }
}

pub fn skill_category_label(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Technical => "Technical",
        SkillCategory::Soft => "Soft skills",
        SkillCategory::Tool => "Tools",
        SkillCategory::Other => "Other",
    }
}

pub fn proficiency_label(proficiency: LanguageProficiency) -> &'static str {
    match proficiency {
        LanguageProficiency::Basic => "Basic",
        LanguageProficiency::Conversational => "Conversational",
        LanguageProficiency::Fluent => "Fluent",
        LanguageProficiency::Native => "Native",
    }
}
