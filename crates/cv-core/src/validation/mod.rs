//! CV aggregate schema.
//!
//! Validates the singleton personal-info block, then every entity of every
//! collection independently (errors namespaced `collection[index].field`),
//! then the document-level invariants: unique entity ids across all
//! collections combined and a well-formed `sections_order`.
//!
//! Pure and idempotent — repeated calls on the same value yield identical
//! results, and the input is never mutated. An invalid CV stays fully
//! representable; it is only flagged invalid for export.

pub mod entity;
pub mod primitives;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::models::cv::Cv;
use crate::models::entities::{SectionEntity, SectionKey};
use entity::{validate_entity, validate_personal_info, EntityRef};

/// Aggregate validation outcome consumed by the UI and the export gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

/// Validates the whole CV. Total — never panics on user data.
pub fn validate_cv(cv: &Cv) -> ValidationResult {
    let mut errors = Vec::new();

    validate_personal_info(&cv.personal_info, &mut errors);

    validate_collection(&cv.experience, "experience", EntityRef::Experience, &mut errors);
    validate_collection(&cv.education, "education", EntityRef::Education, &mut errors);
    validate_collection(&cv.skills, "skills", EntityRef::Skill, &mut errors);
    validate_collection(&cv.languages, "languages", EntityRef::Language, &mut errors);
    validate_collection(&cv.projects, "projects", EntityRef::Project, &mut errors);
    validate_collection(
        &cv.certifications,
        "certifications",
        EntityRef::Certification,
        &mut errors,
    );
    validate_collection(&cv.awards, "awards", EntityRef::Award, &mut errors);
    validate_collection(&cv.publications, "publications", EntityRef::Publication, &mut errors);
    validate_collection(&cv.volunteer, "volunteer", EntityRef::Volunteer, &mut errors);
    validate_collection(&cv.references, "references", EntityRef::Reference, &mut errors);
    validate_collection(
        &cv.custom_sections,
        "custom_sections",
        EntityRef::CustomSection,
        &mut errors,
    );

    check_unique_ids(cv, &mut errors);
    check_sections_order(&cv.settings.sections_order, &mut errors);

    tracing::debug!(
        cv_id = %cv.id,
        error_count = errors.len(),
        "aggregate validation completed"
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn validate_collection<'a, T>(
    items: &'a [T],
    key: &str,
    wrap: fn(&'a T) -> EntityRef<'a>,
    errors: &mut Vec<FieldError>,
) {
    for (i, item) in items.iter().enumerate() {
        errors.extend(validate_entity(wrap(item), &format!("{key}[{i}]")));
    }
}

/// Document invariant: every entity id is non-empty and unique across all
/// collections combined. Duplicates are reported at the later occurrence.
fn check_unique_ids(cv: &Cv, errors: &mut Vec<FieldError>) {
    let mut entries: Vec<(&str, String)> = Vec::new();
    collect_ids(&cv.experience, "experience", &mut entries);
    collect_ids(&cv.education, "education", &mut entries);
    collect_ids(&cv.skills, "skills", &mut entries);
    collect_ids(&cv.languages, "languages", &mut entries);
    collect_ids(&cv.projects, "projects", &mut entries);
    collect_ids(&cv.certifications, "certifications", &mut entries);
    collect_ids(&cv.awards, "awards", &mut entries);
    collect_ids(&cv.publications, "publications", &mut entries);
    collect_ids(&cv.volunteer, "volunteer", &mut entries);
    collect_ids(&cv.references, "references", &mut entries);
    collect_ids(&cv.custom_sections, "custom_sections", &mut entries);

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (id, path) in &entries {
        if id.is_empty() {
            errors.push(FieldError::new(path.clone(), "entity id must not be empty"));
            continue;
        }
        match seen.get(id) {
            Some(first) => errors.push(FieldError::new(
                path.clone(),
                format!("duplicate entity id (also used by {first})"),
            )),
            None => {
                seen.insert(id, path.as_str());
            }
        }
    }
}

fn collect_ids<'a, T: SectionEntity>(
    items: &'a [T],
    key: &str,
    out: &mut Vec<(&'a str, String)>,
) {
    for (i, item) in items.iter().enumerate() {
        out.push((item.id(), format!("{key}[{i}].id")));
    }
}

/// Document invariant: each known section key appears at most once. Unknown
/// keys are ignored by renderers, never rejected here.
fn check_sections_order(order: &[SectionKey], errors: &mut Vec<FieldError>) {
    let mut seen = HashSet::new();
    for key in order {
        if *key == SectionKey::Unknown {
            continue;
        }
        if !seen.insert(*key) {
            errors.push(FieldError::new(
                "settings.sections_order",
                format!("section {key:?} is listed more than once"),
            ));
        }
    }
}
