//! Per-entity schemas: primitive checks first, then cross-field refinements,
//! then array-level refinements.
//!
//! # Refinement rules
//! - Date ordering runs only when both dates individually parse.
//! - `current == true` means `end_date` is ignored entirely.
//! - `current == false` requires `end_date` where the entity type carries a
//!   terminal date (experience, education).

use crate::errors::FieldError;
use crate::models::entities::{
    Award, Certification, CustomSection, Education, Experience, Language, PersonalInfo, Project,
    Publication, ReferenceEntry, Skill, Volunteer,
};
use crate::validation::primitives::{
    check_email, check_max_len, check_opt_email, check_opt_phone, check_opt_slug, check_opt_text,
    check_opt_url, check_required_text, is_blank, normalize_opt, parse_cv_date, MAX_BODY_LEN,
    MAX_BULLETS, MAX_BULLET_LEN, MAX_FIELD_LEN, MAX_NAME_LEN, MAX_TAGS, MAX_TAG_LEN,
    MAX_TITLE_LEN, MAX_YEARS,
};

/// Borrowed view over any collection entity, dispatched by kind.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Experience(&'a Experience),
    Education(&'a Education),
    Skill(&'a Skill),
    Language(&'a Language),
    Project(&'a Project),
    Certification(&'a Certification),
    Award(&'a Award),
    Publication(&'a Publication),
    Volunteer(&'a Volunteer),
    Reference(&'a ReferenceEntry),
    CustomSection(&'a CustomSection),
}

/// Validates one entity. `path` namespaces every reported error, e.g.
/// `experience[2]`. Total: malformed input yields errors, never a panic.
pub fn validate_entity(entity: EntityRef<'_>, path: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match entity {
        EntityRef::Experience(e) => validate_experience(e, path, &mut errors),
        EntityRef::Education(e) => validate_education(e, path, &mut errors),
        EntityRef::Skill(e) => validate_skill(e, path, &mut errors),
        EntityRef::Language(e) => validate_language(e, path, &mut errors),
        EntityRef::Project(e) => validate_project(e, path, &mut errors),
        EntityRef::Certification(e) => validate_certification(e, path, &mut errors),
        EntityRef::Award(e) => validate_award(e, path, &mut errors),
        EntityRef::Publication(e) => validate_publication(e, path, &mut errors),
        EntityRef::Volunteer(e) => validate_volunteer(e, path, &mut errors),
        EntityRef::Reference(e) => validate_reference(e, path, &mut errors),
        EntityRef::CustomSection(e) => validate_custom_section(e, path, &mut errors),
    }
    errors
}

/// Validates the singleton personal-info block. First name, last name, and a
/// contactable email are always required — they gate minimal completion.
pub fn validate_personal_info(info: &PersonalInfo, errors: &mut Vec<FieldError>) {
    let p = "personal_info";
    check_required_text(&info.first_name, MAX_NAME_LEN, &field(p, "first_name"), errors);
    check_required_text(&info.last_name, MAX_NAME_LEN, &field(p, "last_name"), errors);
    check_email(&info.email, &field(p, "email"), errors);
    check_opt_text(&info.title, MAX_TITLE_LEN, &field(p, "title"), errors);
    check_opt_text(&info.summary, MAX_BODY_LEN, &field(p, "summary"), errors);
    check_opt_phone(&info.phone, &field(p, "phone"), errors);
    check_opt_text(&info.location, MAX_FIELD_LEN, &field(p, "location"), errors);
    check_opt_url(&info.website, &field(p, "website"), errors);
    check_opt_url(&info.linkedin, &field(p, "linkedin"), errors);
    check_opt_url(&info.github, &field(p, "github"), errors);
    check_opt_url(&info.photo_url, &field(p, "photo_url"), errors);
}

// ────────────────────────────────────────────────────────────────────────────
// Date-range refinement
// ────────────────────────────────────────────────────────────────────────────

struct DateRangeRules {
    start_required: bool,
    /// Whether a non-current entry must carry an end date.
    end_required_when_past: bool,
}

/// Cross-field date checks. Ordering is verified only when both sides parse;
/// a `current` entry has its `end_date` ignored outright.
fn check_date_range(
    start: Option<&str>,
    end: &Option<String>,
    current: bool,
    rules: DateRangeRules,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    let start_path = field(path, "start_date");
    let end_path = field(path, "end_date");

    let start_parsed = match start {
        None => {
            if rules.start_required {
                errors.push(FieldError::new(start_path, "must not be empty"));
            }
            None
        }
        Some(raw) => {
            let parsed = parse_cv_date(raw);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    start_path,
                    "must be a date in YYYY-MM format",
                ));
            }
            parsed
        }
    };

    if current {
        // end_date is ignored for current entries, whatever it holds.
        return;
    }

    match normalize_opt(end) {
        None => {
            if rules.end_required_when_past {
                errors.push(FieldError::new(
                    end_path,
                    "must be set unless this entry is marked current",
                ));
            }
        }
        Some(raw) => match parse_cv_date(raw) {
            None => {
                errors.push(FieldError::new(end_path, "must be a date in YYYY-MM format"));
            }
            Some(end_parsed) => {
                if let Some(start_parsed) = start_parsed {
                    if end_parsed < start_parsed {
                        errors.push(FieldError::new(
                            end_path,
                            "must not be earlier than the start date",
                        ));
                    }
                }
            }
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Array refinements
// ────────────────────────────────────────────────────────────────────────────

fn check_string_list(
    items: &[String],
    max_items: usize,
    max_len: usize,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    if items.len() > max_items {
        errors.push(FieldError::new(
            path,
            format!("must have at most {max_items} entries"),
        ));
    }
    for (i, item) in items.iter().enumerate() {
        let item_path = format!("{path}[{i}]");
        if is_blank(item) {
            errors.push(FieldError::new(item_path, "must not be empty"));
        } else {
            check_max_len(item, max_len, &item_path, errors);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-kind schemas
// ────────────────────────────────────────────────────────────────────────────

fn validate_experience(e: &Experience, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&e.company, MAX_FIELD_LEN, &field(path, "company"), errors);
    check_required_text(&e.position, MAX_FIELD_LEN, &field(path, "position"), errors);
    check_opt_text(&e.location, MAX_FIELD_LEN, &field(path, "location"), errors);
    check_opt_text(&e.description, MAX_BODY_LEN, &field(path, "description"), errors);
    check_date_range(
        required_raw(&e.start_date),
        &e.end_date,
        e.current,
        DateRangeRules {
            start_required: true,
            end_required_when_past: true,
        },
        path,
        errors,
    );
    check_string_list(
        &e.achievements,
        MAX_BULLETS,
        MAX_BULLET_LEN,
        &field(path, "achievements"),
        errors,
    );
    check_string_list(
        &e.technologies,
        MAX_TAGS,
        MAX_TAG_LEN,
        &field(path, "technologies"),
        errors,
    );
}

fn validate_education(e: &Education, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&e.institution, MAX_FIELD_LEN, &field(path, "institution"), errors);
    check_required_text(&e.degree, MAX_FIELD_LEN, &field(path, "degree"), errors);
    check_opt_text(&e.field, MAX_FIELD_LEN, &field(path, "field"), errors);
    check_opt_text(&e.gpa, 20, &field(path, "gpa"), errors);
    check_opt_text(&e.description, MAX_BODY_LEN, &field(path, "description"), errors);
    check_date_range(
        required_raw(&e.start_date),
        &e.end_date,
        e.current,
        DateRangeRules {
            start_required: true,
            end_required_when_past: true,
        },
        path,
        errors,
    );
}

fn validate_skill(s: &Skill, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&s.name, MAX_FIELD_LEN, &field(path, "name"), errors);
    if let Some(years) = s.years {
        if years > MAX_YEARS {
            errors.push(FieldError::new(
                field(path, "years"),
                format!("must be at most {MAX_YEARS}"),
            ));
        }
    }
}

fn validate_language(l: &Language, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&l.name, MAX_FIELD_LEN, &field(path, "name"), errors);
}

fn validate_project(p: &Project, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&p.name, MAX_FIELD_LEN, &field(path, "name"), errors);
    check_opt_text(&p.description, MAX_BODY_LEN, &field(path, "description"), errors);
    check_opt_url(&p.url, &field(path, "url"), errors);
    check_date_range(
        normalize_opt(&p.start_date),
        &p.end_date,
        p.current,
        DateRangeRules {
            start_required: false,
            end_required_when_past: false,
        },
        path,
        errors,
    );
    check_string_list(
        &p.technologies,
        MAX_TAGS,
        MAX_TAG_LEN,
        &field(path, "technologies"),
        errors,
    );
    check_string_list(
        &p.highlights,
        MAX_BULLETS,
        MAX_BULLET_LEN,
        &field(path, "highlights"),
        errors,
    );
}

fn validate_certification(c: &Certification, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&c.name, MAX_FIELD_LEN, &field(path, "name"), errors);
    check_required_text(&c.issuer, MAX_FIELD_LEN, &field(path, "issuer"), errors);
    check_opt_date(&c.date, &field(path, "date"), errors);
    check_opt_text(&c.credential_id, MAX_FIELD_LEN, &field(path, "credential_id"), errors);
    check_opt_url(&c.url, &field(path, "url"), errors);
}

fn validate_award(a: &Award, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&a.title, MAX_FIELD_LEN, &field(path, "title"), errors);
    check_opt_text(&a.issuer, MAX_FIELD_LEN, &field(path, "issuer"), errors);
    check_opt_date(&a.date, &field(path, "date"), errors);
    check_opt_text(&a.description, MAX_BODY_LEN, &field(path, "description"), errors);
}

fn validate_publication(p: &Publication, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&p.title, MAX_FIELD_LEN, &field(path, "title"), errors);
    check_opt_text(&p.publisher, MAX_FIELD_LEN, &field(path, "publisher"), errors);
    check_opt_date(&p.date, &field(path, "date"), errors);
    check_opt_url(&p.url, &field(path, "url"), errors);
    check_opt_text(&p.description, MAX_BODY_LEN, &field(path, "description"), errors);
}

fn validate_volunteer(v: &Volunteer, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&v.organization, MAX_FIELD_LEN, &field(path, "organization"), errors);
    check_required_text(&v.role, MAX_FIELD_LEN, &field(path, "role"), errors);
    check_opt_text(&v.description, MAX_BODY_LEN, &field(path, "description"), errors);
    check_date_range(
        normalize_opt(&v.start_date),
        &v.end_date,
        v.current,
        DateRangeRules {
            start_required: false,
            end_required_when_past: false,
        },
        path,
        errors,
    );
}

fn validate_reference(r: &ReferenceEntry, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&r.name, MAX_NAME_LEN, &field(path, "name"), errors);
    check_opt_text(&r.position, MAX_FIELD_LEN, &field(path, "position"), errors);
    check_opt_text(&r.company, MAX_FIELD_LEN, &field(path, "company"), errors);
    check_opt_email(&r.email, &field(path, "email"), errors);
    check_opt_phone(&r.phone, &field(path, "phone"), errors);
}

fn validate_custom_section(c: &CustomSection, path: &str, errors: &mut Vec<FieldError>) {
    check_required_text(&c.title, MAX_TITLE_LEN, &field(path, "title"), errors);
    check_opt_slug(&c.slug, &field(path, "slug"), errors);
    for (i, item) in c.items.iter().enumerate() {
        let item_path = format!("{path}.items[{i}]");
        check_required_text(&item.title, MAX_TITLE_LEN, &field(&item_path, "title"), errors);
        check_opt_text(&item.subtitle, MAX_FIELD_LEN, &field(&item_path, "subtitle"), errors);
        check_opt_date(&item.date, &field(&item_path, "date"), errors);
        check_opt_text(
            &item.description,
            MAX_BODY_LEN,
            &field(&item_path, "description"),
            errors,
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Small helpers
// ────────────────────────────────────────────────────────────────────────────

fn field(path: &str, name: &str) -> String {
    format!("{path}.{name}")
}

/// Required raw date fields are plain `String`s; empty means "not provided".
fn required_raw(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn check_opt_date(value: &Option<String>, path: &str, errors: &mut Vec<FieldError>) {
    if let Some(raw) = normalize_opt(value) {
        if parse_cv_date(raw).is_none() {
            errors.push(FieldError::new(path, "must be a date in YYYY-MM format"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_experience() -> Experience {
        Experience {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: Some("2022-06".to_string()),
            ..Default::default()
        }
    }

    fn paths(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_complete_experience_passes() {
        let errors = validate_entity(EntityRef::Experience(&make_experience()), "experience[0]");
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_experience_requires_company_and_position() {
        let exp = Experience {
            company: "  ".to_string(),
            position: String::new(),
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert!(paths(&errors).contains(&"experience[0].company"));
        assert!(paths(&errors).contains(&"experience[0].position"));
    }

    #[test]
    fn test_end_before_start_rejected_on_end_date() {
        let exp = Experience {
            start_date: "2020-06".to_string(),
            end_date: Some("2020-01".to_string()),
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "experience[0].end_date");
        assert!(errors[0].message.contains("earlier than the start date"));
    }

    #[test]
    fn test_date_ordering_skipped_when_start_malformed() {
        // The ordering refinement only runs once both dates parse — a broken
        // start date reports exactly one error, on start_date.
        let exp = Experience {
            start_date: "sometime".to_string(),
            end_date: Some("2020-01".to_string()),
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert_eq!(paths(&errors), vec!["experience[0].start_date"]);
    }

    #[test]
    fn test_current_entry_ignores_end_date() {
        let exp = Experience {
            current: true,
            end_date: Some("garbage".to_string()),
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert!(errors.is_empty(), "current entries ignore end_date: {errors:?}");
    }

    #[test]
    fn test_past_experience_requires_end_date() {
        let exp = Experience {
            current: false,
            end_date: None,
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert_eq!(paths(&errors), vec!["experience[0].end_date"]);
    }

    #[test]
    fn test_empty_optional_end_date_normalized_before_check() {
        let exp = Experience {
            end_date: Some("   ".to_string()),
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        // Whitespace end_date is "not provided" → required-when-past fires.
        assert_eq!(paths(&errors), vec!["experience[0].end_date"]);
        assert!(errors[0].message.contains("marked current"));
    }

    #[test]
    fn test_achievements_blank_line_flagged_with_index() {
        let exp = Experience {
            achievements: vec!["Shipped the thing".to_string(), "  ".to_string()],
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert_eq!(paths(&errors), vec!["experience[0].achievements[1]"]);
    }

    #[test]
    fn test_achievements_over_limit_flagged_on_array() {
        let exp = Experience {
            achievements: vec!["x".to_string(); MAX_BULLETS + 1],
            ..make_experience()
        };
        let errors = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert!(paths(&errors).contains(&"experience[0].achievements"));
    }

    #[test]
    fn test_education_mirror_of_experience_dates() {
        let edu = Education {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            start_date: "2014-09".to_string(),
            end_date: None,
            current: false,
            ..Default::default()
        };
        let errors = validate_entity(EntityRef::Education(&edu), "education[0]");
        assert_eq!(paths(&errors), vec!["education[0].end_date"]);
    }

    #[test]
    fn test_project_dates_fully_optional() {
        let project = Project {
            name: "cv-core".to_string(),
            ..Default::default()
        };
        let errors = validate_entity(EntityRef::Project(&project), "projects[0]");
        assert!(errors.is_empty(), "optional range: {errors:?}");
    }

    #[test]
    fn test_project_still_rejects_inverted_range() {
        let project = Project {
            name: "cv-core".to_string(),
            start_date: Some("2023-05".to_string()),
            end_date: Some("2023-01".to_string()),
            ..Default::default()
        };
        let errors = validate_entity(EntityRef::Project(&project), "projects[0]");
        assert_eq!(paths(&errors), vec!["projects[0].end_date"]);
    }

    #[test]
    fn test_skill_years_bounded() {
        let skill = Skill {
            name: "Rust".to_string(),
            years: Some(99),
            ..Default::default()
        };
        let errors = validate_entity(EntityRef::Skill(&skill), "skills[0]");
        assert_eq!(paths(&errors), vec!["skills[0].years"]);
    }

    #[test]
    fn test_certification_requires_name_and_issuer() {
        let cert = Certification::default();
        let errors = validate_entity(EntityRef::Certification(&cert), "certifications[0]");
        assert!(paths(&errors).contains(&"certifications[0].name"));
        assert!(paths(&errors).contains(&"certifications[0].issuer"));
    }

    #[test]
    fn test_custom_section_items_namespaced() {
        let section = CustomSection {
            title: "Talks".to_string(),
            items: vec![crate::models::entities::CustomSectionItem {
                title: String::new(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let errors = validate_entity(EntityRef::CustomSection(&section), "custom_sections[0]");
        assert_eq!(paths(&errors), vec!["custom_sections[0].items[0].title"]);
    }

    #[test]
    fn test_custom_section_slug_checked() {
        let section = CustomSection {
            title: "Talks".to_string(),
            slug: Some("Not A Slug".to_string()),
            ..Default::default()
        };
        let errors = validate_entity(EntityRef::CustomSection(&section), "custom_sections[0]");
        assert_eq!(paths(&errors), vec!["custom_sections[0].slug"]);
    }

    #[test]
    fn test_personal_info_required_trio() {
        let mut errors = Vec::new();
        validate_personal_info(&PersonalInfo::default(), &mut errors);
        let reported = paths(&errors);
        assert!(reported.contains(&"personal_info.first_name"));
        assert!(reported.contains(&"personal_info.last_name"));
        assert!(reported.contains(&"personal_info.email"));
    }

    #[test]
    fn test_personal_info_url_fields_checked_when_present() {
        let info = PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            website: Some("not a url".to_string()),
            ..Default::default()
        };
        let mut errors = Vec::new();
        validate_personal_info(&info, &mut errors);
        assert_eq!(paths(&errors), vec!["personal_info.website"]);
    }

    #[test]
    fn test_validation_is_pure_and_repeatable() {
        let exp = Experience {
            start_date: "2021-03".to_string(),
            end_date: Some("2020-01".to_string()),
            ..make_experience()
        };
        let first = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        let second = validate_entity(EntityRef::Experience(&exp), "experience[0]");
        assert_eq!(first, second);
    }
}
