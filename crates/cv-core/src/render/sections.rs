//! Canonical section projection — the single mapping from CV collections to
//! render entries, shared by every template.
//!
//! This is what makes the rendering contract structural rather than
//! per-template discipline: a section is produced iff its collection is
//! non-empty, entities come out in display order, optional fields are
//! omitted outright, and every renderable field lands in exactly one place.
//! Templates only decide arrangement and decoration afterwards.

use crate::models::cv::Cv;
use crate::models::entities::{
    Award, Certification, CustomSection, Education, Experience, Language, PersonalInfo, Project,
    Publication, ReferenceEntry, SectionKey, Skill, Volunteer,
};
use crate::render::contract::RenderOptions;
use crate::render::format::{
    by_display_order, format_date_range, format_month_year, proficiency_label, section_title,
    skill_category_label, skill_level_label,
};
use crate::render::tree::{
    ContactItem, ContactKind, HeaderAlign, HeaderBlock, LabeledEntry, SectionBlock, SectionEntry,
    TimelineEntry,
};
use crate::validation::primitives::normalize_opt;

/// Builds the personal-info header. Contacts stay inside unless the template
/// relocates them (sidebar layouts).
pub fn header_block(cv: &Cv, options: &RenderOptions, align: HeaderAlign) -> HeaderBlock {
    let info = &cv.personal_info;
    HeaderBlock {
        name: info.full_name(),
        headline: normalize_opt(&info.title).map(str::to_string),
        summary: normalize_opt(&info.summary).map(str::to_string),
        contacts: contact_items(info),
        photo_url: if options.include_photo {
            normalize_opt(&info.photo_url).map(str::to_string)
        } else {
            None
        },
        align,
    }
}

/// Contact lines in a fixed order, skipping anything not provided. Icons are
/// left empty — templates with iconography fill them in.
pub fn contact_items(info: &PersonalInfo) -> Vec<ContactItem> {
    let mut items = Vec::new();
    let mut push = |kind: ContactKind, value: Option<&str>| {
        if let Some(v) = value {
            items.push(ContactItem {
                kind,
                value: v.to_string(),
                icon: None,
            });
        }
    };
    let email = info.email.trim();
    push(ContactKind::Email, (!email.is_empty()).then_some(email));
    push(ContactKind::Phone, normalize_opt(&info.phone));
    push(ContactKind::Location, normalize_opt(&info.location));
    push(ContactKind::Website, normalize_opt(&info.website));
    push(ContactKind::Linkedin, normalize_opt(&info.linkedin));
    push(ContactKind::Github, normalize_opt(&info.github));
    items
}

/// Projects one section key to its blocks. Empty collections yield no blocks
/// — callers never emit an empty header. Custom sections produce one block
/// per entity, each with its own title.
pub fn section_blocks(cv: &Cv, key: SectionKey) -> Vec<SectionBlock> {
    let entries = match key {
        SectionKey::Experience => by_display_order(&cv.experience)
            .into_iter()
            .map(experience_entry)
            .collect(),
        SectionKey::Education => by_display_order(&cv.education)
            .into_iter()
            .map(education_entry)
            .collect(),
        SectionKey::Skills => by_display_order(&cv.skills).into_iter().map(skill_entry).collect(),
        SectionKey::Languages => by_display_order(&cv.languages)
            .into_iter()
            .map(language_entry)
            .collect(),
        SectionKey::Projects => by_display_order(&cv.projects)
            .into_iter()
            .map(project_entry)
            .collect(),
        SectionKey::Certifications => by_display_order(&cv.certifications)
            .into_iter()
            .map(certification_entry)
            .collect(),
        SectionKey::Awards => by_display_order(&cv.awards).into_iter().map(award_entry).collect(),
        SectionKey::Publications => by_display_order(&cv.publications)
            .into_iter()
            .map(publication_entry)
            .collect(),
        SectionKey::Volunteer => by_display_order(&cv.volunteer)
            .into_iter()
            .map(volunteer_entry)
            .collect(),
        SectionKey::References => by_display_order(&cv.references)
            .into_iter()
            .map(reference_entry)
            .collect(),
        SectionKey::CustomSections => {
            return by_display_order(&cv.custom_sections)
                .into_iter()
                .map(custom_section_block)
                .collect();
        }
        SectionKey::Unknown => Vec::new(),
    };

    if entries.is_empty() {
        return Vec::new();
    }
    vec![SectionBlock {
        key,
        title: section_title(key).to_string(),
        entries,
        accented: false,
        icon: None,
    }]
}

// ────────────────────────────────────────────────────────────────────────────
// Per-entity projections
// ────────────────────────────────────────────────────────────────────────────

fn experience_entry(e: &Experience) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: e.position.trim().to_string(),
        subheading: non_blank(&e.company),
        date_range: format_date_range(
            non_blank(&e.start_date).as_deref(),
            normalize_opt(&e.end_date),
            e.current,
        ),
        location: normalize_opt(&e.location).map(str::to_string),
        body: normalize_opt(&e.description).map(str::to_string),
        bullets: clean_list(&e.achievements),
        tags: clean_list(&e.technologies),
        meta: None,
        link: None,
    })
}

fn education_entry(e: &Education) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: e.degree.trim().to_string(),
        subheading: non_blank(&e.institution),
        date_range: format_date_range(
            non_blank(&e.start_date).as_deref(),
            normalize_opt(&e.end_date),
            e.current,
        ),
        location: None,
        body: normalize_opt(&e.description).map(str::to_string),
        bullets: Vec::new(),
        tags: Vec::new(),
        meta: join_meta([
            normalize_opt(&e.field).map(str::to_string),
            normalize_opt(&e.gpa).map(|g| format!("GPA {g}")),
        ]),
        link: None,
    })
}

fn skill_entry(s: &Skill) -> SectionEntry {
    SectionEntry::Labeled(LabeledEntry {
        label: s.name.trim().to_string(),
        detail: s.level.map(|l| skill_level_label(l).to_string()),
        meta: join_meta([
            Some(skill_category_label(s.category).to_string()),
            s.years.map(format_years),
        ]),
    })
}

fn language_entry(l: &Language) -> SectionEntry {
    SectionEntry::Labeled(LabeledEntry {
        label: l.name.trim().to_string(),
        detail: Some(proficiency_label(l.proficiency).to_string()),
        meta: None,
    })
}

fn project_entry(p: &Project) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: p.name.trim().to_string(),
        subheading: None,
        date_range: format_date_range(
            normalize_opt(&p.start_date),
            normalize_opt(&p.end_date),
            p.current,
        ),
        location: None,
        body: normalize_opt(&p.description).map(str::to_string),
        bullets: clean_list(&p.highlights),
        tags: clean_list(&p.technologies),
        meta: None,
        link: normalize_opt(&p.url).map(str::to_string),
    })
}

fn certification_entry(c: &Certification) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: c.name.trim().to_string(),
        subheading: non_blank(&c.issuer),
        date_range: normalize_opt(&c.date).and_then(format_month_year),
        location: None,
        body: None,
        bullets: Vec::new(),
        tags: Vec::new(),
        meta: normalize_opt(&c.credential_id).map(|id| format!("Credential {id}")),
        link: normalize_opt(&c.url).map(str::to_string),
    })
}

fn award_entry(a: &Award) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: a.title.trim().to_string(),
        subheading: normalize_opt(&a.issuer).map(str::to_string),
        date_range: normalize_opt(&a.date).and_then(format_month_year),
        location: None,
        body: normalize_opt(&a.description).map(str::to_string),
        bullets: Vec::new(),
        tags: Vec::new(),
        meta: None,
        link: None,
    })
}

fn publication_entry(p: &Publication) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: p.title.trim().to_string(),
        subheading: normalize_opt(&p.publisher).map(str::to_string),
        date_range: normalize_opt(&p.date).and_then(format_month_year),
        location: None,
        body: normalize_opt(&p.description).map(str::to_string),
        bullets: Vec::new(),
        tags: Vec::new(),
        meta: None,
        link: normalize_opt(&p.url).map(str::to_string),
    })
}

fn volunteer_entry(v: &Volunteer) -> SectionEntry {
    SectionEntry::Timeline(TimelineEntry {
        heading: v.role.trim().to_string(),
        subheading: non_blank(&v.organization),
        date_range: format_date_range(
            normalize_opt(&v.start_date),
            normalize_opt(&v.end_date),
            v.current,
        ),
        location: None,
        body: normalize_opt(&v.description).map(str::to_string),
        bullets: Vec::new(),
        tags: Vec::new(),
        meta: None,
        link: None,
    })
}

fn reference_entry(r: &ReferenceEntry) -> SectionEntry {
    SectionEntry::Labeled(LabeledEntry {
        label: r.name.trim().to_string(),
        detail: join_meta([
            normalize_opt(&r.position).map(str::to_string),
            normalize_opt(&r.company).map(str::to_string),
        ]),
        meta: join_meta([
            normalize_opt(&r.email).map(str::to_string),
            normalize_opt(&r.phone).map(str::to_string),
        ]),
    })
}

fn custom_section_block(section: &CustomSection) -> SectionBlock {
    let entries = section
        .items
        .iter()
        .filter(|item| !item.title.trim().is_empty())
        .map(|item| {
            SectionEntry::Timeline(TimelineEntry {
                heading: item.title.trim().to_string(),
                subheading: normalize_opt(&item.subtitle).map(str::to_string),
                date_range: normalize_opt(&item.date).and_then(format_month_year),
                location: None,
                body: normalize_opt(&item.description).map(str::to_string),
                bullets: Vec::new(),
                tags: Vec::new(),
                meta: None,
                link: None,
            })
        })
        .collect();
    SectionBlock {
        key: SectionKey::CustomSections,
        title: section.title.trim().to_string(),
        entries,
        accented: false,
        icon: None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Small helpers
// ────────────────────────────────────────────────────────────────────────────

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_meta<const N: usize>(parts: [Option<String>; N]) -> Option<String> {
    let joined: Vec<String> = parts.into_iter().flatten().collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined.join(" · "))
    }
}

fn format_years(years: u8) -> String {
    if years == 1 {
        "1 yr".to_string()
    } else {
        format!("{years} yrs")
    }
}
