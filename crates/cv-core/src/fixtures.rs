//! Shared test fixtures and proptest strategies.

use proptest::prelude::*;
use uuid::Uuid;

use crate::editor;
use crate::models::cv::Cv;
use crate::models::entities::{
    Certification, CustomSection, CustomSectionItem, Education, Experience, Language,
    LanguageProficiency, PersonalInfo, Project, Skill, SkillCategory, SkillLevel,
};

/// Empty draft CV straight from the constructor.
pub(crate) fn minimal_cv() -> Cv {
    Cv::new(Uuid::new_v4())
}

/// Fully populated CV: passes aggregate validation and satisfies every
/// completion signal.
pub(crate) fn sample_cv() -> Cv {
    let mut cv = Cv::new(Uuid::new_v4());
    cv.personal_info = PersonalInfo {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        title: Some("Analytical Engine Programmer".to_string()),
        summary: Some("Mathematician and pioneer of machine computation.".to_string()),
        email: "ada@example.com".to_string(),
        phone: Some("+44 20 7946 0958".to_string()),
        location: Some("London".to_string()),
        website: Some("https://ada.example.com".to_string()),
        linkedin: None,
        github: Some("https://github.com/ada".to_string()),
        photo_url: Some("https://ada.example.com/photo.jpg".to_string()),
    };
    cv.experience = vec![
        Experience {
            id: "exp-1".to_string(),
            order: 0,
            company: "Analytical Engines Ltd".to_string(),
            position: "Lead Programmer".to_string(),
            location: Some("London".to_string()),
            start_date: "1842-06".to_string(),
            end_date: None,
            current: true,
            description: Some("Published the first machine algorithm.".to_string()),
            achievements: vec![
                "Wrote the Bernoulli number program".to_string(),
                "Annotated the Menabrea memoir".to_string(),
            ],
            technologies: vec!["Punched cards".to_string(), "Difference engine".to_string()],
        },
        Experience {
            id: "exp-2".to_string(),
            order: 1,
            company: "Royal Society".to_string(),
            position: "Correspondent".to_string(),
            location: None,
            start_date: "1840-01".to_string(),
            end_date: Some("1842-05".to_string()),
            current: false,
            description: None,
            achievements: Vec::new(),
            technologies: Vec::new(),
        },
    ];
    cv.education = vec![Education {
        id: "edu-1".to_string(),
        order: 0,
        institution: "Private tutelage".to_string(),
        degree: "Mathematics".to_string(),
        field: Some("Analysis".to_string()),
        gpa: Some("4.0".to_string()),
        start_date: "1832-01".to_string(),
        end_date: Some("1841-12".to_string()),
        current: false,
        description: None,
    }];
    cv.skills = vec![
        Skill {
            id: "skill-1".to_string(),
            order: 0,
            name: "Algorithm design".to_string(),
            level: Some(SkillLevel::Expert),
            category: SkillCategory::Technical,
            years: Some(9),
        },
        Skill {
            id: "skill-2".to_string(),
            order: 1,
            name: "Mathematical analysis".to_string(),
            level: Some(SkillLevel::Advanced),
            category: SkillCategory::Technical,
            years: None,
        },
        Skill {
            id: "skill-3".to_string(),
            order: 2,
            name: "Technical writing".to_string(),
            level: None,
            category: SkillCategory::Soft,
            years: None,
        },
    ];
    cv.languages = vec![Language {
        id: "lang-1".to_string(),
        order: 0,
        name: "French".to_string(),
        proficiency: LanguageProficiency::Fluent,
    }];
    cv.projects = vec![Project {
        id: "proj-1".to_string(),
        order: 0,
        name: "Notes on the Analytical Engine".to_string(),
        description: Some("Extended commentary with worked examples.".to_string()),
        url: Some("https://example.com/notes".to_string()),
        start_date: Some("1842-08".to_string()),
        end_date: Some("1843-09".to_string()),
        current: false,
        technologies: vec!["Punched cards".to_string()],
        highlights: vec!["First published computer program".to_string()],
    }];
    cv.certifications = vec![Certification {
        id: "cert-1".to_string(),
        order: 0,
        name: "Fellow".to_string(),
        issuer: "Royal Institution".to_string(),
        date: Some("1843-10".to_string()),
        credential_id: Some("RI-1843".to_string()),
        url: None,
    }];
    cv.custom_sections = vec![CustomSection {
        id: "custom-1".to_string(),
        order: 0,
        title: "Correspondence".to_string(),
        slug: Some("correspondence".to_string()),
        items: vec![CustomSectionItem {
            title: "Letters to Babbage".to_string(),
            subtitle: Some("Charles Babbage".to_string()),
            date: Some("1843-07".to_string()),
            description: Some("Technical exchange on engine operation.".to_string()),
        }],
    }];
    cv
}

/// Walkthrough scenario: personal info fully filled, one current experience,
/// everything else empty.
pub(crate) fn scenario_cv() -> Cv {
    let mut cv = Cv::new(Uuid::new_v4());
    cv.personal_info = PersonalInfo {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        title: Some("Rear Admiral".to_string()),
        summary: Some("Compiler pioneer.".to_string()),
        email: "grace@example.com".to_string(),
        phone: Some("+1 555 010 1234".to_string()),
        ..Default::default()
    };
    cv.experience = vec![Experience {
        id: "exp-1".to_string(),
        order: 0,
        company: "US Navy".to_string(),
        position: "Computer Scientist".to_string(),
        start_date: "1943-12".to_string(),
        end_date: None,
        current: true,
        ..Default::default()
    }];
    cv
}

// ────────────────────────────────────────────────────────────────────────────
// Proptest strategies
// ────────────────────────────────────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = String> {
    (1990..2030i32, 1..=12u32).prop_map(|(y, m)| format!("{y:04}-{m:02}"))
}

fn arb_word() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,10}"
}

fn arb_opt_word() -> impl Strategy<Value = Option<String>> {
    prop::option::of(arb_word())
}

fn arb_personal_info() -> impl Strategy<Value = PersonalInfo> {
    (
        arb_word(),
        arb_word(),
        arb_opt_word(),
        prop_oneof![Just(String::new()), Just("user@example.com".to_string())],
    )
        .prop_map(|(first_name, last_name, title, email)| PersonalInfo {
            first_name,
            last_name,
            title,
            email,
            ..Default::default()
        })
}

fn arb_experience() -> impl Strategy<Value = Experience> {
    (
        arb_word(),
        arb_word(),
        arb_date(),
        prop::option::of(arb_date()),
        any::<bool>(),
        prop::collection::vec(arb_word(), 0..3),
    )
        .prop_map(
            |(company, position, start_date, end_date, current, achievements)| Experience {
                company,
                position,
                start_date,
                end_date,
                current,
                achievements,
                ..Default::default()
            },
        )
}

fn arb_education() -> impl Strategy<Value = Education> {
    (arb_word(), arb_word(), arb_date(), prop::option::of(arb_date())).prop_map(
        |(institution, degree, start_date, end_date)| Education {
            institution,
            degree,
            start_date,
            end_date,
            ..Default::default()
        },
    )
}

fn arb_skill() -> impl Strategy<Value = Skill> {
    arb_word().prop_map(|name| Skill {
        name,
        ..Default::default()
    })
}

fn arb_language() -> impl Strategy<Value = Language> {
    arb_word().prop_map(|name| Language {
        name,
        ..Default::default()
    })
}

fn arb_project() -> impl Strategy<Value = Project> {
    (arb_word(), arb_opt_word()).prop_map(|(name, description)| Project {
        name,
        description,
        ..Default::default()
    })
}

/// Arbitrary CVs — valid and invalid alike. Entity ids and orders are
/// assigned through the editor so document-level id invariants hold; field
/// contents are unconstrained.
pub(crate) fn arb_cv() -> impl Strategy<Value = Cv> {
    (
        arb_personal_info(),
        prop::collection::vec(arb_experience(), 0..3),
        prop::collection::vec(arb_education(), 0..2),
        prop::collection::vec(arb_skill(), 0..4),
        prop::collection::vec(arb_language(), 0..2),
        prop::collection::vec(arb_project(), 0..2),
    )
        .prop_map(
            |(personal_info, experience, education, skills, languages, projects)| {
                let mut cv = Cv::new(Uuid::new_v4());
                cv.personal_info = personal_info;
                for e in experience {
                    editor::add_entry(&mut cv.experience, e);
                }
                for e in education {
                    editor::add_entry(&mut cv.education, e);
                }
                for s in skills {
                    editor::add_entry(&mut cv.skills, s);
                }
                for l in languages {
                    editor::add_entry(&mut cv.languages, l);
                }
                for p in projects {
                    editor::add_entry(&mut cv.projects, p);
                }
                cv
            },
        )
}
