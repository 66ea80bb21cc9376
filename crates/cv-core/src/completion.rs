//! Completion engine — derives a 0–100 completion percentage and the list of
//! unmet required signals from a CV snapshot.
//!
//! The checklist is a fixed weighted signal table. Every predicate is
//! monotone in field-filling: adding previously-missing content can only
//! satisfy more signals, never fewer, so the percentage never drops when a
//! gap is filled.
//!
//! The percentage is informational. Export is gated by `validate_cv` alone —
//! a checklist-complete CV can still carry a cross-field violation.

use serde::{Deserialize, Serialize};

use crate::models::cv::Cv;
use crate::validation::primitives::{is_valid_email, normalize_opt};

/// Output of `compute_completion`, consumed by the progress UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// Satisfied weight over total weight, rounded, clamped to [0, 100].
    pub percentage: u8,
    /// Human-readable labels of unmet *required* signals only.
    pub required_remaining: Vec<String>,
}

struct CompletionSignal {
    #[allow(dead_code)]
    key: &'static str,
    /// Imperative label shown in the "complete these items" list.
    label: &'static str,
    weight: f64,
    /// Required signals block the minimal-completion UI; optional ones only
    /// add weight.
    required: bool,
    satisfied: fn(&Cv) -> bool,
}

/// The fixed checklist. Weights sum to 100 but the computation divides by the
/// actual total, so the table can be re-balanced without touching the math.
const SIGNALS: &[CompletionSignal] = &[
    CompletionSignal {
        key: "personal_name",
        label: "Add your first and last name",
        weight: 15.0,
        required: true,
        satisfied: has_name,
    },
    CompletionSignal {
        key: "personal_email",
        label: "Add a contactable email address",
        weight: 10.0,
        required: true,
        satisfied: has_email,
    },
    CompletionSignal {
        key: "personal_title",
        label: "Add a professional headline",
        weight: 5.0,
        required: false,
        satisfied: has_title,
    },
    CompletionSignal {
        key: "personal_summary",
        label: "Write a short professional summary",
        weight: 10.0,
        required: false,
        satisfied: has_summary,
    },
    CompletionSignal {
        key: "contact_details",
        label: "Add a phone number, location, or profile link",
        weight: 3.0,
        required: false,
        satisfied: has_contact_details,
    },
    CompletionSignal {
        key: "experience_any",
        label: "Add at least one work experience entry",
        weight: 20.0,
        required: true,
        satisfied: has_experience,
    },
    CompletionSignal {
        key: "experience_detail",
        label: "Describe an experience entry or list achievements",
        weight: 5.0,
        required: false,
        satisfied: has_experience_detail,
    },
    CompletionSignal {
        key: "education_any",
        label: "Add an education entry",
        weight: 10.0,
        required: false,
        satisfied: has_education,
    },
    CompletionSignal {
        key: "skills_three",
        label: "List at least three skills",
        weight: 10.0,
        required: false,
        satisfied: has_three_skills,
    },
    CompletionSignal {
        key: "projects_any",
        label: "Add a project",
        weight: 5.0,
        required: false,
        satisfied: has_projects,
    },
    CompletionSignal {
        key: "languages_any",
        label: "Add a language",
        weight: 3.0,
        required: false,
        satisfied: has_languages,
    },
    CompletionSignal {
        key: "extras_any",
        label: "Add a certification, award, publication, or volunteer entry",
        weight: 4.0,
        required: false,
        satisfied: has_extras,
    },
];

/// Derives completion progress from a CV snapshot. Pure — never mutates.
pub fn compute_completion(cv: &Cv) -> CompletionReport {
    let total_weight: f64 = SIGNALS.iter().map(|s| s.weight).sum();
    let mut satisfied_weight = 0.0;
    let mut required_remaining = Vec::new();

    for signal in SIGNALS {
        if (signal.satisfied)(cv) {
            satisfied_weight += signal.weight;
        } else if signal.required {
            required_remaining.push(signal.label.to_string());
        }
    }

    let percentage = if total_weight > 0.0 {
        (satisfied_weight / total_weight * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    CompletionReport {
        percentage,
        required_remaining,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Signal predicates
// ────────────────────────────────────────────────────────────────────────────

fn has_name(cv: &Cv) -> bool {
    !cv.personal_info.first_name.trim().is_empty() && !cv.personal_info.last_name.trim().is_empty()
}

fn has_email(cv: &Cv) -> bool {
    is_valid_email(&cv.personal_info.email)
}

fn has_title(cv: &Cv) -> bool {
    normalize_opt(&cv.personal_info.title).is_some()
}

fn has_summary(cv: &Cv) -> bool {
    normalize_opt(&cv.personal_info.summary).is_some()
}

fn has_contact_details(cv: &Cv) -> bool {
    let p = &cv.personal_info;
    [&p.phone, &p.location, &p.website, &p.linkedin, &p.github]
        .into_iter()
        .any(|f| normalize_opt(f).is_some())
}

fn has_experience(cv: &Cv) -> bool {
    !cv.experience.is_empty()
}

fn has_experience_detail(cv: &Cv) -> bool {
    cv.experience.iter().any(|e| {
        normalize_opt(&e.description).is_some()
            || e.achievements.iter().any(|a| !a.trim().is_empty())
    })
}

fn has_education(cv: &Cv) -> bool {
    !cv.education.is_empty()
}

fn has_three_skills(cv: &Cv) -> bool {
    cv.skills.len() >= 3
}

fn has_projects(cv: &Cv) -> bool {
    !cv.projects.is_empty()
}

fn has_languages(cv: &Cv) -> bool {
    !cv.languages.is_empty()
}

fn has_extras(cv: &Cv) -> bool {
    !cv.certifications.is_empty()
        || !cv.awards.is_empty()
        || !cv.publications.is_empty()
        || !cv.volunteer.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{minimal_cv, sample_cv, scenario_cv};
    use crate::models::entities::Experience;

    #[test]
    fn test_empty_cv_scores_zero_with_all_required_remaining() {
        let report = compute_completion(&minimal_cv());
        assert_eq!(report.percentage, 0);
        assert_eq!(
            report.required_remaining,
            vec![
                "Add your first and last name",
                "Add a contactable email address",
                "Add at least one work experience entry",
            ]
        );
    }

    #[test]
    fn test_sample_cv_scores_full() {
        let report = compute_completion(&sample_cv());
        assert_eq!(report.percentage, 100, "fixture satisfies every signal");
        assert!(report.required_remaining.is_empty());
    }

    #[test]
    fn test_scenario_personal_plus_current_experience() {
        // Personal info filled, one current experience, no education/skills:
        // all required signals satisfied, optional ones partially.
        let report = compute_completion(&scenario_cv());
        assert!(report.required_remaining.is_empty());
        assert!(report.percentage > 0 && report.percentage < 100);
    }

    #[test]
    fn test_percentage_is_informational_not_validity() {
        // A checklist-complete CV can still be export-blocked: break a date
        // order after the checklist is satisfied.
        let mut cv = sample_cv();
        cv.experience[0].current = false;
        cv.experience[0].start_date = "2022-06".to_string();
        cv.experience[0].end_date = Some("2020-01".to_string());
        assert_eq!(compute_completion(&cv).percentage, 100);
        assert!(!crate::validation::validate_cv(&cv).is_valid);
    }

    #[test]
    fn test_filling_required_field_never_decreases_percentage() {
        let mut cv = minimal_cv();
        let before = compute_completion(&cv).percentage;

        cv.personal_info.first_name = "Ada".to_string();
        cv.personal_info.last_name = "Lovelace".to_string();
        let after_name = compute_completion(&cv).percentage;
        assert!(after_name >= before);

        cv.personal_info.email = "ada@example.com".to_string();
        let after_email = compute_completion(&cv).percentage;
        assert!(after_email >= after_name);

        cv.experience.push(Experience {
            id: "e1".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            position: "Programmer".to_string(),
            start_date: "1843-01".to_string(),
            current: true,
            ..Default::default()
        });
        let after_exp = compute_completion(&cv).percentage;
        assert!(after_exp >= after_email);
    }

    #[test]
    fn test_required_remaining_shrinks_as_signals_fill() {
        let mut cv = minimal_cv();
        assert_eq!(compute_completion(&cv).required_remaining.len(), 3);
        cv.personal_info.first_name = "Ada".to_string();
        cv.personal_info.last_name = "Lovelace".to_string();
        assert_eq!(compute_completion(&cv).required_remaining.len(), 2);
    }

    #[test]
    fn test_blank_achievements_do_not_count_as_detail() {
        let mut cv = minimal_cv();
        cv.experience.push(Experience {
            achievements: vec!["   ".to_string()],
            ..Default::default()
        });
        assert!(!has_experience_detail(&cv));
    }

    #[test]
    fn test_signal_weights_total_100() {
        let total: f64 = SIGNALS.iter().map(|s| s.weight).sum();
        assert!((total - 100.0).abs() < 1e-9, "weights sum to {total}");
    }

    mod properties {
        use super::*;
        use crate::fixtures::arb_cv;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn prop_filling_identity_never_decreases_percentage(cv in arb_cv()) {
                let before = compute_completion(&cv).percentage;
                let mut filled = cv;
                filled.personal_info.first_name = "Ada".to_string();
                filled.personal_info.last_name = "Lovelace".to_string();
                filled.personal_info.email = "ada@example.com".to_string();
                let after = compute_completion(&filled).percentage;
                prop_assert!(after >= before);
            }
        }
    }
}
