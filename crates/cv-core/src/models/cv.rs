//! The CV aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::entities::{
    Award, Certification, CustomSection, Education, Experience, Language, PersonalInfo, Project,
    Publication, ReferenceEntry, SectionKey, Skill, Volunteer,
};
use crate::models::settings::{resolve_settings, CvSettings, CvSettingsPatch};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvStatus {
    #[default]
    Draft,
    Active,
    Archived,
    Deleted,
}

/// The aggregate résumé record: identity, lifecycle fields, the singleton
/// personal-info block, the ordered entity collections, and rendering
/// settings.
///
/// A CV that violates document-level invariants is still representable —
/// partial work must survive autosave. Validity is judged on demand by
/// `validation::validate_cv`, never enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cv {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Starts at 1, bumped by `touch` on every persisted mutation.
    pub version: i32,
    pub status: CvStatus,
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
    pub publications: Vec<Publication>,
    pub volunteer: Vec<Volunteer>,
    pub references: Vec<ReferenceEntry>,
    pub custom_sections: Vec<CustomSection>,
    pub settings: CvSettings,
}

impl Cv {
    /// Creates an empty draft CV with resolved default settings.
    pub fn new(user_id: Uuid) -> Self {
        Self::with_settings(user_id, CvSettingsPatch::default())
    }

    /// Creates an empty draft CV, merging the given settings patch over the
    /// defaults once — call sites never resolve defaults themselves.
    pub fn with_settings(user_id: Uuid, patch: CvSettingsPatch) -> Self {
        let now = Utc::now();
        Cv {
            id: Uuid::new_v4(),
            user_id,
            created_at: now,
            updated_at: now,
            version: 1,
            status: CvStatus::Draft,
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            awards: Vec::new(),
            publications: Vec::new(),
            volunteer: Vec::new(),
            references: Vec::new(),
            custom_sections: Vec::new(),
            settings: resolve_settings(patch),
        }
    }

    /// Records a persisted mutation: bumps `version` and `updated_at`.
    pub fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }

    /// Whether the backing collection for a section key holds any entries.
    /// `Unknown` keys report empty — renderers skip them.
    pub fn section_is_populated(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Experience => !self.experience.is_empty(),
            SectionKey::Education => !self.education.is_empty(),
            SectionKey::Skills => !self.skills.is_empty(),
            SectionKey::Languages => !self.languages.is_empty(),
            SectionKey::Projects => !self.projects.is_empty(),
            SectionKey::Certifications => !self.certifications.is_empty(),
            SectionKey::Awards => !self.awards.is_empty(),
            SectionKey::Publications => !self.publications.is_empty(),
            SectionKey::Volunteer => !self.volunteer.is_empty(),
            SectionKey::References => !self.references.is_empty(),
            SectionKey::CustomSections => !self.custom_sections.is_empty(),
            SectionKey::Unknown => false,
        }
    }
}
