pub mod cv;
pub mod entities;
pub mod settings;

pub use cv::{Cv, CvStatus};
pub use entities::{
    Award, Certification, CustomSection, CustomSectionItem, Education, Experience, Language,
    LanguageProficiency, PersonalInfo, Project, Publication, ReferenceEntry, SectionEntity,
    SectionKey, Skill, SkillCategory, SkillLevel, Volunteer,
};
pub use settings::{
    resolve_settings, AccentColor, CvSettings, CvSettingsPatch, FontSize, Spacing, TemplateId,
    Theme, DEFAULT_SECTION_ORDER,
};
