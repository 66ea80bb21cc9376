//! CV domain core: schemas, completion engine, and the template rendering
//! contract.
//!
//! The crate is the pure heart of a CV builder. The form layer produces
//! immutable [`models::Cv`] snapshots; this crate judges them
//! ([`validation::validate_cv`]), derives progress
//! ([`completion::compute_completion`]), and projects them into
//! interchangeable visual layouts ([`render`]) for preview and export.
//! Nothing here blocks, retries, or mutates shared state — every operation
//! is a synchronous function over the snapshot it is given.
//!
//! Invalid CVs are first-class: partial work must survive autosave, so
//! validation reports rather than rejects, and only the export gate
//! ([`export::prepare_export`]) refuses to proceed.

pub mod completion;
pub mod editor;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use completion::{compute_completion, CompletionReport};
pub use errors::{summarize_blockers, EditError, ExportError, FieldError};
pub use export::{prepare_export, DocumentExporter, ExportRequest};
pub use models::{Cv, CvSettings, CvSettingsPatch, CvStatus, SectionKey, TemplateId};
pub use render::{all_templates, render, template_for, RenderOptions, RenderTree, Template};
pub use validation::{validate_cv, ValidationResult};
