//! Template rendering contract.
//!
//! # Contract guarantees (every implementation)
//! - A section appears iff its backing collection is non-empty.
//! - Sections follow `settings.sections_order`, filtered to present
//!   sections; unlisted sections append in the fixed default order.
//!   Multi-column layouts keep the relative order within each column.
//! - Entities within a section are sorted by `order`, ties by position.
//! - Date ranges come from the shared formatter (`"Jan 2020 - Present"`).
//! - Missing optional fields are omitted — no placeholders.
//! - Every renderable non-empty field appears somewhere in the output.
//!
//! `render` is pure and deterministic for a given `(cv, options)` pair; the
//! only time-like output is the stable `"Present"` label.

use serde::{Deserialize, Serialize};

use crate::models::cv::Cv;
use crate::models::settings::TemplateId;
use crate::render::templates::{ClassicTemplate, CreativeTemplate, ModernTemplate};
use crate::render::tree::RenderTree;

/// Render-time options passed by the caller, distinct from the CV's own
/// stored settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Photo inclusion is a caller choice (e.g. anonymized exports).
    pub include_photo: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            include_photo: true,
        }
    }
}

/// The contract every concrete template satisfies. Implementations are
/// stateless unit structs registered in `template_for`.
pub trait Template: Sync {
    fn id(&self) -> TemplateId;
    fn name(&self) -> &'static str;
    fn render(&self, cv: &Cv, options: &RenderOptions) -> RenderTree;
}

/// Registry keyed by template id. Adding a template means one new
/// implementation plus one match arm — nothing else changes.
pub fn template_for(id: TemplateId) -> &'static dyn Template {
    match id {
        TemplateId::Modern => &ModernTemplate,
        TemplateId::Classic => &ClassicTemplate,
        TemplateId::Creative => &CreativeTemplate,
    }
}

/// All registered templates, for pickers and conformance tests.
pub fn all_templates() -> [&'static dyn Template; 3] {
    [&ModernTemplate, &ClassicTemplate, &CreativeTemplate]
}

/// Renders a CV with the template selected in its settings.
pub fn render(cv: &Cv, options: &RenderOptions) -> RenderTree {
    template_for(cv.settings.template).render(cv, options)
}
