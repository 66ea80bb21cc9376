//! Export gating and the collaborator seam.
//!
//! Export is permitted only when aggregate validation passes — completion
//! percentage never overrides a validation failure. The actual document
//! production (PDF/DOCX) happens outside this core; a failed backend simply
//! returns its error to the caller, which may re-invoke.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::ExportError;
use crate::models::cv::Cv;
use crate::models::settings::TemplateId;
use crate::render::contract::{template_for, RenderOptions};
use crate::render::tree::RenderTree;

/// The handoff to the external document producer: the rendered tree plus
/// the template that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub template: TemplateId,
    pub tree: RenderTree,
}

/// External collaborator that turns a rendered tree into a binary document.
/// Synchronous from this core's point of view; retries and cancellation are
/// the caller's concern.
pub trait DocumentExporter {
    fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ExportError>;
}

/// Validates, gates, and renders. Returns the export-ready request, or
/// `ExportError::Blocked` with the full error list when the CV is invalid.
pub fn prepare_export(
    cv: &Cv,
    template: TemplateId,
    options: &RenderOptions,
) -> Result<ExportRequest, ExportError> {
    let result = crate::validation::validate_cv(cv);
    if !result.is_valid {
        warn!(
            cv_id = %cv.id,
            error_count = result.errors.len(),
            "export blocked by validation"
        );
        return Err(ExportError::Blocked(result.errors));
    }

    let tree = template_for(template).render(cv, options);
    info!(cv_id = %cv.id, template = ?template, "export prepared");
    Ok(ExportRequest { template, tree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::summarize_blockers;
    use crate::fixtures::{minimal_cv, sample_cv};

    struct StubExporter {
        fail: bool,
    }

    impl DocumentExporter for StubExporter {
        fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
            if self.fail {
                Err(ExportError::Backend("renderer crashed".to_string()))
            } else {
                Ok(format!("{:?}", request.template).into_bytes())
            }
        }
    }

    #[test]
    fn test_valid_cv_exports_with_requested_template() {
        let request =
            prepare_export(&sample_cv(), TemplateId::Creative, &RenderOptions::default())
                .expect("sample CV is valid");
        assert_eq!(request.template, TemplateId::Creative);
        assert_eq!(request.tree.template, TemplateId::Creative);
    }

    #[test]
    fn test_invalid_cv_blocked_with_errors() {
        let err = prepare_export(&minimal_cv(), TemplateId::Modern, &RenderOptions::default())
            .unwrap_err();
        match err {
            ExportError::Blocked(errors) => {
                assert!(!errors.is_empty());
                let summary = summarize_blockers(&errors, 2);
                assert!(summary.len() <= 3);
            }
            other => panic!("expected Blocked, got {other}"),
        }
    }

    #[test]
    fn test_completion_never_overrides_validation() {
        // Checklist-complete but cross-field invalid: still blocked.
        let mut cv = sample_cv();
        cv.experience[0].current = false;
        cv.experience[0].start_date = "2022-06".to_string();
        cv.experience[0].end_date = Some("2020-01".to_string());
        assert_eq!(crate::completion::compute_completion(&cv).percentage, 100);
        assert!(matches!(
            prepare_export(&cv, TemplateId::Modern, &RenderOptions::default()),
            Err(ExportError::Blocked(_))
        ));
    }

    #[test]
    fn test_backend_failure_surfaces_to_caller() {
        let request =
            prepare_export(&sample_cv(), TemplateId::Modern, &RenderOptions::default()).unwrap();
        let err = StubExporter { fail: true }.export(&request).unwrap_err();
        assert!(matches!(err, ExportError::Backend(_)));

        let bytes = StubExporter { fail: false }.export(&request).unwrap();
        assert!(!bytes.is_empty());
    }
}
