use surtitre_ocr::OcrError;
use thiserror::Error;

use crate::capture::CaptureError;
use crate::translate::TranslateError;

/// One error type for the whole translate operation. No stage recovers:
/// whichever stage fails first propagates here, the UI shell formats it with
/// full detail and shows it in a blocking dialog, and the application
/// returns to idle.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("screen capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("text detection failed: {0}")]
    Detection(#[from] OcrError),
    #[error("translation failed: {0}")]
    Translation(#[from] TranslateError),
}
