//! # surtitre
//!
//! Screen translation overlay: capture the screen, locate lines of text with
//! OCR, translate each line, and pin the translation over the original text
//! at the same coordinates.
//!
//! The whole program is one sequential pipeline driven from the UI thread:
//! a button press clears the previous overlays, captures the screen, detects
//! text fragments, translates the line-level ones one by one, and creates an
//! overlay for each translation as soon as it comes back. The first error at
//! any stage aborts the pass; overlays already created stay on screen.
//!
//! Pipeline stages sit behind traits ([`capture::ScreenSource`],
//! [`surtitre_ocr::OcrEngine`], [`translate::Translator`]) so the session
//! controller can be exercised with stubs.

pub mod capture;
pub mod cli;
pub mod error;
pub mod session;
pub mod translate;
pub mod ui;

// Re-export commonly used types at the root level
pub use capture::{CaptureError, PrimaryScreen, ScreenSource};
pub use error::PipelineError;
pub use session::{Overlay, Session};
pub use translate::{GoogleTranslator, TranslateError, Translator};
