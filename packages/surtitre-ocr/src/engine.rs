use image::DynamicImage;
use thiserror::Error;

use crate::region::TextFragment;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("engine error: {0}")]
    Engine(String),
}

pub trait OcrEngine: Send + Sync {
    /// Runs recognition over `image` and returns every detected fragment in
    /// engine order, across all hierarchy levels. Callers filter by level
    /// and blankness. Either the whole page is recognized or an error is
    /// returned; there are no partial results.
    fn detect(&self, image: &DynamicImage, language: &str) -> Result<Vec<TextFragment>, OcrError>;
}
