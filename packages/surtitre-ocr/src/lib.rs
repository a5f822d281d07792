pub mod engine;
pub mod region;
pub mod tesseract;

pub use engine::{OcrEngine, OcrError};
pub use region::{BoundingBox, FragmentLevel, TextFragment};
pub use tesseract::TesseractEngine;
