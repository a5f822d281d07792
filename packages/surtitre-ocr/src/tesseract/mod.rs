mod engine;

pub use engine::TesseractEngine;
