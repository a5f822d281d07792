use std::collections::HashMap;

use image::DynamicImage;
use rusty_tesseract::{Args, Data, Image};

use crate::engine::{OcrEngine, OcrError};
use crate::region::{BoundingBox, FragmentLevel, TextFragment};

/// Adapter over the system `tesseract` binary via rusty-tesseract's TSV
/// data output. The binary must be discoverable on PATH.
pub struct TesseractEngine;

impl TesseractEngine {
    pub fn new() -> Self {
        Self
    }

    fn ensure_available(&self) -> Result<(), OcrError> {
        rusty_tesseract::get_tesseract_version()
            .map(|_| ())
            .map_err(|e| OcrError::EngineUnavailable(e.to_string()))
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn detect(&self, image: &DynamicImage, language: &str) -> Result<Vec<TextFragment>, OcrError> {
        self.ensure_available()?;

        let input =
            Image::from_dynamic_image(image).map_err(|e| OcrError::InvalidInput(e.to_string()))?;
        let args = Args {
            lang: language.to_string(),
            ..Args::default()
        };
        let output =
            rusty_tesseract::image_to_data(&input, &args).map_err(|e| OcrError::Engine(e.to_string()))?;

        Ok(fragments_from_data(&output.data))
    }
}

/// (block, paragraph, line) triple identifying one line within a page.
type LineKey = (i32, i32, i32);

/// Maps raw TSV rows to fragments. Tesseract leaves the text column empty on
/// rows above word level, so the text of each line fragment is synthesized by
/// joining the words that belong to it.
fn fragments_from_data(rows: &[Data]) -> Vec<TextFragment> {
    let mut line_words: HashMap<LineKey, Vec<&str>> = HashMap::new();
    for row in rows {
        if row.level == 5 && !row.text.trim().is_empty() {
            line_words
                .entry((row.block_num, row.par_num, row.line_num))
                .or_default()
                .push(row.text.trim());
        }
    }

    rows.iter()
        .filter_map(|row| {
            let level = FragmentLevel::from_level(row.level)?;
            let text = match level {
                FragmentLevel::Line => line_words
                    .get(&(row.block_num, row.par_num, row.line_num))
                    .map(|words| words.join(" "))
                    .unwrap_or_default(),
                _ => row.text.trim().to_string(),
            };
            Some(TextFragment {
                text,
                bounding_box: BoundingBox {
                    x: row.left,
                    y: row.top,
                    width: row.width.max(0) as u32,
                    height: row.height.max(0) as u32,
                },
                level,
                // Tesseract reports -1 confidence on non-word rows.
                confidence: (row.conf >= 0.0).then_some(row.conf),
            })
        })
        .collect()
}
