//! Session controller: orchestrates one translate pass and owns the
//! resulting overlays.

use log::{debug, info};
use surtitre_ocr::{BoundingBox, FragmentLevel, OcrEngine};

use crate::capture::ScreenSource;
use crate::error::PipelineError;
use crate::translate::Translator;

/// One translated line, pinned to the screen coordinates of the text it
/// covers. Plain data: the UI declares one viewport per overlay each frame,
/// so dropping an overlay from the session closes its window.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub text: String,
    pub bounding_box: BoundingBox,
}

/// Owns the overlays of the current translate pass. At most one generation
/// is live at a time: every pass starts by dropping the previous one.
#[derive(Default)]
pub struct Session {
    overlays: Vec<Overlay>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    /// Runs one capture → detect → translate → overlay pass and returns the
    /// number of overlays created.
    ///
    /// Only line-level fragments with non-blank text are translated, in
    /// detection order, one blocking request each. Each overlay is pushed as
    /// soon as its translation comes back, so when a stage fails the
    /// overlays created so far stay in place, the remaining fragments are
    /// never processed, and the error propagates to the caller unchanged.
    pub fn translate_screen(
        &mut self,
        screen: &dyn ScreenSource,
        ocr: &dyn OcrEngine,
        translator: &dyn Translator,
        ocr_language: &str,
    ) -> Result<usize, PipelineError> {
        self.overlays.clear();

        let image = screen.capture()?;
        info!("captured {}x{} screen image", image.width(), image.height());

        let fragments = ocr.detect(&image, ocr_language)?;
        debug!("detected {} fragments", fragments.len());

        for fragment in fragments
            .iter()
            .filter(|f| f.level == FragmentLevel::Line && !f.is_blank())
        {
            let translated = translator.translate(fragment.text.trim())?;
            self.overlays.push(Overlay {
                text: translated,
                bounding_box: fragment.bounding_box,
            });
        }

        info!("created {} overlays", self.overlays.len());
        Ok(self.overlays.len())
    }
}
