//! Full-screen capture behind a trait so the pipeline can run against stubs.

use image::{DynamicImage, RgbaImage};
use screenshots::Screen;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no screen available: {0}")]
    NoScreen(String),
    #[error("screen capture failed: {0}")]
    Failed(String),
}

pub trait ScreenSource {
    /// Grabs the full bounds of the screen, synchronously. No retry: if the
    /// platform denies screen access the error goes straight to the caller.
    fn capture(&self) -> Result<DynamicImage, CaptureError>;
}

/// Captures the screen containing the origin point.
pub struct PrimaryScreen;

impl PrimaryScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrimaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenSource for PrimaryScreen {
    fn capture(&self) -> Result<DynamicImage, CaptureError> {
        let screen =
            Screen::from_point(0, 0).map_err(|e| CaptureError::NoScreen(e.to_string()))?;
        let captured = screen
            .capture()
            .map_err(|e| CaptureError::Failed(e.to_string()))?;

        let (width, height) = (captured.width(), captured.height());
        let buffer = RgbaImage::from_raw(width, height, captured.to_vec())
            .ok_or_else(|| CaptureError::Failed("capture buffer size mismatch".to_string()))?;
        Ok(DynamicImage::ImageRgba8(buffer))
    }
}
