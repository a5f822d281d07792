//! Integration tests for the surtitre library API

use image::DynamicImage;
use surtitre::{CaptureError, Overlay, ScreenSource, Session, TranslateError, Translator};
use surtitre_ocr::{BoundingBox, FragmentLevel, OcrEngine, OcrError, TextFragment};

struct OneLineScreen;

impl ScreenSource for OneLineScreen {
    fn capture(&self) -> Result<DynamicImage, CaptureError> {
        Ok(DynamicImage::new_rgba8(200, 100))
    }
}

struct OneLineOcr;

impl OcrEngine for OneLineOcr {
    fn detect(
        &self,
        _image: &DynamicImage,
        _language: &str,
    ) -> Result<Vec<TextFragment>, OcrError> {
        Ok(vec![TextFragment {
            text: "Hello".to_string(),
            bounding_box: BoundingBox {
                x: 10,
                y: 20,
                width: 100,
                height: 30,
            },
            level: FragmentLevel::Line,
            confidence: Some(95.0),
        }])
    }
}

struct PhraseBook;

impl Translator for PhraseBook {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        match text {
            "Hello" => Ok("Bonjour".to_string()),
            other => Err(TranslateError::Malformed(other.to_string())),
        }
    }
}

#[test]
fn test_end_to_end_single_line() {
    let mut session = Session::new();
    let count = session
        .translate_screen(&OneLineScreen, &OneLineOcr, &PhraseBook, "eng")
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        session.overlays(),
        &[Overlay {
            text: "Bonjour".to_string(),
            bounding_box: BoundingBox {
                x: 10,
                y: 20,
                width: 100,
                height: 30,
            },
        }]
    );
}

#[test]
fn test_engine_failure_leaves_no_overlays() {
    struct DownOcr;

    impl OcrEngine for DownOcr {
        fn detect(
            &self,
            _image: &DynamicImage,
            _language: &str,
        ) -> Result<Vec<TextFragment>, OcrError> {
            Err(OcrError::EngineUnavailable("tesseract not on PATH".to_string()))
        }
    }

    let mut session = Session::new();
    let result = session.translate_screen(&OneLineScreen, &DownOcr, &PhraseBook, "eng");

    assert!(result.is_err());
    assert!(session.overlays().is_empty());
    // The formatted error carries the full engine detail for the dialog.
    let message = result.unwrap_err().to_string();
    assert!(message.contains("tesseract not on PATH"), "{message}");
}

#[test]
fn test_direct_imports() {
    use surtitre::session::Session;
    use surtitre_ocr::tesseract::TesseractEngine;

    let _session = Session::new();
    let _engine = TesseractEngine::new();
}
