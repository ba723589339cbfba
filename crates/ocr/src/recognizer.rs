use shiftlog_core::OcrSettings;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("No OCR engine available — build with `tesseract` feature")]
    NotAvailable,
}

/// Anything that turns a captured photo into text.
/// Implementations receive the encoded image exactly as captured (PNG/JPEG).
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

impl<T: OcrBackend + ?Sized> OcrBackend for Box<T> {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        (**self).recognize(image_bytes)
    }
}

// ── Mock backend ──────────────────────────────────────────────────────────────

/// Returns a preset string for every image.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

/// Placeholder used when no engine is compiled in.
pub struct UnavailableRecognizer;

impl OcrBackend for UnavailableRecognizer {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::NotAvailable)
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use leptess::LepTess;
    use shiftlog_core::OcrSettings;

    /// Tesseract, with language and data directory from the `[ocr]` settings.
    pub struct TesseractRecognizer {
        settings: OcrSettings,
    }

    impl TesseractRecognizer {
        pub fn new(settings: OcrSettings) -> Self {
            Self { settings }
        }

        pub fn lang(&self) -> &str {
            &self.settings.lang
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
            let mut engine = LepTess::new(self.settings.data_path.as_deref(), &self.settings.lang)
                .map_err(|e| {
                    OcrError::Engine(format!("cannot load language '{}': {e}", self.settings.lang))
                })?;
            engine
                .set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            let text = engine
                .get_utf8_text()
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            tracing::debug!(lang = %self.settings.lang, chars = text.len(), "capture recognized");
            Ok(text)
        }
    }
}

/// The best engine this build offers, configured from the `[ocr]` settings.
pub fn default_backend(settings: &OcrSettings) -> Box<dyn OcrBackend> {
    #[cfg(feature = "tesseract")]
    {
        Box::new(tesseract_backend::TesseractRecognizer::new(settings.clone()))
    }
    #[cfg(not(feature = "tesseract"))]
    {
        tracing::debug!(lang = %settings.lang, "no OCR engine compiled in");
        Box::new(UnavailableRecognizer)
    }
}
