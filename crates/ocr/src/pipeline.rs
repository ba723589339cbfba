use serde::{Deserialize, Serialize};
use shiftlog_core::{InputMethod, ScanMode, UnvalidatedOperation};
use thiserror::Error;

use crate::extract::MeasurementExtractor;
use crate::recognizer::{OcrBackend, OcrError};
use crate::types::{SingleWeight, TemperatureWeightPair};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
}

/// A measurement read from one capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reading {
    Weight(SingleWeight),
    TemperatureWeight(TemperatureWeightPair),
}

impl Reading {
    /// Copy the detected values into a data-entry draft once the operator
    /// has confirmed them.
    pub fn apply_to(&self, draft: &mut UnvalidatedOperation) {
        match self {
            Reading::Weight(w) => {
                draft.weight = Some(w.value);
            }
            Reading::TemperatureWeight(p) => {
                draft.temperature = Some(p.temperature);
                draft.weight = Some(p.weight);
            }
        }
        draft.input_method = InputMethod::Ocr;
    }
}

/// Outcome of a single scan. `reading` is `None` when the text held nothing
/// usable; the caller is expected to offer a retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub mode: ScanMode,
    pub raw_text: String,
    pub reading: Option<Reading>,
}

impl ScanResult {
    pub fn is_found(&self) -> bool {
        self.reading.is_some()
    }
}

/// Route already-recognized text to the extractor for `mode`.
pub fn scan_text(text: &str, mode: ScanMode) -> ScanResult {
    let reading = match mode {
        ScanMode::Weight => {
            MeasurementExtractor::extract_single_weight(text).map(Reading::Weight)
        }
        ScanMode::TemperatureWeight => {
            MeasurementExtractor::extract_temperature_weight_pair(text)
                .map(Reading::TemperatureWeight)
        }
    };

    match &reading {
        Some(r) => tracing::info!(?mode, reading = ?r, "measurement detected"),
        None => tracing::debug!(?mode, chars = text.len(), "no measurement in recognized text"),
    }

    ScanResult {
        mode,
        raw_text: text.to_string(),
        reading,
    }
}

/// Orchestrates: recognize → extract.
pub struct ScanPipeline<R: OcrBackend> {
    recognizer: R,
}

impl<R: OcrBackend> ScanPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Run OCR over a captured image and extract a reading from the text.
    pub fn scan(&self, image_bytes: &[u8], mode: ScanMode) -> Result<ScanResult, PipelineError> {
        let text = self.recognizer.recognize(image_bytes).map_err(|e| {
            tracing::warn!("OCR backend failed: {e}");
            e
        })?;
        Ok(scan_text(&text, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{MockRecognizer, UnavailableRecognizer};
    use crate::types::WeightPattern;
    use chrono::NaiveDate;

    fn draft() -> UnvalidatedOperation {
        UnvalidatedOperation::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    #[test]
    fn weight_mode_uses_single_weight_extractor() {
        let result = scan_text("NET 1,25 kg", ScanMode::Weight);
        assert_eq!(
            result.reading,
            Some(Reading::Weight(SingleWeight {
                value: 1.25,
                pattern: WeightPattern::DecimalWithUnit,
            }))
        );
        assert_eq!(result.raw_text, "NET 1,25 kg");
    }

    #[test]
    fn temperature_weight_mode_uses_pair_extractor() {
        let result = scan_text("Suhu 24.0\nBerat 1500", ScanMode::TemperatureWeight);
        assert_eq!(
            result.reading,
            Some(Reading::TemperatureWeight(TemperatureWeightPair {
                temperature: 24.0,
                weight: 1500.0,
            }))
        );
    }

    #[test]
    fn not_found_is_not_an_error() {
        let pipeline = ScanPipeline::new(MockRecognizer::new("blank"));
        let result = pipeline.scan(b"img", ScanMode::Weight).unwrap();
        assert!(!result.is_found());
        assert_eq!(result.raw_text, "blank");
    }

    #[test]
    fn backend_failure_is_an_error() {
        let pipeline = ScanPipeline::new(UnavailableRecognizer);
        assert!(matches!(
            pipeline.scan(b"img", ScanMode::Weight),
            Err(PipelineError::Ocr(OcrError::NotAvailable))
        ));
    }

    #[test]
    fn scan_runs_backend_then_extractor() {
        let pipeline = ScanPipeline::new(MockRecognizer::new("Temp: 23.5 Weight: 1.2 kg"));
        let result = pipeline.scan(b"img", ScanMode::TemperatureWeight).unwrap();
        assert_eq!(result.mode, ScanMode::TemperatureWeight);
        assert!(result.is_found());
    }

    #[test]
    fn weight_reading_fills_weight_only() {
        let mut op = draft();
        op.temperature = Some(19.0);
        scan_text("2kg", ScanMode::Weight).reading.unwrap().apply_to(&mut op);
        assert_eq!(op.weight, Some(2.0));
        assert_eq!(op.temperature, Some(19.0));
        assert_eq!(op.input_method, InputMethod::Ocr);
    }

    #[test]
    fn pair_reading_fills_both_fields() {
        let mut op = draft();
        scan_text("23.5 / 1.2", ScanMode::TemperatureWeight)
            .reading
            .unwrap()
            .apply_to(&mut op);
        assert_eq!(op.temperature, Some(23.5));
        assert_eq!(op.weight, Some(1.2));
        assert_eq!(op.input_method, InputMethod::Ocr);
    }

    #[test]
    fn scan_result_json_shape() {
        let result = scan_text("2kg", ScanMode::Weight);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "weight");
        assert_eq!(json["reading"]["kind"], "weight");
        assert_eq!(json["reading"]["value"], 2.0);
        assert_eq!(json["reading"]["pattern"], "integer_with_unit");

        let json = serde_json::to_value(scan_text("", ScanMode::Weight)).unwrap();
        assert!(json["reading"].is_null());
    }
}
