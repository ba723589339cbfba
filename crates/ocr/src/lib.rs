pub mod extract;
pub mod pipeline;
pub mod recognizer;
pub mod types;

pub use extract::MeasurementExtractor;
pub use pipeline::{scan_text, PipelineError, Reading, ScanPipeline, ScanResult};
pub use recognizer::{default_backend, MockRecognizer, OcrBackend, OcrError, UnavailableRecognizer};
pub use shiftlog_core::ScanMode;
pub use types::{CandidateNumber, SingleWeight, TemperatureWeightPair, WeightPattern};
