use serde::{Deserialize, Serialize};
use std::fmt;

/// The single-weight patterns, listed in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPattern {
    /// `1.5kg`, `1,5KG`
    DecimalWithUnit,
    /// `1.5`, `1,5`
    Decimal,
    /// `2kg`
    IntegerWithUnit,
    /// `700`
    Integer,
}

impl WeightPattern {
    pub const PRIORITY: [WeightPattern; 4] = [
        WeightPattern::DecimalWithUnit,
        WeightPattern::Decimal,
        WeightPattern::IntegerWithUnit,
        WeightPattern::Integer,
    ];
}

impl fmt::Display for WeightPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightPattern::DecimalWithUnit => write!(f, "decimal_with_unit"),
            WeightPattern::Decimal => write!(f, "decimal"),
            WeightPattern::IntegerWithUnit => write!(f, "integer_with_unit"),
            WeightPattern::Integer => write!(f, "integer"),
        }
    }
}

/// A number pulled out of OCR text before plausibility checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateNumber {
    pub value: f64,
    pub pattern: WeightPattern,
}

/// A plausible scale reading in kilograms, `0 < value < 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleWeight {
    pub value: f64,
    /// Which pattern produced the value.
    pub pattern: WeightPattern,
}

impl SingleWeight {
    pub const MIN_EXCLUSIVE: f64 = 0.0;
    pub const MAX_EXCLUSIVE: f64 = 1000.0;

    /// Accepts the candidate only if it is a plausible weight.
    pub fn from_candidate(candidate: CandidateNumber) -> Option<Self> {
        let v = candidate.value;
        (v.is_finite() && v > Self::MIN_EXCLUSIVE && v < Self::MAX_EXCLUSIVE).then_some(
            SingleWeight {
                value: v,
                pattern: candidate.pattern,
            },
        )
    }
}

/// Temperature (°C) and weight (kg) read positionally from a label.
/// Neither value is range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureWeightPair {
    pub temperature: f64,
    pub weight: f64,
}
