use std::sync::OnceLock;

use regex::Regex;

use crate::types::{CandidateNumber, SingleWeight, TemperatureWeightPair, WeightPattern};

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Single-weight patterns run on whitespace-stripped text, so `1.5 kg` arrives
// here as `1.5kg`. Digits are ASCII only.
re!(re_decimal_kg, r"(?i)([0-9]+[.,][0-9]+)kg");
re!(re_decimal, r"([0-9]+[.,][0-9]+)");
re!(re_integer_kg, r"(?i)([0-9]+)kg");
re!(re_integer, r"([0-9]+)");

re!(re_numeric_token, r"[0-9]+(?:\.[0-9]+)?");

fn pattern_regex(pattern: WeightPattern) -> &'static Regex {
    match pattern {
        WeightPattern::DecimalWithUnit => re_decimal_kg(),
        WeightPattern::Decimal => re_decimal(),
        WeightPattern::IntegerWithUnit => re_integer_kg(),
        WeightPattern::Integer => re_integer(),
    }
}

// ── Public extraction API ─────────────────────────────────────────────────────

pub struct MeasurementExtractor;

impl MeasurementExtractor {
    /// Read one weight from scale-display text.
    ///
    /// Whitespace is removed first, then the patterns in
    /// [`WeightPattern::PRIORITY`] are tried against the whole normalized
    /// string. Each pattern contributes only its leftmost match; a match outside
    /// `0 < w < 1000` falls through to the next pattern. `None` means nothing
    /// plausible was found.
    pub fn extract_single_weight(text: &str) -> Option<SingleWeight> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return None;
        }

        WeightPattern::PRIORITY.iter().find_map(|&pattern| {
            let candidate = match_candidate(&normalized, pattern)?;
            let weight = SingleWeight::from_candidate(candidate);
            if weight.is_none() {
                tracing::debug!(
                    %pattern,
                    value = candidate.value,
                    "weight candidate out of range"
                );
            }
            weight
        })
    }

    /// Read a temperature and a weight, in that order, from label text.
    ///
    /// The first two numeric tokens are used as-is; anything after them is
    /// ignored and no range check is applied.
    pub fn extract_temperature_weight_pair(text: &str) -> Option<TemperatureWeightPair> {
        let mut tokens = re_numeric_token().find_iter(text);
        let temperature: f64 = tokens.next()?.as_str().parse().ok()?;
        let weight: f64 = tokens.next()?.as_str().parse().ok()?;
        Some(TemperatureWeightPair { temperature, weight })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn match_candidate(normalized: &str, pattern: WeightPattern) -> Option<CandidateNumber> {
    let caps = pattern_regex(pattern).captures(normalized)?;
    // Comma is always a decimal separator: "1,000" reads as 1.0.
    let number = caps.get(1)?.as_str().replace(',', ".");
    let value = number.parse::<f64>().ok()?;
    Some(CandidateNumber { value, pattern })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
