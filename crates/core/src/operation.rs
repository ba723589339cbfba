use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionLineId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ProductionLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Quality {
    #[default]
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT OK")]
    NotOk,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Ok => write!(f, "OK"),
            Quality::NotOk => write!(f, "NOT OK"),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Quality::Ok),
            "NOT OK" => Ok(Quality::NotOk),
            other => Err(format!("Unknown quality: '{other}'")),
        }
    }
}

/// How the measurement values of an operation were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputMethod {
    #[default]
    Manual,
    Ocr,
}

impl fmt::Display for InputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMethod::Manual => write!(f, "MANUAL"),
            InputMethod::Ocr => write!(f, "OCR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("Please select a group")]
    MissingGroup,
    #[error("Please select a shift")]
    MissingShift,
    #[error("Please select a production line")]
    MissingProductionLine,
    #[error("Please enter a valid temperature")]
    InvalidTemperature,
    #[error("Please enter a valid weight")]
    InvalidWeight,
}

/// A data-entry draft. Any field may still be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnvalidatedOperation {
    pub operation_date: NaiveDate,
    pub group_id: Option<GroupId>,
    pub shift_id: Option<ShiftId>,
    pub production_line_id: Option<ProductionLineId>,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub quality: Quality,
    pub input_method: InputMethod,
}

impl UnvalidatedOperation {
    pub fn new(operation_date: NaiveDate) -> Self {
        UnvalidatedOperation {
            operation_date,
            group_id: None,
            shift_id: None,
            production_line_id: None,
            temperature: None,
            weight: None,
            quality: Quality::default(),
            input_method: InputMethod::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOperation {
    pub id: Option<i64>,
    pub operation_date: NaiveDate,
    pub group_id: GroupId,
    pub shift_id: ShiftId,
    pub production_line_id: ProductionLineId,
    pub temperature: f64,
    pub weight: f64,
    pub quality: Quality,
    pub input_method: InputMethod,
}

impl ValidatedOperation {
    /// Checks are applied in form order; the first failure wins.
    pub fn validate(op: UnvalidatedOperation) -> Result<ValidatedOperation, OperationError> {
        let group_id = op.group_id.ok_or(OperationError::MissingGroup)?;
        let shift_id = op.shift_id.ok_or(OperationError::MissingShift)?;
        let production_line_id = op
            .production_line_id
            .ok_or(OperationError::MissingProductionLine)?;
        let temperature = op
            .temperature
            .filter(|t| t.is_finite())
            .ok_or(OperationError::InvalidTemperature)?;
        let weight = op
            .weight
            .filter(|w| w.is_finite())
            .ok_or(OperationError::InvalidWeight)?;

        Ok(ValidatedOperation {
            id: None,
            operation_date: op.operation_date,
            group_id,
            shift_id,
            production_line_id,
            temperature,
            weight,
            quality: op.quality,
            input_method: op.input_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn complete_draft() -> UnvalidatedOperation {
        UnvalidatedOperation {
            group_id: Some(GroupId(1)),
            shift_id: Some(ShiftId(2)),
            production_line_id: Some(ProductionLineId(3)),
            temperature: Some(23.5),
            weight: Some(1.2),
            ..UnvalidatedOperation::new(date(2024, 5, 2))
        }
    }

    #[test]
    fn new_draft_defaults() {
        let draft = UnvalidatedOperation::new(date(2024, 5, 2));
        assert_eq!(draft.quality, Quality::Ok);
        assert_eq!(draft.input_method, InputMethod::Manual);
        assert!(draft.weight.is_none());
        assert!(draft.temperature.is_none());
    }

    #[test]
    fn validate_complete_draft() {
        let op = ValidatedOperation::validate(complete_draft()).unwrap();
        assert_eq!(op.production_line_id, ProductionLineId(3));
        assert_eq!(op.temperature, 23.5);
        assert_eq!(op.weight, 1.2);
        assert!(op.id.is_none());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let draft = UnvalidatedOperation::new(date(2024, 5, 2));
        assert_eq!(
            ValidatedOperation::validate(draft),
            Err(OperationError::MissingGroup)
        );

        let draft = UnvalidatedOperation { shift_id: None, ..complete_draft() };
        assert_eq!(
            ValidatedOperation::validate(draft),
            Err(OperationError::MissingShift)
        );

        let draft = UnvalidatedOperation { production_line_id: None, ..complete_draft() };
        assert_eq!(
            ValidatedOperation::validate(draft),
            Err(OperationError::MissingProductionLine)
        );
    }

    #[test]
    fn validate_rejects_non_finite_measurements() {
        let draft = UnvalidatedOperation { temperature: Some(f64::NAN), ..complete_draft() };
        assert_eq!(
            ValidatedOperation::validate(draft),
            Err(OperationError::InvalidTemperature)
        );

        let draft = UnvalidatedOperation { weight: None, ..complete_draft() };
        assert_eq!(
            ValidatedOperation::validate(draft),
            Err(OperationError::InvalidWeight)
        );
    }

    #[test]
    fn validate_has_no_range_checks() {
        let draft = UnvalidatedOperation {
            temperature: Some(-40.0),
            weight: Some(5000.0),
            ..complete_draft()
        };
        assert!(ValidatedOperation::validate(draft).is_ok());
    }

    #[test]
    fn reference_ids_display_as_plain_numbers() {
        assert_eq!(GroupId(1).to_string(), "1");
        assert_eq!(ShiftId(22).to_string(), "22");
        assert_eq!(ProductionLineId(303).to_string(), "303");
    }

    #[test]
    fn quality_wire_names() {
        use std::str::FromStr;
        assert_eq!(serde_json::to_string(&Quality::NotOk).unwrap(), "\"NOT OK\"");
        assert_eq!(Quality::from_str("OK").unwrap(), Quality::Ok);
        assert!(Quality::from_str("meh").is_err());
        assert_eq!(serde_json::to_string(&InputMethod::Ocr).unwrap(), "\"OCR\"");
    }

    #[test]
    fn validated_operation_payload_shape() {
        let op = ValidatedOperation::validate(complete_draft()).unwrap();
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["operationDate"], "2024-05-02");
        assert_eq!(json["productionLineId"], 3);
        assert_eq!(json["inputMethod"], "MANUAL");
    }
}
