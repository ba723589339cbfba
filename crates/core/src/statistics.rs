use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::operation::{Quality, ValidatedOperation};

/// Dashboard summary over a set of recorded operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatistics {
    pub total_operations: usize,
    #[serde(rename = "qualityOK")]
    pub quality_ok: usize,
    #[serde(rename = "qualityNotOK")]
    pub quality_not_ok: usize,
    /// Percentage of operations with `OK` quality, 0.0 when there are none.
    pub quality_rate: f64,
    pub avg_temperature: f64,
    pub avg_weight: f64,
    /// Distinct production lines that recorded at least one operation.
    pub active_lines: usize,
}

impl OperationStatistics {
    pub fn from_operations(ops: &[ValidatedOperation]) -> Self {
        if ops.is_empty() {
            return Self::default();
        }

        let quality_ok = ops.iter().filter(|op| op.quality == Quality::Ok).count();
        let n = ops.len() as f64;
        let avg_temperature = ops.iter().map(|op| op.temperature).sum::<f64>() / n;
        let avg_weight = ops.iter().map(|op| op.weight).sum::<f64>() / n;
        let active_lines = ops
            .iter()
            .map(|op| op.production_line_id)
            .collect::<HashSet<_>>()
            .len();

        OperationStatistics {
            total_operations: ops.len(),
            quality_ok,
            quality_not_ok: ops.len() - quality_ok,
            quality_rate: quality_ok as f64 / n * 100.0,
            avg_temperature,
            avg_weight,
            active_lines,
        }
    }

    /// Summary of the operations recorded on `date` only.
    pub fn for_date(ops: &[ValidatedOperation], date: NaiveDate) -> Self {
        let day: Vec<ValidatedOperation> = ops
            .iter()
            .filter(|op| op.operation_date == date)
            .cloned()
            .collect();
        Self::from_operations(&day)
    }
}
