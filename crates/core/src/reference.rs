use serde::{Deserialize, Serialize};

use super::operation::{GroupId, ProductionLineId, ShiftId};

/// Reference data the data-entry form lets an operator pick from.
pub trait ReferenceEntry {
    fn name(&self) -> &str;
    fn is_active(&self) -> bool;
}

/// Entries still offered for new operations, in their original order.
pub fn active<T: ReferenceEntry>(entries: &[T]) -> Vec<&T> {
    entries.iter().filter(|e| e.is_active()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Option<GroupId>,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: Option<ShiftId>,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLine {
    pub id: Option<ProductionLineId>,
    pub name: String,
    pub is_active: bool,
}

macro_rules! reference_entry {
    ($ty:ident) => {
        impl $ty {
            pub fn new(name: &str) -> Self {
                $ty {
                    id: None,
                    name: name.to_string(),
                    is_active: true,
                }
            }
        }

        impl ReferenceEntry for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn is_active(&self) -> bool {
                self.is_active
            }
        }
    };
}

reference_entry!(Group);
reference_entry!(Shift);
reference_entry!(ProductionLine);
