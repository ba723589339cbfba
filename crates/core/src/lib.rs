pub mod operation;
pub mod reference;
pub mod settings;
pub mod statistics;

pub use operation::{
    GroupId, InputMethod, OperationError, ProductionLineId, Quality, ShiftId,
    UnvalidatedOperation, ValidatedOperation,
};
pub use reference::{active, Group, ProductionLine, ReferenceEntry, Shift};
pub use settings::{OcrSettings, OutputSettings, ScanMode, ScanSettings, Settings, SettingsError};
pub use statistics::OperationStatistics;
