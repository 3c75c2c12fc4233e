//! datefield - date field conversion for record lifecycles
//!
//! This crate rewrites the date and date-time fields of a record between a
//! storage format (`2024-03-01 10:00:00`) and a display format
//! (`01/03/2024 10:00:00`) when the record is persisted or loaded.

pub mod converter;
pub mod error;
pub mod event;
pub mod format;
pub mod options;
pub mod record;

pub use converter::{DateFieldConverter, FieldSpec, GroupField};
pub use error::ConfigError;
pub use event::{Direction, RecordEvent};
pub use format::DateFormat;
pub use options::{ConverterOptions, DateGroup, GroupEntry};
pub use record::DateRecord;

/// Convert a single display-format value to storage format.
///
/// Returns `None` if `value` is not in the display format.
pub fn to_storage(value: &str, is_date_time: bool) -> Option<String> {
    DateFormat::display(is_date_time).convert(value, DateFormat::storage(is_date_time))
}

/// Convert a single storage-format value to display format.
///
/// Returns `None` if `value` is not in the storage format.
pub fn to_display(value: &str, is_date_time: bool) -> Option<String> {
    DateFormat::storage(is_date_time).convert(value, DateFormat::display(is_date_time))
}
