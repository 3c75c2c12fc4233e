//! Conversion of configured record fields between storage and display formats.

use log::{debug, trace};

use crate::error::ConfigError;
use crate::format::DateFormat;
use crate::options::ConverterOptions;
use crate::record::DateRecord;

/// A member of a date group, with its per-field flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupField {
    pub name: String,
    pub is_date_time: bool,
    pub inverse: bool,
}

impl GroupField {
    /// Format the value is expected in when the record is saved.
    fn save_source(&self) -> DateFormat {
        if !self.is_date_time {
            DateFormat::DisplayDate
        } else if self.inverse {
            DateFormat::StorageDateTime
        } else {
            DateFormat::DisplayDateTime
        }
    }
}

/// One enabled conversion mode, compiled from [`ConverterOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// A single date or date-time field.
    Single { field: String, is_date_time: bool },
    /// A start/end pair, converted together.
    Range {
        start: String,
        end: String,
        is_date_time: bool,
    },
    /// Fields with their own flags, converted in order.
    Group(Vec<GroupField>),
}

impl FieldSpec {
    /// Short name of the mode, for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::Single { .. } => "single",
            FieldSpec::Range { .. } => "range",
            FieldSpec::Group(_) => "group",
        }
    }

    fn to_storage<R: DateRecord + ?Sized>(&self, record: &mut R) {
        match self {
            FieldSpec::Single {
                field,
                is_date_time,
            } => convert_single(
                record,
                field,
                DateFormat::display(*is_date_time),
                DateFormat::storage(*is_date_time),
            ),
            FieldSpec::Range {
                start,
                end,
                is_date_time,
            } => convert_range(
                record,
                start,
                end,
                DateFormat::display(*is_date_time),
                DateFormat::storage(*is_date_time),
            ),
            FieldSpec::Group(fields) => convert_group(record, fields, |field| {
                (field.save_source(), DateFormat::storage(field.is_date_time))
            }),
        }
    }

    fn to_display<R: DateRecord + ?Sized>(&self, record: &mut R) {
        match self {
            // Loaded single fields always render with a time component.
            FieldSpec::Single {
                field,
                is_date_time,
            } => convert_single(
                record,
                field,
                DateFormat::storage(*is_date_time),
                DateFormat::DisplayDateTime,
            ),
            FieldSpec::Range {
                start,
                end,
                is_date_time,
            } => convert_range(
                record,
                start,
                end,
                DateFormat::storage(*is_date_time),
                DateFormat::display(*is_date_time),
            ),
            FieldSpec::Group(fields) => convert_group(record, fields, |field| {
                (
                    DateFormat::storage(field.is_date_time),
                    DateFormat::display(field.is_date_time),
                )
            }),
        }
    }
}

/// Rewrites a single field. A value that fails to parse is written back as
/// null.
fn convert_single<R: DateRecord + ?Sized>(
    record: &mut R,
    field: &str,
    source: DateFormat,
    target: DateFormat,
) {
    let converted = record
        .get(field)
        .and_then(|value| source.convert(value, target));
    record.set(field, converted);
}

/// Rewrites both range fields, or neither if either fails to parse.
fn convert_range<R: DateRecord + ?Sized>(
    record: &mut R,
    start: &str,
    end: &str,
    source: DateFormat,
    target: DateFormat,
) {
    let Some(start_value) = record
        .get(start)
        .and_then(|value| source.convert(value, target))
    else {
        return;
    };
    let Some(end_value) = record
        .get(end)
        .and_then(|value| source.convert(value, target))
    else {
        return;
    };
    record.set(start, Some(start_value));
    record.set(end, Some(end_value));
}

/// Rewrites present group fields in order, stopping at the first value
/// that fails to parse. Fields already converted stay converted.
fn convert_group<R, F>(record: &mut R, fields: &[GroupField], formats: F)
where
    R: DateRecord + ?Sized,
    F: Fn(&GroupField) -> (DateFormat, DateFormat),
{
    for field in fields {
        let (source, target) = formats(field);
        let converted = match record.get(&field.name) {
            Some(value) if !value.is_empty() => source.convert(value, target),
            _ => continue,
        };
        match converted {
            Some(value) => record.set(&field.name, Some(value)),
            None => return,
        }
    }
}

/// Converts the date fields of a record when it is persisted or loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFieldConverter {
    specs: Vec<FieldSpec>,
}

impl DateFieldConverter {
    /// Build a converter, validating that every enabled mode has its fields.
    ///
    /// Modes are applied in a fixed order: range, single, group.
    pub fn new(options: ConverterOptions) -> Result<Self, ConfigError> {
        let mut specs = Vec::new();

        if options.parse_date_range {
            match (named(options.date_start), named(options.date_end)) {
                (Some(start), Some(end)) => specs.push(FieldSpec::Range {
                    start,
                    end,
                    is_date_time: options.is_date_time,
                }),
                _ => return Err(ConfigError::MissingRangeFields),
            }
        }

        if options.parse_single_date {
            let field = named(options.single_date).ok_or(ConfigError::MissingSingleField)?;
            specs.push(FieldSpec::Single {
                field,
                is_date_time: options.is_date_time,
            });
        }

        if options.parse_group_of_dates {
            if options.group_of_dates.is_empty() {
                return Err(ConfigError::EmptyGroup);
            }
            let fields = options
                .group_of_dates
                .iter()
                .map(|(name, entry)| GroupField {
                    name: name.to_string(),
                    is_date_time: entry.is_date_time,
                    inverse: entry.inverse,
                })
                .collect();
            specs.push(FieldSpec::Group(fields));
        }

        debug!(
            "date field converter built with modes [{}]",
            specs.iter().map(FieldSpec::kind).collect::<Vec<_>>().join(", ")
        );

        Ok(DateFieldConverter { specs })
    }

    /// The enabled modes, in application order.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Rewrite the configured fields from display to storage format.
    ///
    /// Called before a record is inserted or updated.
    pub fn to_storage_format<R: DateRecord + ?Sized>(&self, record: &mut R) {
        for spec in &self.specs {
            trace!("converting {} date fields to storage format", spec.kind());
            spec.to_storage(record);
        }
    }

    /// Rewrite the configured fields from storage to display format.
    ///
    /// Called after a record is loaded.
    pub fn to_display_format<R: DateRecord + ?Sized>(&self, record: &mut R) {
        for spec in &self.specs {
            trace!("converting {} date fields to display format", spec.kind());
            spec.to_display(record);
        }
    }
}

fn named(name: Option<String>) -> Option<String> {
    name.filter(|name| !name.is_empty())
}
