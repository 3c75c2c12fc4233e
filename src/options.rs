//! Converter options and configuration.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use crate::error::ConfigError;

/// Default name of the single date field.
pub const DEFAULT_SINGLE_DATE: &str = "date";
/// Default name of the range start field.
pub const DEFAULT_DATE_START: &str = "date_start";
/// Default name of the range end field.
pub const DEFAULT_DATE_END: &str = "date_end";

/// Per-field flags for a member of a date group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GroupEntry {
    /// The field carries a time component.
    #[cfg_attr(feature = "serde", serde(alias = "datetime"))]
    pub is_date_time: bool,
    /// A date-time value is already in storage format when it is saved.
    pub inverse: bool,
}

impl GroupEntry {
    /// A date-only entry.
    pub fn date() -> Self {
        GroupEntry::default()
    }

    /// A date-time entry.
    pub fn date_time() -> Self {
        GroupEntry {
            is_date_time: true,
            inverse: false,
        }
    }

    /// A date-time entry whose value is already in storage format on save.
    pub fn date_time_inverse() -> Self {
        GroupEntry {
            is_date_time: true,
            inverse: true,
        }
    }
}

/// Named group of date fields, kept in insertion order.
///
/// Order matters: conversion of a group stops at the first field that fails
/// to parse. Deserialized groups keep their document key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DateGroup {
    fields: IndexMap<String, GroupEntry>,
}

impl DateGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        DateGroup::default()
    }

    /// Adds a field, or replaces its flags in place if already present.
    pub fn insert(&mut self, name: impl Into<String>, entry: GroupEntry) {
        self.fields.insert(name.into(), entry);
    }

    /// Returns the flags configured for `name`.
    pub fn get(&self, name: &str) -> Option<&GroupEntry> {
        self.fields.get(name)
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupEntry)> {
        self.fields.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of fields in the group.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the group has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, GroupEntry)> for DateGroup {
    fn from_iter<I: IntoIterator<Item = (N, GroupEntry)>>(iter: I) -> Self {
        DateGroup {
            fields: iter
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }
}

/// Options for a [`DateFieldConverter`](crate::DateFieldConverter).
///
/// Field names left as `None` are unset; enabling a mode whose field names
/// are unset fails at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterOptions {
    /// Name of the single date field.
    pub single_date: Option<String>,
    /// Name of the range start field.
    pub date_start: Option<String>,
    /// Name of the range end field.
    pub date_end: Option<String>,
    /// Group of independently configured date fields.
    pub group_of_dates: DateGroup,
    pub parse_single_date: bool,
    pub parse_date_range: bool,
    pub parse_group_of_dates: bool,
    /// Single and range fields carry a time component.
    pub is_date_time: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            single_date: Some(DEFAULT_SINGLE_DATE.to_string()),
            date_start: Some(DEFAULT_DATE_START.to_string()),
            date_end: Some(DEFAULT_DATE_END.to_string()),
            group_of_dates: DateGroup::default(),
            parse_single_date: false,
            parse_date_range: false,
            parse_group_of_dates: false,
            is_date_time: false,
        }
    }
}

#[cfg(feature = "serde")]
impl ConverterOptions {
    /// Load options from a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}
