//! Error types for converter configuration.

use thiserror::Error;

/// Errors that can occur when building a converter from its options.
///
/// Parse failures during conversion are never reported through this type;
/// they are absorbed by the conversion itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the \"date_start\" and \"date_end\" fields must be specified when date range parsing is enabled")]
    MissingRangeFields,

    #[error("the single date field must be specified when single date parsing is enabled")]
    MissingSingleField,

    #[error("the group of dates must be specified when group parsing is enabled")]
    EmptyGroup,

    #[error("invalid converter options: {0}")]
    Deserialize(String),
}
