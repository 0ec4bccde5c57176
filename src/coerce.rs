//! Conversions from raw CSV strings to column types.

use chrono::{DateTime, NaiveDateTime};
use clap::ValueEnum;
use thiserror::Error;

use crate::reader::Record;

pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    #[error("missing column `{0}`")]
    MissingColumn(String),

    #[error("column `{column}`: {value:?} is not a valid {expected}")]
    InvalidValue {
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("epoch millisecond value {0} is out of range")]
    TimestampOutOfRange(i64),
}

impl CoerceError {
    fn invalid(column: &str, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            column: column.to_owned(),
            value: value.to_owned(),
            expected,
        }
    }
}

pub fn required<'a>(record: &'a Record, column: &str) -> Result<&'a str, CoerceError> {
    record
        .get(column)
        .ok_or_else(|| CoerceError::MissingColumn(column.to_owned()))
}

pub fn text(record: &Record, column: &str) -> Result<String, CoerceError> {
    required(record, column).map(str::to_owned)
}

/// Empty cells and absent columns both map to `None`.
pub fn optional_text(record: &Record, column: &str) -> Option<String> {
    record
        .get(column)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

pub fn integer(record: &Record, column: &str) -> Result<i32, CoerceError> {
    let value = required(record, column)?;
    value
        .parse()
        .map_err(|_| CoerceError::invalid(column, value, "integer"))
}

pub fn float(record: &Record, column: &str) -> Result<f64, CoerceError> {
    let value = required(record, column)?;
    value
        .parse()
        .map_err(|_| CoerceError::invalid(column, value, "number"))
}

pub fn epoch_millis_to_timestamp(millis: i64) -> Result<NaiveDateTime, CoerceError> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or(CoerceError::TimestampOutOfRange(millis))
}

pub fn timestamp_to_epoch_millis(timestamp: NaiveDateTime) -> i64 {
    timestamp.and_utc().timestamp_millis()
}

pub fn timestamp(record: &Record, column: &str) -> Result<NaiveDateTime, CoerceError> {
    let value = required(record, column)?;
    let millis = value
        .parse::<i64>()
        .map_err(|_| CoerceError::invalid(column, value, "epoch millisecond timestamp"))?;

    epoch_millis_to_timestamp(millis)
}

/// How a file's `createdAt`/`updatedAt` columns are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TimestampPolicy {
    /// Both columns must be present in the header.
    #[default]
    Strict,
    /// Absent columns are left unconverted.
    Lenient,
}

impl TimestampPolicy {
    pub fn resolve(self, headers: &[String]) -> Result<TimestampColumns, CoerceError> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        let created_at = position(CREATED_AT);
        let updated_at = position(UPDATED_AT);

        if self == Self::Strict {
            if created_at.is_none() {
                return Err(CoerceError::MissingColumn(CREATED_AT.to_owned()));
            }
            if updated_at.is_none() {
                return Err(CoerceError::MissingColumn(UPDATED_AT.to_owned()));
            }
        }

        Ok(TimestampColumns {
            created_at: created_at.is_some(),
            updated_at: updated_at.is_some(),
        })
    }
}

/// Timestamp columns found in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampColumns {
    created_at: bool,
    updated_at: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl TimestampColumns {
    pub fn extract(&self, record: &Record) -> Result<Timestamps, CoerceError> {
        let created_at = if self.created_at {
            Some(timestamp(record, CREATED_AT)?)
        } else {
            None
        };
        let updated_at = if self.updated_at {
            Some(timestamp(record, UPDATED_AT)?)
        } else {
            None
        };

        Ok(Timestamps {
            created_at,
            updated_at,
        })
    }
}
