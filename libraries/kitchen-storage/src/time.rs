//! Timestamps are stored as Unix milliseconds

use chrono::{DateTime, Utc};
use kitchen_core::{KitchenError, Result};

/// Current time truncated to what the database can hold
pub(crate) fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap_or_else(Utc::now)
}

pub(crate) fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| KitchenError::storage(format!("Invalid timestamp: {millis}")))
}

pub(crate) fn from_optional_millis(millis: Option<i64>) -> Result<Option<DateTime<Utc>>> {
    millis.map(from_millis).transpose()
}
