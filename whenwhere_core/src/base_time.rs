//! Reference instant used to resolve relative expressions like "tomorrow".

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{Error, Result};

/// Where a [`BaseTime`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    /// Supplied by the caller.
    Caller,
    /// Taken from the wall clock because the caller gave none (or an unusable one).
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTime {
    instant: DateTime<Utc>,
    source: BaseSource,
}

impl BaseTime {
    /// Strict conversion from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Result<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(|instant| Self {
                instant,
                source: BaseSource::Caller,
            })
            .ok_or(Error::BaseTimeOutOfRange(millis))
    }

    #[must_use]
    pub const fn from_clock(now: DateTime<Utc>) -> Self {
        Self {
            instant: now,
            source: BaseSource::Clock,
        }
    }

    /// Total conversion: absent or unrepresentable values fall back to `now`.
    #[must_use]
    pub fn resolve(base_millis: Option<i64>, now: DateTime<Utc>) -> Self {
        let Some(millis) = base_millis else {
            return Self::from_clock(now);
        };

        Self::from_millis(millis).unwrap_or_else(|e| {
            warn!("{e}, falling back to current time");
            Self::from_clock(now)
        })
    }

    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    #[must_use]
    pub fn as_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    #[must_use]
    pub const fn source(&self) -> BaseSource {
        self.source
    }
}
