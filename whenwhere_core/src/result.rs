//! The extraction result handed back across the call boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

const EMPTY_OBJECT: &str = "{}";

/// Date/time range, title and location found in a piece of text.
///
/// Absent fields are omitted from the JSON encoding, so a result with nothing
/// extracted encodes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Start of the event in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// End of the event in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ExtractionResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
            title: None,
            location: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.title.is_none()
            && self.location.is_none()
    }

    #[must_use]
    pub const fn with_start(mut self, millis: i64) -> Self {
        self.start = Some(millis);
        self
    }

    #[must_use]
    pub const fn with_end(mut self, millis: i64) -> Self {
        self.end = Some(millis);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Start as a UTC instant, if present and representable.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start.and_then(DateTime::from_timestamp_millis)
    }

    /// End as a UTC instant, if present and representable.
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end.and_then(DateTime::from_timestamp_millis)
    }

    /// Compact JSON encoding. Falls back to `{}` if encoding fails.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            warn!("Failed to encode extraction result: {e}");
            EMPTY_OBJECT.to_string()
        })
    }

    /// Decode a result previously produced by [`ExtractionResult::to_json`].
    ///
    /// Unknown keys are ignored and `null` counts as absent.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_result_encodes_as_empty_object() {
        let result = ExtractionResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.to_json(), "{}");
        assert_eq!(ExtractionResult::default(), result);
    }

    #[test]
    fn absent_fields_are_omitted() {
        let json = ExtractionResult::empty()
            .with_start(1_700_000_000_000)
            .with_title("Lunch")
            .to_json();
        assert_eq!(json, r#"{"start":1700000000000,"title":"Lunch"}"#);
        assert!(!json.contains("null"));
    }

    #[test]
    fn full_result_keeps_field_order() {
        let json = ExtractionResult::empty()
            .with_start(1)
            .with_end(2)
            .with_title("t")
            .with_location("l")
            .to_json();
        assert_eq!(json, r#"{"start":1,"end":2,"title":"t","location":"l"}"#);
    }

    #[test]
    fn from_json_accepts_null_and_unknown_keys() {
        let result =
            ExtractionResult::from_json(r#"{"start":null,"location":"Central Park","extra":true}"#)
                .unwrap();
        assert_eq!(result.start, None);
        assert_eq!(result.location.as_deref(), Some("Central Park"));
        assert!(!result.is_empty());
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = ExtractionResult::from_json("{\"start\":").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = ExtractionResult::from_json(r#"{"start":"soon"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn instants_convert_when_representable() {
        let result = ExtractionResult::empty()
            .with_start(1_700_000_000_000)
            .with_end(i64::MAX);
        let start = result.start_time().unwrap();
        assert_eq!(start.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(result.end_time(), None);
        assert_eq!(ExtractionResult::empty().start_time(), None);
    }
}
