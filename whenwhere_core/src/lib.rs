#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Date/time and location extraction entry point.
//!
//! The public contract is [`parse`]: text plus an optional base time in epoch
//! milliseconds in, a JSON object out. Extraction itself is delegated to the
//! [`ParsingStrategy`] chain held by an [`Extractor`]; the default chain has no
//! engine that produces results, so every call currently yields `{}`.

pub mod base_time;
pub mod error;
pub mod extractor;
pub mod result;
pub mod strategy;

pub use base_time::{BaseSource, BaseTime};
pub use error::{Error, Result};
pub use extractor::Extractor;
pub use result::ExtractionResult;
pub use strategy::{EmptyStrategy, ParseRequest, ParsingStrategy};

/// Extract a date/time range, title and location from `text`.
///
/// `base_millis` is the reference instant for relative expressions such as
/// "tomorrow"; the current clock is used when it is absent. The return value
/// is always a JSON object and the call never fails.
#[must_use]
pub fn parse(text: &str, base_millis: Option<i64>) -> String {
    Extractor::with_defaults().parse(text, base_millis)
}
