//! Pluggable extraction strategies.

use crate::base_time::BaseTime;
use crate::result::ExtractionResult;

/// Borrowed input handed to each strategy.
#[derive(Debug, Clone, Copy)]
pub struct ParseRequest<'a> {
    pub text: &'a str,
    pub base: BaseTime,
}

impl<'a> ParseRequest<'a> {
    #[must_use]
    pub const fn new(text: &'a str, base: BaseTime) -> Self {
        Self { text, base }
    }
}

/// A named engine that may recognise a date/time, title or location in text.
///
/// Returning `None` declines the request so the next strategy in the
/// [`Extractor`](crate::Extractor) chain gets a turn.
pub trait ParsingStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn try_parse(&self, request: &ParseRequest<'_>) -> Option<ExtractionResult>;
}

/// Strategy that never recognises anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStrategy;

impl ParsingStrategy for EmptyStrategy {
    fn name(&self) -> &str {
        "empty"
    }

    fn try_parse(&self, _request: &ParseRequest<'_>) -> Option<ExtractionResult> {
        None
    }
}
