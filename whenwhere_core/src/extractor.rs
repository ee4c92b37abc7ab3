//! Ordered chain of [`ParsingStrategy`] implementations.

use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use crate::base_time::BaseTime;
use crate::result::ExtractionResult;
use crate::strategy::{EmptyStrategy, ParseRequest, ParsingStrategy};

/// Runs strategies in registration order and keeps the first non-empty result.
///
/// The chain is immutable once built, so a single extractor can be shared
/// across threads.
#[derive(Clone, Default)]
pub struct Extractor {
    strategies: Vec<Arc<dyn ParsingStrategy>>,
}

impl Extractor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Chain with the bundled strategies.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut extractor = Self::new();
        extractor.register(Arc::new(EmptyStrategy));
        extractor
    }

    pub fn register(&mut self, strategy: Arc<dyn ParsingStrategy>) {
        debug!("Registering parsing strategy: {}", strategy.name());
        self.strategies.push(strategy);
    }

    #[must_use]
    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name().to_string()).collect()
    }

    /// Extract a result from `text`, resolving `base_millis` against the clock.
    #[must_use]
    pub fn extract(&self, text: &str, base_millis: Option<i64>) -> ExtractionResult {
        let base = BaseTime::resolve(base_millis, Utc::now());
        self.extract_at(&ParseRequest::new(text, base))
    }

    /// Extract a result for an already resolved request.
    #[must_use]
    pub fn extract_at(&self, request: &ParseRequest<'_>) -> ExtractionResult {
        for strategy in &self.strategies {
            match strategy.try_parse(request) {
                Some(result) if !result.is_empty() => {
                    debug!("Strategy {} produced a result", strategy.name());
                    return result;
                }
                Some(_) => debug!("Strategy {} returned an empty result", strategy.name()),
                None => debug!("Strategy {} declined", strategy.name()),
            }
        }

        ExtractionResult::empty()
    }

    /// JSON-encoded form of [`Extractor::extract`].
    #[must_use]
    pub fn parse(&self, text: &str, base_millis: Option<i64>) -> String {
        self.extract(text, base_millis).to_json()
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        name: &'static str,
        result: Option<ExtractionResult>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(name: &'static str, result: Option<ExtractionResult>) -> Arc<Self> {
            Arc::new(Self {
                name,
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl ParsingStrategy for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn try_parse(&self, _request: &ParseRequest<'_>) -> Option<ExtractionResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[test]
    fn default_chain_yields_empty_object() {
        let extractor = Extractor::with_defaults();
        assert_eq!(extractor.strategy_names(), vec!["empty".to_string()]);
        assert_eq!(extractor.parse("meet tomorrow at 5pm", None), "{}");
    }

    #[test]
    fn empty_chain_yields_empty_object() {
        assert_eq!(Extractor::new().parse("anything", Some(0)), "{}");
    }

    #[test]
    fn first_non_empty_result_wins() {
        let declines = Fixed::new("declines", None);
        let blank = Fixed::new("blank", Some(ExtractionResult::empty()));
        let hit = Fixed::new("hit", Some(ExtractionResult::empty().with_title("Lunch")));
        let never = Fixed::new("never", Some(ExtractionResult::empty().with_title("Dinner")));

        let mut extractor = Extractor::new();
        extractor.register(declines.clone());
        extractor.register(blank.clone());
        extractor.register(hit.clone());
        extractor.register(never.clone());

        assert_eq!(extractor.parse("lunch", Some(0)), r#"{"title":"Lunch"}"#);
        assert_eq!(declines.calls.load(Ordering::SeqCst), 1);
        assert_eq!(blank.calls.load(Ordering::SeqCst), 1);
        assert_eq!(hit.calls.load(Ordering::SeqCst), 1);
        assert_eq!(never.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn strategies_see_the_resolved_base() {
        struct EchoBase;

        impl ParsingStrategy for EchoBase {
            fn name(&self) -> &str {
                "echo"
            }

            fn try_parse(&self, request: &ParseRequest<'_>) -> Option<ExtractionResult> {
                Some(ExtractionResult::empty().with_start(request.base.as_millis()))
            }
        }

        let mut extractor = Extractor::new();
        extractor.register(Arc::new(EchoBase));

        let result = extractor.extract("x", Some(1_700_000_000_000));
        assert_eq!(result.start, Some(1_700_000_000_000));
    }

    #[test]
    fn debug_lists_strategy_names() {
        let rendered = format!("{:?}", Extractor::with_defaults());
        assert!(rendered.contains("empty"));
    }
}
