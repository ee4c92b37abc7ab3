use std::io::Read;

use anyhow::Context;
use tracing::debug;
use whenwhere_core::Extractor;

/// Input parameters for the Parse command strategy.
#[derive(Debug, Clone)]
pub struct ParseInput {
    /// Text to analyze; `None` reads stdin
    pub text: Option<String>,
    /// Reference time in epoch milliseconds
    pub base_millis: Option<i64>,
    pub pretty: bool,
}

/// Strategy for running the extractor and printing its JSON result.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = match input.text {
            Some(text) => text,
            None => read_text(std::io::stdin().lock())?,
        };
        debug!(
            "Parsing {} chars, base={:?}",
            text.chars().count(),
            input.base_millis
        );

        let json = Extractor::with_defaults().parse(&text, input.base_millis);
        println!("{}", render(&json, input.pretty)?);
        Ok(())
    }
}

/// Read all of `reader` as text, replacing invalid UTF-8 with U+FFFD.
fn read_text(mut reader: impl Read) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("Failed to read text from stdin")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render(json: &str, pretty: bool) -> anyhow::Result<String> {
    if !pretty {
        return Ok(json.to_string());
    }
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
