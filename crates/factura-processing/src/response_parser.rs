//! Tolerant JSON extraction from model replies.
//!
//! The remote model is asked for JSON but replies with free-form text: the
//! object may arrive bare, wrapped in prose, or inside a markdown code fence.
//! Strategies are tried in a fixed order and failure is an explicit `None`,
//! never an error.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

fn fenced_json_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fenced JSON regex is valid")
    })
}

fn brace_span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("brace span regex is valid"))
}

/// Extract the first JSON object from a free-form model reply.
///
/// When the reply contains a ```` ```json ```` fence, the first object inside
/// such a fence is taken (non-greedy, up to the first closing brace before
/// the fence end) and the unfenced fallback is not attempted. Otherwise the
/// span from the first `{` to the last `}` in the whole text is taken; a
/// reply containing two sibling objects therefore yields a single malformed
/// span and parses to `None`.
///
/// Returns `None` when no candidate span exists, the span is not valid JSON,
/// or the decoded value is not an object.
pub fn parse_model_reply(text: &str) -> Option<Map<String, Value>> {
    let candidate = if text.contains("```json") {
        fenced_json_re().captures(text)?.get(1)?.as_str()
    } else {
        brace_span_re().find(text)?.as_str()
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(fields)) => Some(fields),
        _ => None,
    }
}
