//! Model reply parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use textrescue_core::SentimentReport;

static JSON_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("fence pattern is valid"));

/// JSON payload of a model reply.
///
/// Returns the body of the first ```` ```json ```` fenced block, or the whole
/// reply when there is no fence or the fence is empty.
pub fn extract_json_payload(reply: &str) -> &str {
    JSON_FENCE_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|body| !body.is_empty())
        .unwrap_or(reply)
}

/// Parse a payload into a report. Unknown enum values, missing fields and
/// wrong types are all errors.
pub fn parse_report(payload: &str) -> serde_json::Result<SentimentReport> {
    serde_json::from_str(payload)
}

/// [`extract_json_payload`] followed by [`parse_report`].
pub fn parse_reply(reply: &str) -> serde_json::Result<SentimentReport> {
    parse_report(extract_json_payload(reply))
}
