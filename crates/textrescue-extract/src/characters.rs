//! Dialogue cue detection: a capitalized name followed by a speech verb.

use once_cell::sync::Lazy;
use regex::Regex;

/// Verbs that mark the preceding capitalized word as a speaker.
pub const SPEECH_VERBS: &[&str] = &["said", "replied", "asked", "shouted", "whispered"];

static DIALOGUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+)\s+(said|replied|asked|shouted|whispered)")
        .expect("dialogue cue pattern is valid")
});

/// Full matched spans ("John said"), left to right, non-overlapping.
pub fn find_dialogue_cues(text: &str) -> Vec<&str> {
    DIALOGUE_RE.find_iter(text).map(|m| m.as_str()).collect()
}
