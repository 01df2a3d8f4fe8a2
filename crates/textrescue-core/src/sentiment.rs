//! Sentiment report returned by the annotator.
//!
//! Field names on the wire are camelCase and must match the prompt schema
//! exactly; enum values are lowercase.

use serde::{Deserialize, Serialize};

/// Lower bound of every score, position and intensity.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of every score, position and intensity.
pub const SCORE_MAX: f64 = 100.0;

/// Coarse sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Positive, Tone::Negative, Tone::Neutral, Tone::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
            Tone::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eight emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Anticipation,
    Trust,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Anticipation,
        Emotion::Trust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Anticipation => "anticipation",
            Emotion::Trust => "trust",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An emotion found in the text, with supporting quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantEmotion {
    pub emotion: Emotion,
    /// 0 to 100.
    pub intensity: f64,
    /// Verbatim quotes from the analyzed text.
    #[serde(rename = "textEvidence")]
    pub text_evidence: Vec<String>,
}

/// Mood sampled at a relative position in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPoint {
    /// Relative offset into the text, 0 to 100.
    pub position: f64,
    pub mood: String,
    /// 0 to 100.
    pub intensity: f64,
}

/// Structured sentiment and psychological profile of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    #[serde(rename = "overallTone")]
    pub overall_tone: Tone,
    #[serde(rename = "emotionalIntensity")]
    pub emotional_intensity: f64,
    #[serde(rename = "dominantEmotions")]
    pub dominant_emotions: Vec<DominantEmotion>,
    #[serde(rename = "moodProgression")]
    pub mood_progression: Vec<MoodPoint>,
    #[serde(rename = "psychologicalDepth")]
    pub psychological_depth: f64,
}

impl SentimentReport {
    /// JSON paths of every numeric field outside `[SCORE_MIN, SCORE_MAX]`.
    ///
    /// NaN counts as out of range. Empty when the report is well-formed.
    pub fn range_violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        check(&mut out, "emotionalIntensity".into(), self.emotional_intensity);
        check(&mut out, "psychologicalDepth".into(), self.psychological_depth);
        for (i, e) in self.dominant_emotions.iter().enumerate() {
            check(&mut out, format!("dominantEmotions[{}].intensity", i), e.intensity);
        }
        for (i, p) in self.mood_progression.iter().enumerate() {
            check(&mut out, format!("moodProgression[{}].position", i), p.position);
            check(&mut out, format!("moodProgression[{}].intensity", i), p.intensity);
        }
        out
    }
}

fn check(out: &mut Vec<String>, path: String, value: f64) {
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        out.push(path);
    }
}
