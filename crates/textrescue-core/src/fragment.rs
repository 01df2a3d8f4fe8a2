//! Text fragments ("treasures") and their analysis state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sentiment::SentimentReport;

/// Prefix applied to every analyzed fragment's `finalText`.
pub const ANALYZED_PREFIX: &str = "[Analyzed] ";

/// Which heuristic produced a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    /// Dialogue cue such as "John said".
    Character,
    /// Sentence opening with a transition marker.
    Plot,
}

impl FragmentKind {
    /// Prefix of fragment ids of this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            FragmentKind::Character => "char",
            FragmentKind::Plot => "plot",
        }
    }
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentKind::Character => write!(f, "character"),
            FragmentKind::Plot => write!(f, "plot"),
        }
    }
}

/// Analysis attached to a fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentiment: SentimentReport,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FragmentState {
    Unanalyzed,
    Analyzed {
        analysis: Analysis,
        final_text: String,
    },
}

/// A text excerpt extracted from a source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub id: String,
    pub kind: FragmentKind,
    pub text: String,
    pub state: FragmentState,
}

impl Fragment {
    pub fn new(id: impl Into<String>, kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            state: FragmentState::Unanalyzed,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self.state, FragmentState::Analyzed { .. })
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match &self.state {
            FragmentState::Analyzed { analysis, .. } => Some(analysis),
            FragmentState::Unanalyzed => None,
        }
    }

    pub fn sentiment(&self) -> Option<&SentimentReport> {
        self.analysis().map(|a| &a.sentiment)
    }

    pub fn final_text(&self) -> Option<&str> {
        match &self.state {
            FragmentState::Analyzed { final_text, .. } => Some(final_text),
            FragmentState::Unanalyzed => None,
        }
    }

    /// Attach a sentiment report and set `finalText` to the decorated text.
    pub fn attach_sentiment(&mut self, sentiment: SentimentReport) {
        self.state = FragmentState::Analyzed {
            analysis: Analysis { sentiment },
            final_text: format!("{}{}", ANALYZED_PREFIX, self.text),
        };
    }
}

/// Wire form: `analysis` and `finalText` are present only once analyzed.
#[derive(Serialize)]
struct FragmentRef<'a> {
    id: &'a str,
    kind: FragmentKind,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a Analysis>,
    #[serde(rename = "finalText", skip_serializing_if = "Option::is_none")]
    final_text: Option<&'a str>,
}

#[derive(Deserialize)]
struct FragmentRecord {
    id: String,
    kind: FragmentKind,
    text: String,
    #[serde(default)]
    analysis: Option<Analysis>,
    #[serde(default, rename = "finalText")]
    final_text: Option<String>,
}

impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FragmentRef {
            id: &self.id,
            kind: self.kind,
            text: &self.text,
            analysis: self.analysis(),
            final_text: self.final_text(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = FragmentRecord::deserialize(deserializer)?;
        let state = match (record.analysis, record.final_text) {
            (Some(analysis), Some(final_text)) => FragmentState::Analyzed {
                analysis,
                final_text,
            },
            (None, None) => FragmentState::Unanalyzed,
            _ => {
                return Err(serde::de::Error::custom(
                    "analysis and finalText must be present together",
                ))
            }
        };
        Ok(Fragment {
            id: record.id,
            kind: record.kind,
            text: record.text,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Tone;

    fn report() -> SentimentReport {
        SentimentReport {
            overall_tone: Tone::Neutral,
            emotional_intensity: 20.0,
            dominant_emotions: Vec::new(),
            mood_progression: Vec::new(),
            psychological_depth: 15.0,
        }
    }

    #[test]
    fn test_unanalyzed_has_no_analysis() {
        let frag = Fragment::new("char-1", FragmentKind::Character, "John said");
        assert!(!frag.is_analyzed());
        assert!(frag.analysis().is_none());
        assert!(frag.final_text().is_none());

        let json = serde_json::to_value(&frag).unwrap();
        assert_eq!(json["id"], "char-1");
        assert_eq!(json["kind"], "character");
        assert!(json.get("analysis").is_none());
        assert!(json.get("finalText").is_none());
    }

    #[test]
    fn test_attach_sentiment() {
        let mut frag = Fragment::new("plot-1", FragmentKind::Plot, "Then, night fell.");
        frag.attach_sentiment(report());
        assert!(frag.is_analyzed());
        assert_eq!(frag.final_text(), Some("[Analyzed] Then, night fell."));
        assert_eq!(frag.sentiment().map(|s| s.overall_tone), Some(Tone::Neutral));

        let json = serde_json::to_value(&frag).unwrap();
        assert_eq!(json["finalText"], "[Analyzed] Then, night fell.");
        assert_eq!(json["analysis"]["sentiment"]["overallTone"], "neutral");
    }

    #[test]
    fn test_deserialize_both_states() {
        let mut analyzed = Fragment::new("plot-2", FragmentKind::Plot, "Later, they left.");
        analyzed.attach_sentiment(report());
        let back: Fragment =
            serde_json::from_str(&serde_json::to_string(&analyzed).unwrap()).unwrap();
        assert_eq!(back, analyzed);

        let bare: Fragment =
            serde_json::from_str(r#"{"id": "char-9", "kind": "character", "text": "Ann asked"}"#)
                .unwrap();
        assert_eq!(bare.state, FragmentState::Unanalyzed);
    }

    #[test]
    fn test_half_analyzed_rejected() {
        let json =
            r#"{"id": "char-9", "kind": "character", "text": "Ann asked", "finalText": "x"}"#;
        assert!(serde_json::from_str::<Fragment>(json).is_err());
    }

    #[test]
    fn test_id_prefixes() {
        assert_eq!(FragmentKind::Character.id_prefix(), "char");
        assert_eq!(FragmentKind::Plot.id_prefix(), "plot");
    }
}
