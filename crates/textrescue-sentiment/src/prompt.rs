//! Sentiment analysis prompt.
//!
//! The template carries a worked example, the text to analyze, and the exact
//! reply schema. Field names in the schema must stay in sync with
//! [`textrescue_core::SentimentReport`].

/// Expected reply for the worked example. The canned model returns it too.
pub const EXAMPLE_REPORT_JSON: &str = r#"{
  "overallTone": "negative",
  "emotionalIntensity": 85,
  "dominantEmotions": [
    {
      "emotion": "anger",
      "intensity": 80,
      "textEvidence": ["رائع، لقد أضعت مفاتيحي مرة أخرى"]
    },
    {
      "emotion": "sadness",
      "intensity": 70,
      "textEvidence": ["هذا أفضل يوم في حياتي"]
    }
  ],
  "moodProgression": [
    { "position": 50, "mood": "غضب ساخر", "intensity": 85 }
  ],
  "psychologicalDepth": 60
}"#;

/// Input of the worked example.
pub const EXAMPLE_TEXT: &str = "رائع، لقد أضعت مفاتيحي مرة أخرى. هذا أفضل يوم في حياتي.";

const ROLE: &str = "You are a literary analyst and an expert in narrative psychology. \
Your task is to analyze the emotions and psychological traits in the following text \
and deliver a detailed report as JSON that follows the structure below.";

const SCHEMA: &str = r#"{
  "overallTone": "'positive' | 'negative' | 'neutral' | 'mixed'",
  "emotionalIntensity": "number from 0 to 100: overall emotional intensity",
  "dominantEmotions": [
    {
      "emotion": "'joy' | 'sadness' | 'anger' | 'fear' | 'surprise' | 'disgust' | 'anticipation' | 'trust'",
      "intensity": "number from 0 to 100",
      "textEvidence": ["verbatim quote from the text supporting this emotion"]
    }
  ],
  "moodProgression": [
    {
      "position": "number from 0 to 100: where this point sits in the text",
      "mood": "short description of the mood at this point",
      "intensity": "number from 0 to 100"
    }
  ],
  "psychologicalDepth": "number from 0 to 100 rating the psychological depth of the text"
}"#;

const INSTRUCTIONS: &str = "\
1. **Depth:** Read past the surface of the words. Look for irony, mixed feelings and indirect hints.
2. **Evidence:** `textEvidence` entries must be short, exact quotes from the original text.
3. **Structure:** Your reply must be 100% valid JSON with no changes to field names or types.
4. **Direct answer:** Do not add any preamble, greeting or explanation. Start directly with the JSON object.";

/// Render the full prompt for `text`.
pub fn render(text: &str) -> String {
    let mut prompt = String::with_capacity(
        ROLE.len()
            + EXAMPLE_TEXT.len()
            + EXAMPLE_REPORT_JSON.len()
            + SCHEMA.len()
            + INSTRUCTIONS.len()
            + text.len()
            + 512,
    );

    prompt.push_str(ROLE);
    prompt.push_str("\n\n## Example:\n");
    prompt.push_str("To illustrate, if the text is: \"");
    prompt.push_str(EXAMPLE_TEXT);
    prompt.push_str("\", the ideal output is:\n```json\n");
    prompt.push_str(EXAMPLE_REPORT_JSON);
    prompt.push_str("\n```\n\n## Text to analyze:\n\"\"\"\n");
    prompt.push_str(text);
    prompt.push_str("\n\"\"\"\n\n## Required output structure (JSON Schema):\n");
    prompt.push_str("You must follow this structure exactly:\n```json\n");
    prompt.push_str(SCHEMA);
    prompt.push_str("\n```\n\n## Important instructions:\n");
    prompt.push_str(INSTRUCTIONS);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use textrescue_core::{Emotion, SentimentReport, Tone};

    #[test]
    fn test_render_embeds_text_once() {
        let text = "Suddenly, the lights went out.";
        let prompt = render(text);
        assert_eq!(prompt.matches(text).count(), 1);
        assert!(prompt.contains(&format!("\"\"\"\n{}\n\"\"\"", text)));
    }

    #[test]
    fn test_render_contains_example_and_schema() {
        let prompt = render("x");
        assert!(prompt.contains(EXAMPLE_TEXT));
        assert!(prompt.contains(EXAMPLE_REPORT_JSON));
        for field in [
            "overallTone",
            "emotionalIntensity",
            "dominantEmotions",
            "textEvidence",
            "moodProgression",
            "psychologicalDepth",
        ] {
            assert!(prompt.contains(field), "schema is missing {}", field);
        }
        for tone in Tone::ALL {
            assert!(prompt.contains(&format!("'{}'", tone)));
        }
        for emotion in Emotion::ALL {
            assert!(prompt.contains(&format!("'{}'", emotion)));
        }
        assert!(prompt.contains("0 to 100"));
    }

    #[test]
    fn test_example_is_a_valid_report() {
        let report: SentimentReport = serde_json::from_str(EXAMPLE_REPORT_JSON).unwrap();
        assert_eq!(report.overall_tone, Tone::Negative);
        assert!(report.range_violations().is_empty());
        for emotion in &report.dominant_emotions {
            for quote in &emotion.text_evidence {
                assert!(EXAMPLE_TEXT.contains(quote.as_str()));
            }
        }
    }
}
