//! Post-analysis insight shown after an entry is saved

use mood_diary_core::{Classification, MoodLabel};
use rand::Rng;
use serde::Serialize;

use crate::selection::Picker;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// Negative tone or any overthinking keyword
    Heavy {
        keywords: Vec<String>,
        support: &'static str,
        prompt: &'static str,
    },
    GoodSpace,
    Neutral,
}

impl Insight {
    /// Uses the classification's own label, so the classifier's theme policy applies
    pub fn derive<R: Rng>(classification: &Classification, picker: &mut Picker<R>) -> Self {
        let label = classification.label;

        if label == MoodLabel::Negative || !classification.keywords.is_empty() {
            Insight::Heavy {
                keywords: classification.keywords.clone(),
                support: picker.supportive_message(),
                prompt: picker.reflection_prompt(),
            }
        } else if label == MoodLabel::Positive {
            Insight::GoodSpace
        } else {
            Insight::Neutral
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Insight::Heavy { .. } => {
                "💡 Gentle insight: it seems you're reflecting on something heavy or overthinking."
            }
            Insight::GoodSpace => "🌟 You're in a good space! Keep that momentum!",
            Insight::Neutral => "🌀 Neutral tone detected. Every feeling is valid.",
        }
    }

    /// Headline plus keyword, support and prompt lines
    pub fn render(&self) -> String {
        let mut lines = vec![self.headline().to_string()];
        if let Insight::Heavy {
            keywords,
            support,
            prompt,
        } = self
        {
            if !keywords.is_empty() {
                lines.push(format!("🧠 Keywords: {}", keywords.join(", ")));
            }
            lines.push(format!("💬 Support: {support}"));
            lines.push(format!("🪶 Prompt: {prompt}"));
        }
        lines.join("\n")
    }
}
