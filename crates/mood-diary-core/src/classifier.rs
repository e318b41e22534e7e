//! Sentiment classification and overthinking-keyword detection

use crate::config::{Config, ThresholdPolicy};
use crate::lexicon::LexiconScorer;
use crate::types::{Classification, MoodLabel};

/// A text polarity estimator returning a valence in [-1, 1]
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
    keywords: Vec<String>,
    policy: ThresholdPolicy,
}

impl SentimentClassifier {
    pub fn new(config: &Config) -> Self {
        Self::with_scorer(config, Box::new(LexiconScorer::new()))
    }

    pub fn with_scorer(config: &Config, scorer: Box<dyn PolarityScorer>) -> Self {
        Self {
            scorer,
            keywords: config.keywords.clone(),
            policy: config.theme_policy,
        }
    }

    /// Score, theme-policy label and matched keywords for `text`
    pub fn classify(&self, text: &str) -> Classification {
        if text.trim().is_empty() {
            return Classification::neutral();
        }

        let score = self.score(text);
        Classification {
            score,
            label: self.policy.label(score),
            keywords: self.match_keywords(text),
        }
    }

    /// Polarity clamped to [-1, 1], unrounded
    pub fn score(&self, text: &str) -> f64 {
        let raw = self.scorer.polarity(text);
        if !raw.is_finite() {
            return 0.0;
        }
        raw.clamp(-1.0, 1.0)
    }

    /// Keywords found anywhere in the lowercased text, in table order
    pub fn match_keywords(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .cloned()
            .collect()
    }

    /// Label `score` under a different policy than the theme one
    pub fn label_with(&self, score: f64, policy: &ThresholdPolicy) -> MoodLabel {
        policy.label(score)
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("keywords", &self.keywords.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
