//! Lexicon-based polarity estimation
//!
//! Each known word carries a valence in [-1, 1]. A negator shortly before a
//! word flips and halves it, an intensifier scales it, and the text's polarity
//! is the mean over all matched words.

use regex::Regex;
use std::sync::OnceLock;

use crate::classifier::PolarityScorer;

const VALENCE: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("happiness", 0.8),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("wonderful", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("excellent", 1.0),
    ("fantastic", 0.9),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("fun", 0.3),
    ("glad", 0.5),
    ("grateful", 0.6),
    ("thankful", 0.5),
    ("calm", 0.3),
    ("peaceful", 0.5),
    ("proud", 0.8),
    ("excited", 0.4),
    ("exciting", 0.5),
    ("hopeful", 0.5),
    ("relaxed", 0.4),
    ("relieved", 0.4),
    ("confident", 0.5),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("positive", 0.4),
    ("successful", 0.75),
    ("win", 0.8),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("smile", 0.3),
    ("laugh", 0.3),
    ("okay", 0.5),
    ("fine", 0.4),
    ("cheerful", 0.6),
    ("delighted", 0.8),
    ("kind", 0.6),
    ("strong", 0.4),
    ("safe", 0.5),
    ("productive", 0.5),
    ("blessed", 0.6),
    ("energized", 0.5),
    // negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("miserable", -0.9),
    ("depressed", -0.8),
    ("depressing", -0.7),
    ("hopeless", -0.8),
    ("worthless", -0.8),
    ("useless", -0.5),
    ("mess", -0.5),
    ("messed", -0.5),
    ("ruined", -0.7),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("hate", -0.8),
    ("hated", -0.8),
    ("angry", -0.5),
    ("upset", -0.5),
    ("anxious", -0.4),
    ("nervous", -0.3),
    ("worried", -0.4),
    ("worry", -0.4),
    ("scared", -0.5),
    ("afraid", -0.6),
    ("lonely", -0.6),
    ("tired", -0.4),
    ("exhausted", -0.6),
    ("stressed", -0.5),
    ("stress", -0.4),
    ("overwhelmed", -0.5),
    ("hurt", -0.6),
    ("pain", -0.6),
    ("painful", -0.7),
    ("cry", -0.4),
    ("crying", -0.5),
    ("worst", -1.0),
    ("worse", -0.5),
    ("stupid", -0.8),
    ("dumb", -0.4),
    ("annoying", -0.6),
    ("annoyed", -0.5),
    ("frustrated", -0.6),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("guilty", -0.5),
    ("ashamed", -0.6),
    ("embarrassed", -0.5),
    ("insecure", -0.5),
    ("weak", -0.4),
    ("broken", -0.6),
    ("lost", -0.3),
    ("empty", -0.4),
    ("boring", -0.6),
    ("bored", -0.4),
    ("sick", -0.7),
    ("panic", -0.6),
    ("fear", -0.5),
    ("loser", -0.7),
    ("wrong", -0.5),
    ("difficult", -0.5),
    ("hard", -0.3),
    ("regret", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("quite", 1.1),
    ("super", 1.4),
    ("totally", 1.5),
    ("absolutely", 1.5),
    ("incredibly", 1.5),
    ("extremely", 1.6),
];

const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "nor"];

/// Tokens a modifier stays active for before it lapses
const MODIFIER_REACH: usize = 3;

/// Multiplier applied to a negated valence
const NEGATION_FACTOR: f64 = -0.5;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z]+(?:'[a-z]+)*").expect("valid word pattern"))
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|&(_, v)| v)
}

/// Default polarity estimator backed by a fixed valence lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased words of `text`, with typographic apostrophes folded
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
        word_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut values = Vec::new();
        let mut negated = false;
        let mut boost = 1.0;
        let mut reach = 0usize;

        for word in Self::tokenize(text) {
            if is_negator(&word) {
                negated = true;
                reach = MODIFIER_REACH;
                continue;
            }
            if let Some(factor) = lookup(INTENSIFIERS, &word) {
                boost *= factor;
                reach = MODIFIER_REACH;
                continue;
            }

            if let Some(valence) = lookup(VALENCE, &word) {
                let mut value = valence * boost;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                values.push(value.clamp(-1.0, 1.0));
                reach = 0;
            } else {
                reach = reach.saturating_sub(1);
            }

            if reach == 0 {
                negated = false;
                boost = 1.0;
            }
        }

        if values.is_empty() {
            return 0.0;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
