//! Random picks from the content tables

use mood_diary_core::{MoodLabel, ThresholdPolicy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog;

/// Suggestions handed out per pick
pub const SUGGESTION_COUNT: usize = 2;

/// Draws quotes, suggestions, messages and prompts
///
/// Every call is an independent draw, so back-to-back calls may repeat items.
#[derive(Debug, Clone)]
pub struct Picker<R = StdRng> {
    rng: R,
}

impl Picker<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Picker<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Picker<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn one(&mut self, items: &'static [&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// One random quote for the mood
    pub fn quote(&mut self, label: MoodLabel) -> &'static str {
        self.one(catalog::quotes(label))
    }

    /// Two distinct suggestions, sampled without replacement
    pub fn suggestions(&mut self, label: MoodLabel) -> Vec<&'static str> {
        catalog::suggestions(label)
            .choose_multiple(&mut self.rng, SUGGESTION_COUNT)
            .copied()
            .collect()
    }

    /// Suggestions for a raw score, categorised with `policy`
    pub fn suggest_for_score(
        &mut self,
        score: f64,
        policy: &ThresholdPolicy,
    ) -> (Vec<&'static str>, MoodLabel) {
        let label = policy.label(score);
        (self.suggestions(label), label)
    }

    pub fn supportive_message(&mut self) -> &'static str {
        self.one(catalog::SUPPORTIVE_MESSAGES)
    }

    pub fn reflection_prompt(&mut self) -> &'static str {
        self.one(catalog::REFLECTION_PROMPTS)
    }
}
