//! Append-only mood samples for trend charts

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::types::{MoodLabel, MoodSample};

#[derive(Debug, Clone, Default)]
pub struct MoodLog {
    samples: Vec<MoodSample>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_samples<I: IntoIterator<Item = MoodSample>>(samples: I) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    pub fn record(&mut self, sample: MoodSample) {
        self.samples.push(sample);
    }

    /// Log a manually chosen mood using the label's canonical score
    pub fn record_label(&mut self, label: MoodLabel, text: Option<String>, at: DateTime<Utc>) {
        self.record(MoodSample::from_label(at, label, text));
    }

    /// Drop every sample
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Samples in recording order
    pub fn samples(&self) -> &[MoodSample] {
        &self.samples
    }

    /// Samples sorted by date; equal dates keep recording order
    pub fn trend(&self) -> Vec<&MoodSample> {
        let mut sorted: Vec<&MoodSample> = self.samples.iter().collect();
        sorted.sort_by_key(|s| s.date);
        sorted
    }

    /// Mean score per UTC calendar day, oldest day first
    pub fn daily_average(&self) -> Vec<(NaiveDate, f64)> {
        let mut days: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for sample in &self.samples {
            let day = days.entry(sample.date.date_naive()).or_insert((0.0, 0));
            day.0 += sample.sentiment_score;
            day.1 += 1;
        }

        days.into_iter()
            .map(|(day, (sum, count))| (day, sum / count as f64))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_trend_sorted_by_date() {
        let mut log = MoodLog::new();
        log.record(MoodSample::new(at(3, 9), 0.5));
        log.record(MoodSample::new(at(1, 9), -0.5));
        log.record(MoodSample::new(at(2, 9), 0.0));

        let scores: Vec<f64> = log.trend().iter().map(|s| s.sentiment_score).collect();
        assert_eq!(scores, vec![-0.5, 0.0, 0.5]);
        // recording order untouched
        assert_eq!(log.samples()[0].sentiment_score, 0.5);
    }

    #[test]
    fn test_daily_average() {
        let mut log = MoodLog::new();
        log.record_label(MoodLabel::Positive, None, at(1, 8));
        log.record_label(MoodLabel::Negative, None, at(1, 20));
        log.record_label(MoodLabel::Positive, None, at(2, 8));

        let days = log.daily_average();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].1, 0.0);
        assert_eq!(days[1].1, 1.0);
        assert!(days[0].0 < days[1].0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut log = MoodLog::new();
        log.record_label(MoodLabel::Neutral, Some("(manual selection)".into()), at(1, 8));
        log.record_label(MoodLabel::Neutral, Some("(manual selection)".into()), at(1, 8));
        assert_eq!(log.len(), 2);

        log.reset();
        assert!(log.is_empty());
        assert!(log.daily_average().is_empty());
    }
}
