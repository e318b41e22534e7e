use mood_diary_core::{Config, EntryStore, MoodLabel, SentimentClassifier, ThresholdPolicy};

#[test]
fn test_heavy_entry_end_to_end() {
    let classifier = SentimentClassifier::new(&Config::default());
    let mut store = EntryStore::new();
    let text = "I always mess things up and feel hopeless";

    let c = classifier.classify(text);
    assert!(c.score < -0.3, "expected strongly negative score: {}", c.score);
    assert_eq!(c.label, MoodLabel::Negative);
    for kw in ["always", "mess", "hopeless"] {
        assert!(c.keywords.contains(&kw.to_string()), "missing {kw}");
    }

    assert!(store.append_classified(text, &c));
    assert!(!store.append_classified(text, &c));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_positive_entry_end_to_end() {
    let classifier = SentimentClassifier::default();
    let mut store = EntryStore::new();
    let text = "Had a wonderful walk, feeling really happy and grateful";

    let c = classifier.classify(text);
    assert_eq!(c.label, MoodLabel::Positive);
    assert!(c.keywords.is_empty(), "unexpected keywords: {:?}", c.keywords);
    assert!(store.append_classified(text, &c));
    assert_eq!(store.all()[0].sentiment_score, c.score);
}

#[test]
fn test_theme_and_category_disagree_in_the_gap() {
    let config = Config::default();
    let classifier = SentimentClassifier::with_scorer(&config, Box::new(|_: &str| 0.35));

    let c = classifier.classify("somewhat upbeat");
    assert_eq!(c.label, MoodLabel::Positive);
    assert_eq!(
        classifier.label_with(c.score, &ThresholdPolicy::CATEGORY),
        MoodLabel::Neutral
    );
}

#[test]
fn test_delete_newest_after_several_appends() {
    let classifier = SentimentClassifier::default();
    let mut store = EntryStore::new();
    for text in ["first", "second", "third"] {
        let c = classifier.classify(text);
        store.append_classified(text, &c);
    }

    store.delete_at(0);
    store.delete_at(99);

    let remaining: Vec<_> = store.all().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(remaining, vec!["first", "second"]);
}
