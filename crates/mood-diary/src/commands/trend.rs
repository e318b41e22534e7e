use mood_diary_core::MoodLog;

use crate::diary::Diary;

/// Bar cells on each side of the zero line
const HALF_WIDTH: usize = 10;

pub fn run(diary: &Diary, daily: bool) -> anyhow::Result<()> {
    let log = diary.load_moods()?;
    println!("{}", render_trend(&log, daily));
    Ok(())
}

pub fn run_reset(diary: &Diary) -> anyhow::Result<()> {
    diary.reset_moods()?;
    println!("Mood history cleared!");
    Ok(())
}

fn render_trend(log: &MoodLog, daily: bool) -> String {
    if log.is_empty() {
        return "No mood entries yet. Log a mood to start tracking!".to_string();
    }

    let rows: Vec<(String, f64)> = if daily {
        log.daily_average()
            .into_iter()
            .map(|(day, score)| (day.format("%Y-%m-%d").to_string(), score))
            .collect()
    } else {
        log.trend()
            .into_iter()
            .map(|s| (s.date.format("%Y-%m-%d %H:%M").to_string(), s.sentiment_score))
            .collect()
    };

    let mut lines = vec!["📊 Your Mood Trend".to_string()];
    for (when, score) in rows {
        lines.push(format!("{when:<16} {score:+.2} {}", bar(score)));
    }
    lines.join("\n")
}

/// Horizontal bar around a zero line: negatives grow left, positives right
fn bar(score: f64) -> String {
    let cells = ((score.abs().min(1.0)) * HALF_WIDTH as f64).round() as usize;
    let (left, right) = if score < 0.0 { (cells, 0) } else { (0, cells) };
    format!(
        "{}{}|{}",
        " ".repeat(HALF_WIDTH - left),
        "█".repeat(left),
        "█".repeat(right)
    )
}
