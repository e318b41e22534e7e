use clap::{Parser, Subcommand};
use mood_diary_core::MoodLabel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mood-diary")]
#[command(version)]
#[command(about = "Journal your thoughts and keep an eye on your mood")]
pub struct Cli {
    /// Directory holding the diary files (defaults to $MOOD_DIARY_HOME or ~/.mood-diary)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a journal entry and save it
    Write {
        /// Entry text (words are joined with spaces)
        text: Vec<String>,
    },

    /// Preview the mood of some text without saving it
    Analyze {
        text: Vec<String>,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show saved entries, newest first
    List {
        /// Only show the newest N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an entry by its position in `list`
    Delete { index: usize },

    /// Get a quote and two suggestions for a mood, and log it
    Mood {
        mood: MoodLabel,

        /// Do not record the mood in the trend log
        #[arg(long)]
        no_log: bool,
    },

    /// Suggestions for a sentiment score in [-1, 1]
    Suggest {
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// Show the mood trend
    Trend {
        /// Average the samples per day
        #[arg(long)]
        daily: bool,
    },

    /// Clear the mood history
    Reset,

    /// Show a playlist for your mood
    Playlist {
        /// Mood to pick for (defaults to the mood of the newest entry)
        #[arg(long)]
        mood: Option<MoodLabel>,

        /// Move on to the next playlist
        #[arg(long)]
        next: bool,

        /// Convert your own Spotify link to an embeddable one
        #[arg(long)]
        link: Option<String>,
    },

    /// Print version information
    Version,
}
