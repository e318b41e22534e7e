mod cli;
mod commands;
mod diary;

use clap::Parser;
use cli::{Cli, Commands};
use diary::Diary;
use mood_diary_storage::Paths;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let paths = match cli.data_dir {
        Some(dir) => Paths::with_data_dir(dir),
        None => Paths::new()?,
    };
    let mut diary = Diary::open(paths)?;

    match cli.command {
        Commands::Write { text } => commands::write::run(&diary, &text.join(" ")),
        Commands::Analyze { text, json } => commands::analyze::run(&diary, &text.join(" "), json),
        Commands::List { limit } => commands::list::run(&diary, limit),
        Commands::Delete { index } => commands::delete::run(&diary, index),
        Commands::Mood { mood, no_log } => commands::mood::run(&diary, mood, !no_log),
        Commands::Suggest { score } => commands::mood::run_suggest(&diary, score),
        Commands::Trend { daily } => commands::trend::run(&diary, daily),
        Commands::Reset => commands::trend::run_reset(&diary),
        Commands::Playlist { mood, next, link } => match link {
            Some(link) => commands::playlist::run_link(&link),
            None => commands::playlist::run(&mut diary, mood, next),
        },
        Commands::Version => commands::version::run(),
    }
}
