mod render;
mod session;
mod store;

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use hidbook_core::config::{parse_policy, parse_source};
use hidbook_core::{Mood, SelectionContext, SelectionPolicy, SessionContext, SourceKind};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hidbook")]
#[command(about = "Finds one quietly overlooked book for today's mood")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the recommendation
    Recommend {
        /// Mood slug (deep, calm, wide, rise) or its Korean label
        #[arg(long, default_value = "deep", value_parser = parse_mood)]
        mood: Mood,
        /// How many times this search has been retried; changes the pick
        #[arg(long, default_value_t = 0)]
        retry: u32,
        /// Date used in the selection seed (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Override `HIDBOOK_SOURCE`
        #[arg(long, value_parser = parse_source)]
        source: Option<SourceKind>,
        /// Override `HIDBOOK_SELECTION_POLICY`
        #[arg(long, value_parser = parse_policy)]
        policy: Option<SelectionPolicy>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive loop: search, retry, switch mood
    Session {
        #[arg(long, default_value = "deep", value_parser = parse_mood)]
        mood: Mood,
        /// Override `HIDBOOK_SOURCE`
        #[arg(long, value_parser = parse_source)]
        source: Option<SourceKind>,
    },
    /// List the available moods and their search keywords
    Moods,
}

fn parse_mood(s: &str) -> Result<Mood, hidbook_core::ConfigError> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Moods) {
        print!("{}", render::render_moods());
        return Ok(ExitCode::SUCCESS);
    }

    let config = hidbook_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Recommend {
            mood,
            retry,
            date,
            source,
            policy,
            json,
        } => {
            let curator = store::build_curator(&config, source, policy)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let session = SessionContext::with_retry_count(retry);
            let ctx = SelectionContext::new(date, mood, &session);

            match curator.recommend(&ctx).await {
                Ok(outcome) if json => println!("{}", render::render_outcome_json(&outcome)?),
                Ok(outcome) => println!("{}", render::render_outcome(&outcome)),
                Err(e) => {
                    eprintln!("{}", render::render_error(&e));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Session { mood, source } => {
            let curator = store::build_curator(&config, source, None)?;
            session::run_session(&curator, mood).await?;
        }
        Commands::Moods => {}
    }

    Ok(ExitCode::SUCCESS)
}
