//! Interactive `session` loop.
//!
//! The loop owns the only mutable state in the program: the current mood and
//! the [`SessionContext`] retry counter. Each `search` or `retry` runs one
//! curator pass with a context built from today's date.

use std::io::Write as _;

use anyhow::bail;
use chrono::Local;
use hidbook_core::{Mood, SelectionContext, SessionContext};
use hidbook_curator::Curator;
use hidbook_scraper::BookSource;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::{render_error, render_help, render_outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    Search,
    Retry,
    Mood(Mood),
    Help,
    Quit,
}

/// Parses one input line. An empty line means `search`.
///
/// # Errors
///
/// Returns an error for unknown commands and unknown moods.
pub(crate) fn parse_command(line: &str) -> anyhow::Result<SessionCommand> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));

    match command.to_ascii_lowercase().as_str() {
        "" | "search" => Ok(SessionCommand::Search),
        "retry" => Ok(SessionCommand::Retry),
        "mood" => {
            if rest.is_empty() {
                bail!("mood needs a name, e.g. `mood calm`");
            }
            Ok(SessionCommand::Mood(rest.parse()?))
        }
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        other => bail!("unknown command `{other}`; type `help`"),
    }
}

/// Applies `command` to the session state. Returns the context to run with,
/// or `None` when the command does not trigger a search.
pub(crate) fn apply_command(
    command: &SessionCommand,
    mood: &mut Mood,
    session: &mut SessionContext,
    today: chrono::NaiveDate,
) -> Option<SelectionContext> {
    match command {
        SessionCommand::Search => {
            session.new_search();
            Some(SelectionContext::new(today, *mood, session))
        }
        SessionCommand::Retry => {
            session.retry();
            Some(SelectionContext::new(today, *mood, session))
        }
        SessionCommand::Mood(next) => {
            *mood = *next;
            session.new_search();
            None
        }
        SessionCommand::Help | SessionCommand::Quit => None,
    }
}

/// Runs the loop until `quit` or end of input.
///
/// Search failures are printed as one line; the loop keeps going.
///
/// # Errors
///
/// Returns an error only if reading stdin fails.
pub(crate) async fn run_session<S: BookSource>(
    curator: &Curator<S>,
    initial_mood: Mood,
) -> anyhow::Result<()> {
    let mut mood = initial_mood;
    let mut session = SessionContext::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("[{}] `help` 로 명령을 볼 수 있습니다.", mood.label());
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match &command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{}", render_help()),
            SessionCommand::Mood(next) => println!("분위기: {}", next.label()),
            SessionCommand::Search | SessionCommand::Retry => {}
        }

        let today = Local::now().date_naive();
        let Some(ctx) = apply_command(&command, &mut mood, &mut session, today) else {
            continue;
        };

        tracing::debug!(seed_key = %ctx.seed_key(), "running search");
        match curator.recommend(&ctx).await {
            Ok(outcome) => println!("{}\n", render_outcome(&outcome)),
            Err(e) => println!("{}", render_error(&e)),
        }
    }

    Ok(())
}
