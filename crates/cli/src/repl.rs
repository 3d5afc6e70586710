//! Interactive mode: one command per line, one filter transition per command.

use std::io::{BufRead, Write};

use thiserror::Error;

use prodcat_catalog::{CatalogSession, FilterAction};
use prodcat_core::{CategoryId, DomainError, UserId};

use crate::args::OutputFormat;
use crate::render;

pub const HELP: &str = "\
commands:
  user <id|all>      select a user (all clears the user filter)
  search <text>      filter by product name (everything after the first space, as typed)
  clear-search       clear the search text
  category <id>      toggle a category
  all-categories     clear the category selection
  reset              reset all filters
  show               print the catalog
  help               print this help
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Action(FilterAction),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse one input line. Blank lines parse to `None`.
///
/// The command word ends at the first whitespace character. Id arguments are
/// trimmed; the search text is kept exactly as typed after that separator.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, CommandError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    let (word, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim();

    let command = match word {
        "user" => match rest {
            "" => return Err(CommandError::MissingArgument("user")),
            "all" => ReplCommand::Action(FilterAction::SetUser(None)),
            id => ReplCommand::Action(FilterAction::SetUser(Some(id.parse::<UserId>()?))),
        },
        "search" => ReplCommand::Action(FilterAction::SetSearch(raw.to_string())),
        "clear-search" => ReplCommand::Action(FilterAction::ClearSearch),
        "category" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("category"));
            }
            ReplCommand::Action(FilterAction::ToggleCategory(rest.parse::<CategoryId>()?))
        }
        "all-categories" => ReplCommand::Action(FilterAction::ClearCategories),
        "reset" => ReplCommand::Action(FilterAction::ResetAll),
        "show" => ReplCommand::Show,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Run the interactive loop until `quit` or end of input.
///
/// Command errors are reported on `output` and the loop continues.
pub fn run<R: BufRead, W: Write>(
    session: &mut CatalogSession,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(output, "{}", render::render(&session.view(), format)?)?;

    for line in input.lines() {
        let command = match parse_line(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                report(session, output, &e)?;
                continue;
            }
        };

        match command {
            ReplCommand::Action(action) => match session.dispatch(action) {
                Ok(()) => writeln!(output, "{}", render::render(&session.view(), format)?)?,
                Err(e) => report(session, output, &CommandError::from(e))?,
            },
            ReplCommand::Show => writeln!(output, "{}", render::render(&session.view(), format)?)?,
            ReplCommand::Help => writeln!(output, "{HELP}")?,
            ReplCommand::Quit => break,
        }
    }

    Ok(())
}

fn report<W: Write>(session: &CatalogSession, output: &mut W, error: &CommandError) -> std::io::Result<()> {
    tracing::debug!(session_id = %session.id(), %error, "rejected command");
    writeln!(output, "error: {error}")
}
