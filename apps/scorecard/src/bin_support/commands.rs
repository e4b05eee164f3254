//! Line commands understood by the terminal front end.

use crate::domain::state::{Field, Team};
use crate::error::AppError;
use crate::errors::error_code::ErrorCode;

pub const HELP: &str = "\
commands:
  bid <round> <team> <n>      record a bid (team: 1, 2, maroon, gold)
  won <round> <team> <n>      record tricks won
  clear bid|won <round> <team>
  name <team> [text]          set a team name (blank resets to the default label)
  show                        print the scorecard
  json                        print the scorecard as JSON
  reset yes                   clear every round and both names
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set or clear (`raw` empty) one field.
    Set {
        round_no: u8,
        team: Team,
        field: Field,
        raw: String,
    },
    Name {
        team: Team,
        name: String,
    },
    Show,
    Json,
    Reset {
        confirmed: bool,
    },
    Help,
    Quit,
}

fn missing(what: &str, usage: &str) -> AppError {
    AppError::bad_command(
        ErrorCode::MissingArgument,
        format!("missing {what}; usage: {usage}"),
    )
}

pub fn parse_team(s: &str) -> Result<Team, AppError> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "maroon" | "team1" => Ok(Team::One),
        "2" | "gold" | "team2" => Ok(Team::Two),
        other => Err(AppError::bad_command(
            ErrorCode::InvalidTeam,
            format!("unknown team '{other}'; use 1, 2, maroon or gold"),
        )),
    }
}

fn parse_round(s: &str) -> Result<u8, AppError> {
    s.parse::<u8>().map_err(|_| {
        AppError::bad_command(
            ErrorCode::InvalidRound,
            format!("'{s}' is not a round number"),
        )
    })
}

fn parse_field(s: &str) -> Result<Field, AppError> {
    match s.to_ascii_lowercase().as_str() {
        "bid" => Ok(Field::Bid),
        "won" | "tricks" | "actual" => Ok(Field::Actual),
        other => Err(AppError::bad_command(
            ErrorCode::UnknownCommand,
            format!("unknown field '{other}'; use bid or won"),
        )),
    }
}

/// Parse one input line. Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, AppError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let verb = verb.to_ascii_lowercase();

    let command = match verb.as_str() {
        "bid" | "won" | "tricks" => {
            let usage = "bid|won <round> <team> <n>";
            let field = parse_field(&verb)?;
            let round_no = parse_round(words.next().ok_or_else(|| missing("round", usage))?)?;
            let team = parse_team(words.next().ok_or_else(|| missing("team", usage))?)?;
            let raw = words.next().ok_or_else(|| missing("value", usage))?;
            Command::Set {
                round_no,
                team,
                field,
                raw: raw.to_string(),
            }
        }
        "clear" => {
            let usage = "clear bid|won <round> <team>";
            let field = parse_field(words.next().ok_or_else(|| missing("field", usage))?)?;
            let round_no = parse_round(words.next().ok_or_else(|| missing("round", usage))?)?;
            let team = parse_team(words.next().ok_or_else(|| missing("team", usage))?)?;
            Command::Set {
                round_no,
                team,
                field,
                raw: String::new(),
            }
        }
        "name" => {
            // Inner spacing of the name is kept as typed.
            let rest = line[verb.len()..].trim_start();
            let (team_word, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if team_word.is_empty() {
                return Err(missing("team", "name <team> [text]"));
            }
            Command::Name {
                team: parse_team(team_word)?,
                name: name.trim().to_string(),
            }
        }
        "show" => Command::Show,
        "json" => Command::Json,
        "reset" => Command::Reset {
            confirmed: matches!(words.next(), Some(w) if w.eq_ignore_ascii_case("yes")),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(AppError::bad_command(
                ErrorCode::UnknownCommand,
                format!("unknown command '{other}'; try 'help'"),
            ))
        }
    };
    Ok(Some(command))
}
