//! Input loop that applies commands to a session.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::bin_support::commands::{parse_command, Command, HELP};
use crate::bin_support::render::{render_json, render_table};
use crate::config::OutputFormat;
use crate::domain::session::GameSession;
use crate::error::AppError;
use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the session for the lifetime of the front end and writes
/// renderings to `out`.
pub struct Runner<W: Write> {
    session: GameSession,
    output: OutputFormat,
    out: W,
}

impl<W: Write> Runner<W> {
    pub fn new(session: GameSession, output: OutputFormat, out: W) -> Self {
        Self {
            session,
            output,
            out,
        }
    }

    pub fn into_parts(self) -> (GameSession, W) {
        (self.session, self.out)
    }

    fn render(&mut self, format: OutputFormat) -> Result<(), AppError> {
        match format {
            OutputFormat::Table => render_table(&self.session, &mut self.out)?,
            OutputFormat::Json => render_json(&self.session, &mut self.out)?,
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow, AppError> {
        match command {
            Command::Set {
                round_no,
                team,
                field,
                raw,
            } => self.session.set_value(round_no, team, field, &raw)?,
            Command::Name { team, name } => self.session.set_team_name(team, name),
            Command::Show => self.render(self.output)?,
            Command::Json => self.render(OutputFormat::Json)?,
            Command::Reset { confirmed: false } => {
                return Err(AppError::bad_command(
                    ErrorCode::ConfirmationRequired,
                    "reset clears every round and both names; type 'reset yes' to confirm",
                ))
            }
            Command::Reset { confirmed: true } => self.session.reset(),
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Process `input` line by line until it ends or `quit` is read.
    ///
    /// Rejected and malformed commands, including lines that are not valid
    /// UTF-8, are reported to `errors` as `[CODE] message` and the loop
    /// carries on; I/O and serialization failures end the loop.
    pub fn run<R: BufRead, E: Write>(
        &mut self,
        mut input: R,
        errors: &mut E,
    ) -> Result<(), AppError> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let outcome = decode_line(&buf, line_no)
                .and_then(parse_command)
                .and_then(|cmd| match cmd {
                    Some(cmd) => self.execute(cmd),
                    None => Ok(Flow::Continue),
                });

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    info!(line = line_no, "quit requested");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    debug!(line = line_no, code = %e.code(), error = %e, "command not applied");
                    writeln!(errors, "[{}] {e}", e.code())?;
                }
                Err(e) => return Err(e),
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn decode_line(bytes: &[u8], line_no: usize) -> Result<&str, AppError> {
    std::str::from_utf8(bytes).map_err(|_| {
        AppError::bad_command(
            ErrorCode::InvalidEncoding,
            format!("line {line_no} is not valid UTF-8"),
        )
    })
}
