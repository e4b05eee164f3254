//! Plain-text and JSON renderings of a session.

use std::io::Write;

use crate::domain::session::GameSession;
use crate::domain::state::Team;
use crate::domain::table_view::{leader_line, table_row, TeamCells};
use crate::error::AppError;

const TEAM_WIDTH: usize = 19;

fn team_cols(cells: &TeamCells) -> String {
    format!(
        "{:>3} {:>3} {:>5} {:>5}",
        cells.bid, cells.won, cells.points, cells.total
    )
}

fn truncate(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}

pub fn render_table<W: Write>(session: &GameSession, out: &mut W) -> std::io::Result<()> {
    let t1 = session.display_name(Team::One);
    let t2 = session.display_name(Team::Two);

    writeln!(out, "Spades Scorecard")?;
    writeln!(
        out,
        "Rd | {:<w$} | {:<w$} | Lead  | First",
        truncate(t1, TEAM_WIDTH),
        truncate(t2, TEAM_WIDTH),
        w = TEAM_WIDTH
    )?;
    writeln!(
        out,
        "   | {:<w$} | {:<w$} |       |",
        "Bid Won   Pts   Tot",
        "Bid Won   Pts   Tot",
        w = TEAM_WIDTH
    )?;

    for row in session.derived().iter().map(table_row) {
        writeln!(
            out,
            "{:>2} | {} | {} | {:>5} | {}",
            row.round_no,
            team_cols(&row.team1),
            team_cols(&row.team2),
            row.lead,
            row.bids_first
        )?;
    }

    let summary = session.summary();
    writeln!(out)?;
    writeln!(out, "Score Summary")?;
    writeln!(out, "{t1}: {}", summary.total(Team::One))?;
    writeln!(out, "{t2}: {}", summary.total(Team::Two))?;
    writeln!(out, "Difference: {}", summary.margin)?;
    writeln!(out, "{}", leader_line(session, &summary))?;
    Ok(())
}

pub fn render_json<W: Write>(session: &GameSession, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, &session.snapshot())?;
    writeln!(out)?;
    Ok(())
}
