//! Text cells for a scorecard table, as a presentation layer shows them.

use crate::domain::aggregate::{DerivedRound, GameSummary, Leader};
use crate::domain::session::GameSession;
use crate::domain::state::Team;

/// Placeholder for cells with nothing to show yet.
pub const EMPTY_CELL: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamCells {
    pub bid: String,
    pub won: String,
    pub points: String,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub round_no: u8,
    pub team1: TeamCells,
    pub team2: TeamCells,
    pub lead: String,
    /// Colour of the team opening the bidding.
    pub bids_first: &'static str,
}

fn input_cell(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn team_cells(row: &DerivedRound, team: Team) -> TeamCells {
    let points = match row.round.actual(team) {
        Some(_) => row.score(team).to_string(),
        None => EMPTY_CELL.to_string(),
    };
    let total = if row.is_round_scored {
        row.running_total(team).to_string()
    } else {
        EMPTY_CELL.to_string()
    };
    TeamCells {
        bid: input_cell(row.round.bid(team)),
        won: input_cell(row.round.actual(team)),
        points,
        total,
    }
}

/// Signed lead with an explicit `+` when team 1 is ahead.
pub fn format_lead(diff: i16) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

pub fn table_row(row: &DerivedRound) -> TableRow {
    TableRow {
        round_no: row.round.round_no,
        team1: team_cells(row, Team::One),
        team2: team_cells(row, Team::Two),
        lead: if row.is_round_scored {
            format_lead(row.current_diff)
        } else {
            EMPTY_CELL.to_string()
        },
        bids_first: row.bids_first.colour(),
    }
}

/// "`<name>` Leads" or "Tie Game".
pub fn leader_line(session: &GameSession, summary: &GameSummary) -> String {
    match summary.leader.team() {
        Some(team) => format!("{} Leads", session.display_name(team)),
        None => {
            debug_assert_eq!(summary.leader, Leader::Tie);
            "Tie Game".to_string()
        }
    }
}
