//! Derived scorecard view: per-round scores, running totals and the summary.
//!
//! Nothing here is stored. Every read recomputes from the round sequence,
//! which is at most eleven rows.

use serde::{Deserialize, Serialize};

use crate::domain::rules::bids_first;
use crate::domain::scoring::round_score;
use crate::domain::state::{Round, Team};

/// One scorecard row with everything computed from the rounds up to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRound {
    #[serde(flatten)]
    pub round: Round,
    pub team1_score: i16,
    pub team2_score: i16,
    pub team1_running_total: i16,
    pub team2_running_total: i16,
    /// Either team has entered tricks for this round.
    pub is_round_scored: bool,
    /// Team 1 total minus team 2 total through this round.
    pub current_diff: i16,
    pub bids_first: Team,
}

impl DerivedRound {
    pub fn score(&self, team: Team) -> i16 {
        match team {
            Team::One => self.team1_score,
            Team::Two => self.team2_score,
        }
    }

    pub fn running_total(&self, team: Team) -> i16 {
        match team {
            Team::One => self.team1_running_total,
            Team::Two => self.team2_running_total,
        }
    }
}

/// Derive every row in one ascending pass.
///
/// Totals are partial sums in round order; a team only accumulates rounds
/// where its tricks are entered, so the differential can reflect a round
/// where one team has been recorded and the other not yet.
pub fn derive_all(rounds: &[Round]) -> Vec<DerivedRound> {
    let mut team1_total: i16 = 0;
    let mut team2_total: i16 = 0;

    rounds
        .iter()
        .map(|r| {
            let team1_score = round_score(r.team1_bid, r.team1_actual);
            let team2_score = round_score(r.team2_bid, r.team2_actual);

            if r.team1_actual.is_some() {
                team1_total += team1_score;
            }
            if r.team2_actual.is_some() {
                team2_total += team2_score;
            }

            DerivedRound {
                round: *r,
                team1_score,
                team2_score,
                team1_running_total: team1_total,
                team2_running_total: team2_total,
                is_round_scored: r.team1_actual.is_some() || r.team2_actual.is_some(),
                current_diff: team1_total - team2_total,
                bids_first: bids_first(r.round_no),
            }
        })
        .collect()
}

/// Who is ahead at the end of the derived sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leader {
    Team1,
    Team2,
    Tie,
}

impl Leader {
    pub fn team(self) -> Option<Team> {
        match self {
            Leader::Team1 => Some(Team::One),
            Leader::Team2 => Some(Team::Two),
            Leader::Tie => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub team1_total: i16,
    pub team2_total: i16,
    /// Team 1 total minus team 2 total.
    pub difference: i16,
    /// Absolute difference.
    pub margin: u16,
    pub leader: Leader,
}

impl GameSummary {
    pub fn total(&self, team: Team) -> i16 {
        match team {
            Team::One => self.team1_total,
            Team::Two => self.team2_total,
        }
    }
}

/// Final totals are the last row's running totals, 0/0 with no rows.
pub fn summarize(derived: &[DerivedRound]) -> GameSummary {
    let (team1_total, team2_total) = derived
        .last()
        .map(|d| (d.team1_running_total, d.team2_running_total))
        .unwrap_or((0, 0));
    let difference = team1_total - team2_total;

    let leader = match difference {
        d if d > 0 => Leader::Team1,
        d if d < 0 => Leader::Team2,
        _ => Leader::Tie,
    };

    GameSummary {
        team1_total,
        team2_total,
        difference,
        margin: difference.unsigned_abs(),
        leader,
    }
}
