use serde::{Deserialize, Serialize};

use crate::domain::rules::round_numbers;

/// One of the two partnerships on the scorecard.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Maroon.
    #[serde(rename = "team1")]
    One,
    /// Gold.
    #[serde(rename = "team2")]
    Two,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    pub fn partner(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// 1-based team number as printed on the card.
    pub fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub fn colour(self) -> &'static str {
        match self {
            Team::One => "maroon",
            Team::Two => "gold",
        }
    }

    /// Label shown when the team has not been given a name.
    pub fn fallback_label(self) -> &'static str {
        match self {
            Team::One => "Team 1",
            Team::Two => "Team 2",
        }
    }
}

/// Which of a team's two inputs a mutation targets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Bid,
    /// Tricks actually won.
    Actual,
}

/// Bids and tricks won for one round. `None` means nothing has been entered,
/// which is distinct from an entered zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round_no: u8,
    pub team1_bid: Option<u8>,
    pub team1_actual: Option<u8>,
    pub team2_bid: Option<u8>,
    pub team2_actual: Option<u8>,
}

impl Round {
    pub const fn empty(round_no: u8) -> Self {
        Self {
            round_no,
            team1_bid: None,
            team1_actual: None,
            team2_bid: None,
            team2_actual: None,
        }
    }

    pub fn get(&self, team: Team, field: Field) -> Option<u8> {
        match (team, field) {
            (Team::One, Field::Bid) => self.team1_bid,
            (Team::One, Field::Actual) => self.team1_actual,
            (Team::Two, Field::Bid) => self.team2_bid,
            (Team::Two, Field::Actual) => self.team2_actual,
        }
    }

    pub(crate) fn set(&mut self, team: Team, field: Field, value: Option<u8>) {
        let slot = match (team, field) {
            (Team::One, Field::Bid) => &mut self.team1_bid,
            (Team::One, Field::Actual) => &mut self.team1_actual,
            (Team::Two, Field::Bid) => &mut self.team2_bid,
            (Team::Two, Field::Actual) => &mut self.team2_actual,
        };
        *slot = value;
    }

    pub fn bid(&self, team: Team) -> Option<u8> {
        self.get(team, Field::Bid)
    }

    pub fn actual(&self, team: Team) -> Option<u8> {
        self.get(team, Field::Actual)
    }

    pub fn is_blank(&self) -> bool {
        Team::ALL
            .iter()
            .all(|&t| self.bid(t).is_none() && self.actual(t).is_none())
    }
}

/// Fresh scorecard: one blank round per round number, ascending.
pub fn initial_rounds() -> Vec<Round> {
    round_numbers().map(Round::empty).collect()
}
