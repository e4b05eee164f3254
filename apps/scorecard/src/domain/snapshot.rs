//! Public snapshot API for observing a session without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::aggregate::{derive_all, summarize, DerivedRound, GameSummary};
use crate::domain::session::GameSession;
use crate::domain::state::Team;

/// Public info about one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPublic {
    pub team: Team,
    pub colour: String,
    /// Name as entered; may be empty.
    pub name: String,
    pub display_name: String,
}

impl TeamPublic {
    fn from_session(session: &GameSession, team: Team) -> Self {
        Self {
            team,
            colour: team.colour().to_string(),
            name: session.team_name(team).to_string(),
            display_name: session.display_name(team).to_string(),
        }
    }
}

/// Everything a presentation layer needs to draw the scorecard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub teams: [TeamPublic; 2],
    pub rounds: Vec<DerivedRound>,
    pub summary: GameSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_round: Option<u8>,
}

impl SessionSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let rounds = derive_all(session.rounds());
        let summary = summarize(&rounds);
        Self {
            revision: session.revision(),
            teams: [
                TeamPublic::from_session(session, Team::One),
                TeamPublic::from_session(session, Team::Two),
            ],
            rounds,
            summary,
            current_round: session.current_round(),
        }
    }
}
