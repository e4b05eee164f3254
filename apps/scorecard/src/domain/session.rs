//! Top-level scorecard state: team names plus the round store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::aggregate::{derive_all, summarize, DerivedRound, GameSummary};
use crate::domain::round_store::RoundStore;
use crate::domain::snapshot::SessionSnapshot;
use crate::domain::state::{Field, Round, Team};
use crate::errors::domain::DomainError;

/// A single play-through. Owned by whichever layer drives input; all writes
/// go through the methods below.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    team1_name: String,
    team2_name: String,
    store: RoundStore,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with team names already filled in.
    pub fn with_names(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1_name: team1.into(),
            team2_name: team2.into(),
            store: RoundStore::new(),
        }
    }

    /// The name exactly as entered, possibly empty.
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::One => &self.team1_name,
            Team::Two => &self.team2_name,
        }
    }

    /// Name to show for a team: the entered name, or the team's fallback
    /// label when the name is blank.
    pub fn display_name(&self, team: Team) -> &str {
        let name = self.team_name(team);
        if name.trim().is_empty() {
            team.fallback_label()
        } else {
            name
        }
    }

    pub fn set_team_name(&mut self, team: Team, name: impl Into<String>) {
        let name = name.into();
        debug!(team = team.number(), name = %name, "team renamed");
        match team {
            Team::One => self.team1_name = name,
            Team::Two => self.team2_name = name,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        self.store.rounds()
    }

    pub fn rounds_snapshot(&self) -> Arc<[Round]> {
        self.store.snapshot()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// See [`RoundStore::set_value`].
    pub fn set_value(
        &mut self,
        round_no: u8,
        team: Team,
        field: Field,
        raw: &str,
    ) -> Result<(), DomainError> {
        self.store.set_value(round_no, team, field, raw)
    }

    pub fn derived(&self) -> Vec<DerivedRound> {
        derive_all(self.store.rounds())
    }

    pub fn summary(&self) -> GameSummary {
        summarize(&self.derived())
    }

    /// First round where neither team has entered tricks.
    pub fn current_round(&self) -> Option<u8> {
        self.store
            .rounds()
            .iter()
            .find(|r| r.team1_actual.is_none() && r.team2_actual.is_none())
            .map(|r| r.round_no)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_session(self)
    }

    /// Clear names and every round. Callers are expected to have confirmed
    /// with the user first.
    pub fn reset(&mut self) {
        self.team1_name.clear();
        self.team2_name.clear();
        self.store.reset();
        info!(revision = self.store.revision(), "scorecard reset");
    }
}
