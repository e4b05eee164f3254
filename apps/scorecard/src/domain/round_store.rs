//! Ordered per-round entries and their validated mutations.

use std::num::IntErrorKind;
use std::sync::Arc;

use tracing::debug;

use crate::domain::auto_fill;
use crate::domain::rules::{round_index, valid_value_range};
use crate::domain::state::{initial_rounds, Field, Round, Team};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Holds the eleven rounds of a scorecard.
///
/// Every successful mutation builds a new sequence and swaps it in, bumping
/// `revision`. A snapshot taken before a mutation keeps pointing at the old
/// sequence, so readers never see a half-applied update.
#[derive(Debug, Clone)]
pub struct RoundStore {
    rounds: Arc<[Round]>,
    revision: u64,
}

impl Default for RoundStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundStore {
    pub fn new() -> Self {
        Self {
            rounds: initial_rounds().into(),
            revision: 0,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Shared handle to the current sequence.
    pub fn snapshot(&self) -> Arc<[Round]> {
        Arc::clone(&self.rounds)
    }

    /// Number of successful mutations since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn round(&self, round_no: u8) -> Option<&Round> {
        round_index(round_no).map(|i| &self.rounds[i])
    }

    /// Store a bid or tricks-won value typed by the user.
    ///
    /// Blank input clears the field. Anything else must be a whole number in
    /// `0..=round_no`; otherwise the store is left as it was and the
    /// rejection is returned. Entering a team's tricks may pre-fill the
    /// partner's (see [`auto_fill::apply`]).
    pub fn set_value(
        &mut self,
        round_no: u8,
        team: Team,
        field: Field,
        raw: &str,
    ) -> Result<(), DomainError> {
        let idx = round_index(round_no).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Round,
                format!("round {round_no} is not on the scorecard"),
            )
        })?;

        let value = match parse_value(raw, round_no) {
            Ok(v) => v,
            Err(e) => {
                debug!(round_no, team = team.number(), ?field, raw, error = %e, "rejected value");
                return Err(e);
            }
        };

        let mut next = self.rounds.to_vec();
        let round = &mut next[idx];
        debug_assert_eq!(round.round_no, round_no);
        let previous = round.get(team, field);
        round.set(team, field, value);
        if field == Field::Actual {
            auto_fill::apply(round, team, previous);
        }

        self.replace(next);
        debug!(
            round_no,
            team = team.number(),
            ?field,
            ?value,
            revision = self.revision,
            "value stored"
        );
        Ok(())
    }

    /// Drop every entry and start from a blank scorecard.
    pub fn reset(&mut self) {
        self.replace(initial_rounds());
    }

    fn replace(&mut self, next: Vec<Round>) {
        self.rounds = next.into();
        self.revision += 1;
    }
}

/// Parse raw text into a field value for `round_no`.
///
/// `Ok(None)` means the field should be cleared.
pub fn parse_value(raw: &str, round_no: u8) -> Result<Option<u8>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let out_of_range = || {
        DomainError::validation(
            ValidationKind::OutOfRange,
            format!("{trimmed} is outside 0..={round_no} for round {round_no}"),
        )
    };

    let parsed: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => DomainError::validation(
            ValidationKind::Malformed,
            format!("'{trimmed}' is not a whole number"),
        ),
    })?;

    match u8::try_from(parsed) {
        Ok(v) if valid_value_range(round_no).contains(&v) => Ok(Some(v)),
        _ => Err(out_of_range()),
    }
}
