//! Partner tricks inference.
//!
//! Both teams' tricks in a round sum to the round number, so entering one
//! team's tricks implies the other's. The inferred value is only a
//! convenience; the user may overwrite it.

use tracing::debug;

use crate::domain::state::{Field, Round, Team};

/// Tricks left for the partner once `entered` tricks are claimed, floored at zero.
pub fn implied_partner_actual(round_no: u8, entered: u8) -> u8 {
    round_no.saturating_sub(entered)
}

/// Pre-fill the partner's tricks after `team` entered its tricks.
///
/// Fires only when `team` went from unset to a concrete value and the
/// partner's tricks are still unset. Clearing `team`'s tricks never touches
/// the partner. Returns the value written, if any.
pub fn apply(round: &mut Round, team: Team, previous: Option<u8>) -> Option<u8> {
    if previous.is_some() {
        return None;
    }
    let entered = round.actual(team)?;
    let partner = team.partner();
    if round.actual(partner).is_some() {
        return None;
    }

    let filled = implied_partner_actual(round.round_no, entered);
    round.set(partner, Field::Actual, Some(filled));
    debug!(
        round_no = round.round_no,
        team = team.number(),
        entered,
        partner = partner.number(),
        filled,
        "auto-filled partner tricks"
    );
    Some(filled)
}
