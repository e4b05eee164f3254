use std::ops::RangeInclusive;

use crate::domain::state::Team;

pub const FIRST_ROUND: u8 = 3;
pub const LAST_ROUND: u8 = 13;
/// Rounds 3 through 13 inclusive.
pub const ROUND_COUNT: usize = (LAST_ROUND - FIRST_ROUND + 1) as usize;

pub fn round_numbers() -> RangeInclusive<u8> {
    FIRST_ROUND..=LAST_ROUND
}

/// Position of `round_no` in the round sequence, or None when the round does
/// not exist on the scorecard.
pub fn round_index(round_no: u8) -> Option<usize> {
    if round_numbers().contains(&round_no) {
        Some((round_no - FIRST_ROUND) as usize)
    } else {
        None
    }
}

/// A round deals `round_no` tricks, so bids and tricks won both live in
/// `0..=round_no`.
pub fn valid_value_range(round_no: u8) -> RangeInclusive<u8> {
    0..=round_no
}

/// Team that bids first in a round. Odd rounds open with gold (team 2),
/// even rounds with maroon (team 1).
pub fn bids_first(round_no: u8) -> Team {
    if round_no % 2 == 1 {
        Team::Two
    } else {
        Team::One
    }
}
