// Proptest generators for scorecard types.
// Values are generated within each round's legal range by construction.

use proptest::option;
use proptest::prelude::*;

use crate::domain::rules::round_numbers;
use crate::domain::state::Round;

/// Round number on the scorecard.
pub fn round_no() -> impl Strategy<Value = u8> {
    3u8..=13u8
}

/// Optional field value legal for `round_no`.
pub fn field_value(round_no: u8) -> impl Strategy<Value = Option<u8>> {
    option::of(0u8..=round_no)
}

/// A round with arbitrary legal entries.
pub fn round(round_no: u8) -> impl Strategy<Value = Round> {
    (
        field_value(round_no),
        field_value(round_no),
        field_value(round_no),
        field_value(round_no),
    )
        .prop_map(move |(team1_bid, team1_actual, team2_bid, team2_actual)| Round {
            round_no,
            team1_bid,
            team1_actual,
            team2_bid,
            team2_actual,
        })
}

/// A full scorecard of eleven rounds in ascending order.
pub fn scorecard() -> impl Strategy<Value = Vec<Round>> {
    round_numbers()
        .map(|n| round(n).boxed())
        .collect::<Vec<_>>()
}

/// (round_no, bid, actual) with bid and actual legal for the round.
pub fn bid_and_actual() -> impl Strategy<Value = (u8, u8, u8)> {
    round_no().prop_flat_map(|n| (Just(n), 0u8..=n, 0u8..=n))
}
