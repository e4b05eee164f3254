use scorecard::{DerivedRound, Field, GameSession, Team};

/// Enter both bids, then team 1's tricks, then team 2's tricks, the order a
/// scorekeeper fills the row in.
pub fn enter_round(session: &mut GameSession, round_no: u8, bids: (u8, u8), won: (u8, u8)) {
    for (team, field, value) in [
        (Team::One, Field::Bid, bids.0),
        (Team::Two, Field::Bid, bids.1),
        (Team::One, Field::Actual, won.0),
        (Team::Two, Field::Actual, won.1),
    ] {
        session
            .set_value(round_no, team, field, &value.to_string())
            .unwrap_or_else(|e| panic!("round {round_no} {team:?} {field:?}={value}: {e}"));
    }
}

pub fn row(session: &GameSession, round_no: u8) -> DerivedRound {
    session
        .derived()
        .into_iter()
        .find(|d| d.round.round_no == round_no)
        .unwrap_or_else(|| panic!("round {round_no} missing from derived view"))
}
