use crate::domain::aggregate::{derive_all, summarize, Leader};
use crate::domain::session::GameSession;
use crate::domain::state::{initial_rounds, Field, Round, Team};

fn enter(session: &mut GameSession, round_no: u8, bids: (u8, u8), won: (u8, u8)) {
    session
        .set_value(round_no, Team::One, Field::Bid, &bids.0.to_string())
        .unwrap();
    session
        .set_value(round_no, Team::Two, Field::Bid, &bids.1.to_string())
        .unwrap();
    session
        .set_value(round_no, Team::One, Field::Actual, &won.0.to_string())
        .unwrap();
    session
        .set_value(round_no, Team::Two, Field::Actual, &won.1.to_string())
        .unwrap();
}

#[test]
fn round_five_scenario() {
    let mut session = GameSession::new();
    enter(&mut session, 5, (3, 2), (3, 2));

    let derived = session.derived();
    let row = derived.iter().find(|d| d.round.round_no == 5).unwrap();
    assert_eq!(row.team1_score, 30);
    assert_eq!(row.team2_score, 20);
    assert_eq!(row.team1_running_total, 30);
    assert_eq!(row.team2_running_total, 20);
    assert_eq!(row.current_diff, 10);
    assert!(row.is_round_scored);
}

#[test]
fn summary_totals_by_team() {
    let mut session = GameSession::new();
    enter(&mut session, 5, (3, 2), (3, 2));
    enter(&mut session, 6, (2, 4), (1, 5));

    let summary = session.summary();
    assert_eq!(summary.total(Team::One), 10);
    assert_eq!(summary.total(Team::Two), 61);
    assert_eq!(summary.total(Team::One), summary.team1_total);
    assert_eq!(summary.total(Team::Two), summary.team2_total);
    assert_eq!(summary.leader, Leader::Team2);
}

#[test]
fn blank_scorecard_derives_zeros() {
    let derived = derive_all(&initial_rounds());
    assert_eq!(derived.len(), 11);
    for row in &derived {
        assert!(!row.is_round_scored);
        assert_eq!(row.team1_running_total, 0);
        assert_eq!(row.team2_running_total, 0);
        assert_eq!(row.current_diff, 0);
    }
    let summary = summarize(&derived);
    assert_eq!(summary.leader, Leader::Tie);
    assert_eq!(summary.margin, 0);
}

#[test]
fn empty_sequence_summarizes_to_zero() {
    let summary = summarize(&derive_all(&[]));
    assert_eq!((summary.team1_total, summary.team2_total), (0, 0));
    assert_eq!(summary.leader, Leader::Tie);
}

#[test]
fn bidding_order_follows_parity() {
    let derived = derive_all(&initial_rounds());
    for row in &derived {
        let expected = if row.round.round_no % 2 == 1 {
            Team::Two
        } else {
            Team::One
        };
        assert_eq!(row.bids_first, expected, "round {}", row.round.round_no);
    }
    assert_eq!(derived[0].bids_first, Team::Two); // round 3, gold
    assert_eq!(derived[1].bids_first, Team::One); // round 4, maroon
}

#[test]
fn totals_accumulate_in_round_order() {
    let mut session = GameSession::new();
    enter(&mut session, 3, (1, 2), (1, 2)); // 10 / 20
    enter(&mut session, 4, (2, 1), (1, 3)); // -20 / 12
    enter(&mut session, 5, (3, 1), (4, 1)); // 31 / 10

    let derived = session.derived();
    let totals: Vec<(i16, i16, i16)> = derived[..3]
        .iter()
        .map(|d| (d.team1_running_total, d.team2_running_total, d.current_diff))
        .collect();
    assert_eq!(totals, vec![(10, 20, -10), (-10, 32, -42), (21, 42, -21)]);

    // Later, untouched rounds carry the totals forward.
    let last = derived.last().unwrap();
    assert!(!last.is_round_scored);
    assert_eq!(last.team1_running_total, 21);
    assert_eq!(last.team2_running_total, 42);

    let summary = session.summary();
    assert_eq!(summary.difference, -21);
    assert_eq!(summary.margin, 21);
    assert_eq!(summary.leader, Leader::Team2);
}

#[test]
fn one_sided_round_moves_only_that_team() {
    let mut round = Round::empty(6);
    round.set(Team::Two, Field::Bid, Some(2));
    round.set(Team::Two, Field::Actual, Some(2));
    round.set(Team::One, Field::Bid, Some(4));

    let derived = derive_all(&[round]);
    let row = &derived[0];
    assert!(row.is_round_scored);
    assert_eq!(row.team1_score, 0, "bid without tricks scores nothing");
    assert_eq!(row.team1_running_total, 0);
    assert_eq!(row.team2_running_total, 20);
    assert_eq!(row.current_diff, -20);
}

#[test]
fn gaps_between_rounds_are_skipped() {
    let mut session = GameSession::new();
    enter(&mut session, 3, (1, 1), (2, 1)); // 11 / 10
    enter(&mut session, 9, (4, 4), (5, 4)); // 41 / 40

    let derived = session.derived();
    let r8 = derived.iter().find(|d| d.round.round_no == 8).unwrap();
    assert!(!r8.is_round_scored);
    assert_eq!(r8.current_diff, 1);
    let r9 = derived.iter().find(|d| d.round.round_no == 9).unwrap();
    assert_eq!((r9.team1_running_total, r9.team2_running_total), (52, 50));
    assert_eq!(session.summary().leader, Leader::Team1);
}

#[test]
fn derivation_is_idempotent() {
    let mut session = GameSession::new();
    enter(&mut session, 12, (6, 5), (7, 5));
    assert_eq!(session.derived(), session.derived());
    assert_eq!(session.summary(), session.summary());
}
