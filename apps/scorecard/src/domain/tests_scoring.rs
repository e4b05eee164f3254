use crate::domain::scoring::round_score;

#[test]
fn nothing_scored_without_tricks() {
    assert_eq!(round_score(Some(5), None), 0);
    assert_eq!(round_score(None, None), 0);
    assert_eq!(round_score(Some(0), None), 0);
}

#[test]
fn exact_bid_scores_ten_per_trick() {
    assert_eq!(round_score(Some(3), Some(3)), 30);
    assert_eq!(round_score(Some(13), Some(13)), 130);
    assert_eq!(round_score(Some(0), Some(0)), 0);
}

#[test]
fn overtricks_add_one_point_each() {
    // 4 bid, 6 won: 40 + 2
    assert_eq!(round_score(Some(4), Some(6)), 42);
    assert_eq!(round_score(Some(0), Some(3)), 3);
}

#[test]
fn set_is_flat_penalty() {
    assert_eq!(round_score(Some(5), Some(4)), -50);
    assert_eq!(round_score(Some(5), Some(0)), -50);
}

#[test]
fn missing_bid_counts_as_zero() {
    assert_eq!(round_score(None, Some(0)), 0);
    assert_eq!(round_score(None, Some(4)), 4);
}
