/// Points a team earns for one round.
///
/// Nothing is scored until tricks won are entered. A made bid is worth ten
/// per trick bid plus one per overtrick; a set costs ten per trick bid no
/// matter how many tricks were taken. A missing bid counts as zero.
pub fn round_score(bid: Option<u8>, actual: Option<u8>) -> i16 {
    let Some(actual) = actual else {
        return 0;
    };
    let bid = i16::from(bid.unwrap_or(0));
    let actual = i16::from(actual);

    if actual >= bid {
        bid * 10 + (actual - bid)
    } else {
        bid * -10
    }
}
