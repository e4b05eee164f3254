//! Domain layer: pure scorecard logic types and helpers.

pub mod aggregate;
pub mod auto_fill;
pub mod round_store;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod table_view;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_aggregate;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use aggregate::{derive_all, summarize, DerivedRound, GameSummary, Leader};
pub use round_store::RoundStore;
pub use rules::{bids_first, valid_value_range, FIRST_ROUND, LAST_ROUND, ROUND_COUNT};
pub use scoring::round_score;
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use state::{Field, Round, Team};
