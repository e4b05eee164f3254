#![allow(dead_code)]

pub mod logging;
pub mod session_helpers;

#[allow(unused_imports)]
pub use session_helpers::{enter_round, row};
