//! Error codes for the scorecard.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the terminal front end
//! prints next to a rejected command.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Value validation
    /// Bid or tricks outside `0..=round`
    ValueOutOfRange,
    /// Bid or tricks not an integer
    MalformedValue,
    /// Round number not on the scorecard
    RoundNotFound,

    // Command input
    /// Input line is not valid UTF-8
    InvalidEncoding,
    /// Unrecognised command word
    UnknownCommand,
    /// Command is missing an argument
    MissingArgument,
    /// Team must be 1, 2, maroon or gold
    InvalidTeam,
    /// Round argument is not a number
    InvalidRound,
    /// Destructive command issued without confirmation
    ConfirmationRequired,

    // Runtime
    /// Invalid configuration value
    ConfigError,
    /// Reading input or writing output failed
    IoError,
    /// Snapshot could not be serialized
    SerializationError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::MalformedValue => "MALFORMED_VALUE",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::InvalidEncoding => "INVALID_ENCODING",
            Self::UnknownCommand => "UNKNOWN_COMMAND",
            Self::MissingArgument => "MISSING_ARGUMENT",
            Self::InvalidTeam => "INVALID_TEAM",
            Self::InvalidRound => "INVALID_ROUND",
            Self::ConfirmationRequired => "CONFIRMATION_REQUIRED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
