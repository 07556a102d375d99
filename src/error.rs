use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by the squish operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquishError {
    #[error("unsupported operand types for +: {left} and {right}")]
    UnsupportedOperands { left: ValueKind, right: ValueKind },

    #[error("integer overflow adding {left} and {right}")]
    Overflow { left: i64, right: i64 },

    #[error(
        "a record holds at most {max} values, got {count}",
        max = crate::config::RECORD_FIELD_COUNT
    )]
    TooManyValues { count: usize },
}
