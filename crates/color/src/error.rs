use thiserror::Error;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),

    #[error("invalid hex digit in '{0}'")]
    Digit(String),
}
