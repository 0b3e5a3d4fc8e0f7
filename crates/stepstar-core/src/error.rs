//! Error types for grid construction.

use std::fmt;

/// Errors arising from [`Grid`](crate::Grid) construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Height or width was zero or negative.
    InvalidDimensions {
        /// The requested width.
        width: i32,
        /// The requested height.
        height: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}: both must be positive")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_dimensions() {
        let err = GridError::InvalidDimensions {
            width: 0,
            height: -3,
        };
        assert_eq!(
            err.to_string(),
            "invalid grid dimensions 0x-3: both must be positive"
        );
    }
}
