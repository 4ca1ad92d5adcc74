use std::fmt;

/// Errors arising from grid edits and coordinate lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A cell coordinate is outside `[0, width) x [0, height)`.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// A source magnitude that can't be pinned (NaN or infinite).
    InvalidMagnitude { value: f64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "cell ({}, {}) out of bounds for {}x{} grid",
                x, y, width, height
            ),
            Self::InvalidMagnitude { value } => {
                write!(f, "source magnitude must be finite, got {}", value)
            }
        }
    }
}

impl std::error::Error for GridError {}
