use std::fmt;

use crate::Vector2D;

/// Everything that can go wrong while building a world.
///
/// Stepping a world never fails, only constructing one does.
#[derive(Clone, Debug, PartialEq)]
pub enum PhysicsError {
    /// A surface whose endpoints coincide (or are not finite), so it has no
    /// direction to derive a tangent or normal from.
    DegenerateSurface {
        begin: Vector2D,
        end: Vector2D,
    },
    /// Normalization of a vector with no length.
    ZeroLengthVector {
        /// Where the vector came from
        context: &'static str,
    },
    InvalidConfiguration {
        reason: &'static str,
    },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSurface { begin, end } => write!(
                f,
                "degenerate surface from ({}, {}) to ({}, {})",
                begin.x, begin.y, end.x, end.y
            ),
            Self::ZeroLengthVector { context } => {
                write!(f, "cannot normalize zero-length vector in {context}")
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
