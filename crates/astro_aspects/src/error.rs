//! Error types for aspect calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::aspect_types::AspectKind;
use crate::body::Body;

/// Errors from aspect detection and orb configuration.
///
/// "No aspect within orb" is not an error; detection returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AspectError {
    /// Both positions carry the same body; a body has no aspect with itself.
    SelfAspect(Body),
    /// Orb must be finite and non-negative.
    InvalidOrb { kind: AspectKind, orb: f64 },
    /// An orb table slot holds the wrong family.
    TableOrder {
        slot: usize,
        expected: AspectKind,
        found: AspectKind,
    },
}

impl Display for AspectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfAspect(body) => {
                write!(f, "invalid argument: {} cannot aspect itself", body.name())
            }
            Self::InvalidOrb { kind, orb } => {
                write!(f, "invalid orb for {}: {orb}", kind.name())
            }
            Self::TableOrder {
                slot,
                expected,
                found,
            } => write!(
                f,
                "orb table slot {slot} holds {}, expected {}",
                found.name(),
                expected.name()
            ),
        }
    }
}

impl Error for AspectError {}
