//! Types for multi-body aspect patterns.

use astro_geometry::Element;

use crate::body::Body;

/// Minimum number of bodies sharing a sign to form a stellium.
pub const STELLIUM_MIN_BODIES: usize = 3;

/// Pattern families the detector recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PatternKind {
    /// Three bodies mutually in trine.
    GrandTrine,
    /// Two bodies in opposition, both square a third.
    TSquare,
    /// Three or more bodies in one sign.
    Stellium,
}

impl PatternKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::GrandTrine => "Grand Trine",
            Self::TSquare => "T-Square",
            Self::Stellium => "Stellium",
        }
    }
}

/// A detected pattern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub kind: PatternKind,
    /// Participants: 3 for Grand Trine and T-Square, 3 or more for Stellium.
    pub bodies: Vec<Body>,
    /// Focal body of a T-Square (square to both ends of the opposition).
    pub apex: Option<Body>,
    /// Shared element of a Stellium's sign, or of all three Grand Trine points.
    pub element: Option<Element>,
    pub description: String,
}

impl Pattern {
    pub fn contains(&self, body: Body) -> bool {
        self.bodies.contains(&body)
    }
}
