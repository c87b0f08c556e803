//! Types for pairwise aspect detection.

use std::fmt::{Display, Formatter};

use crate::body::Body;

/// The 11 supported aspect families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
    Quintile,
    Biquintile,
}

/// Families in detection order. Earlier entries win when orbs overlap.
pub const ASPECT_TABLE_ORDER: [AspectKind; 11] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
    AspectKind::Quincunx,
    AspectKind::Semisextile,
    AspectKind::Semisquare,
    AspectKind::Sesquiquadrate,
    AspectKind::Quintile,
    AspectKind::Biquintile,
];

/// Traditional character of an aspect family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Harmony {
    Harmonious,
    Challenging,
    /// Depends on the bodies involved.
    Neutral,
}

impl AspectKind {
    /// Exact separation angle in degrees.
    pub const fn target_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::Quincunx => 150.0,
            Self::Semisextile => 30.0,
            Self::Semisquare => 45.0,
            Self::Sesquiquadrate => 135.0,
            Self::Quintile => 72.0,
            Self::Biquintile => 144.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
            Self::Quincunx => "quincunx",
            Self::Semisextile => "semi-sextile",
            Self::Semisquare => "semi-square",
            Self::Sesquiquadrate => "sesquiquadrate",
            Self::Quintile => "quintile",
            Self::Biquintile => "biquintile",
        }
    }

    /// Glyph used in chart tables.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Conjunction => "☌",
            Self::Opposition => "☍",
            Self::Trine => "△",
            Self::Square => "□",
            Self::Sextile => "⚹",
            Self::Quincunx => "⚻",
            Self::Semisextile => "⚺",
            Self::Semisquare => "∠",
            Self::Sesquiquadrate => "⚼",
            Self::Quintile => "Q",
            Self::Biquintile => "bQ",
        }
    }

    pub const fn harmony(self) -> Harmony {
        match self {
            Self::Trine | Self::Sextile | Self::Quintile | Self::Biquintile => Harmony::Harmonious,
            Self::Square
            | Self::Opposition
            | Self::Semisquare
            | Self::Sesquiquadrate
            | Self::Quincunx => Harmony::Challenging,
            Self::Conjunction | Self::Semisextile => Harmony::Neutral,
        }
    }

    /// Ptolemaic aspects (conjunction through sextile) are major.
    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Opposition | Self::Trine | Self::Square | Self::Sextile
        )
    }

    /// Position in [`ASPECT_TABLE_ORDER`].
    pub const fn table_index(self) -> usize {
        self as usize
    }
}

/// Relative motion of a pair with respect to exactness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectMotion {
    /// Separation is closing toward the exact angle.
    Applying,
    /// Separation is moving away from the exact angle.
    Separating,
    /// Speeds are equal within the stationary threshold.
    Stationary,
}

impl AspectMotion {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Applying => "applying",
            Self::Separating => "separating",
            Self::Stationary => "stationary",
        }
    }
}

/// One entry of the orb table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact separation angle, fixed per family.
    pub target_deg: f64,
    /// Maximum deviation from `target_deg` for detection.
    pub default_orb: f64,
    /// Deviation at or below which the aspect counts as exact.
    pub tight_orb: f64,
    pub is_major: bool,
}

impl AspectDefinition {
    pub(crate) const fn new(kind: AspectKind, default_orb: f64, tight_orb: f64) -> Self {
        Self {
            kind,
            target_deg: kind.target_deg(),
            default_orb,
            tight_orb,
            is_major: kind.is_major(),
        }
    }
}

/// A detected aspect between two distinct bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aspect {
    pub body1: Body,
    pub body2: Body,
    pub kind: AspectKind,
    /// Raw angular distance between the bodies in [0, 180].
    pub separation_deg: f64,
    /// |separation - target| in degrees, always <= the family's orb.
    pub difference_deg: f64,
    pub motion: AspectMotion,
    /// `difference_deg <= tight_orb` at detection time.
    pub is_exact: bool,
}

impl Aspect {
    pub fn involves(&self, body: Body) -> bool {
        self.body1 == body || self.body2 == body
    }

    /// The partner of `body` in this aspect, or None if `body` is not part of it.
    pub fn other(&self, body: Body) -> Option<Body> {
        if self.body1 == body {
            Some(self.body2)
        } else if self.body2 == body {
            Some(self.body1)
        } else {
            None
        }
    }

    /// True if this aspect joins `a` and `b` in either order.
    pub fn connects(&self, a: Body, b: Body) -> bool {
        (self.body1 == a && self.body2 == b) || (self.body1 == b && self.body2 == a)
    }
}

/// Renders as `Sun trine Moon (2.00° applying, exact)`.
impl Display for Aspect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({:.2}° {}{})",
            self.body1.name(),
            self.kind.name(),
            self.body2.name(),
            self.difference_deg,
            self.motion.name(),
            if self.is_exact { ", exact" } else { "" }
        )
    }
}
