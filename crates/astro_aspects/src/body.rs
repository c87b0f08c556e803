//! Body identifiers and the position snapshot supplied by the ephemeris.
//!
//! The engine never computes positions itself. A caller obtains longitudes
//! and speeds from an ephemeris for one moment (a natal moment or a transit
//! moment) and wraps each in a [`BodyPosition`].

use astro_geometry::{Sign, normalize_360};

/// Bodies an ephemeris snapshot may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
    TrueNode,
    MeanApogee,
    OscApogee,
    Earth,
    Chiron,
    Pholus,
    Ceres,
    Pallas,
    Juno,
    Vesta,
    IntpApogee,
    IntpPerigee,
}

/// All bodies in ephemeris index order.
pub const ALL_BODIES: [Body; 23] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::MeanNode,
    Body::TrueNode,
    Body::MeanApogee,
    Body::OscApogee,
    Body::Earth,
    Body::Chiron,
    Body::Pholus,
    Body::Ceres,
    Body::Pallas,
    Body::Juno,
    Body::Vesta,
    Body::IntpApogee,
    Body::IntpPerigee,
];

/// The ten classical planets (Sun through Pluto).
pub const CLASSICAL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Default display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::MeanNode => "Mean Node",
            Self::TrueNode => "True Node",
            Self::MeanApogee => "Mean Apogee",
            Self::OscApogee => "Osc. Apogee",
            Self::Earth => "Earth",
            Self::Chiron => "Chiron",
            Self::Pholus => "Pholus",
            Self::Ceres => "Ceres",
            Self::Pallas => "Pallas",
            Self::Juno => "Juno",
            Self::Vesta => "Vesta",
            Self::IntpApogee => "Intp. Apogee",
            Self::IntpPerigee => "Intp. Perigee",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Body by 0-based index. Returns None if index >= 23.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_BODIES.get(index as usize).copied()
    }
}

/// One body's state at a single calculation moment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyPosition {
    /// Which body.
    pub body: Body,
    /// Tropical ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Longitude speed in degrees per day; negative means retrograde.
    pub speed_deg_per_day: f64,
    /// Sign containing `longitude_deg`.
    pub sign: Sign,
    /// Display name used in pattern descriptions.
    pub name: String,
}

impl BodyPosition {
    /// Build a position, normalizing the longitude and deriving the sign.
    pub fn new(body: Body, longitude_deg: f64, speed_deg_per_day: f64) -> Self {
        let longitude_deg = normalize_360(longitude_deg);
        Self {
            body,
            longitude_deg,
            speed_deg_per_day,
            sign: Sign::from_longitude(longitude_deg),
            name: body.name().to_string(),
        }
    }

    /// Replace the display name (e.g. "Natal Sun" vs "Transit Sun").
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}
