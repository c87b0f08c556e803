//! Tropical zodiac signs and degrees-minutes-seconds breakdown.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees. Each sign carries a fixed element
//! (fire/earth/air/water, cycling every sign) and modality
//! (cardinal/fixed/mutable, cycling every sign).

use std::fmt::{Display, Formatter};

use crate::angle::normalize_360;

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Modality (quadruplicity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign by 0-based index. Returns None if index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SIGNS.get(index as usize).copied()
    }

    /// Sign containing an ecliptic longitude (any real value, wrapped first).
    pub fn from_longitude(lon_deg: f64) -> Self {
        sign_from_longitude(lon_deg).sign
    }

    /// Fire, Earth, Air, Water repeating from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Cardinal, Fixed, Mutable repeating from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A zodiac position split for chart display, e.g. 15°30'07" of Leo.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    /// Whole degrees; under 30 when taken from a [`SignPosition`].
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional seconds are kept; `Display` drops them.
    pub seconds: f64,
}

/// Renders as `15°30'07"` with truncated whole seconds.
impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\"",
            self.degrees,
            self.minutes,
            self.seconds.floor() as u8
        )
    }
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignPosition {
    /// The sign containing the longitude.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Decimal degrees of a [`Dms`].
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + (f64::from(dms.minutes) + dms.seconds / 60.0) / 60.0
}

/// Split a degree count (usually degrees within a sign) into DMS.
///
/// The sign of `deg` is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let magnitude = deg.abs();
    let degrees = magnitude.trunc();
    let arc_minutes = magnitude.fract() * 60.0;
    let minutes = arc_minutes.trunc();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (arc_minutes - minutes) * 60.0,
    }
}

/// Determine the sign from a tropical ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_360(lon_deg);
    // Clamp to 11 in case of floating point edge just below 360.0
    let sign_index = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_sign = lon - (sign_index as f64) * 30.0;

    SignPosition {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        dms: deg_to_dms(degrees_in_sign),
        degrees_in_sign,
    }
}
