//! Ecliptic angle helpers and tropical zodiac tables.
//!
//! This crate provides:
//! - Angle normalization to [0, 360) and minor-arc angular distance
//! - The 12 tropical signs with element and modality classification
//! - Sign position and degrees-minutes-seconds breakdown of a longitude
//!
//! Everything here is a pure, total function over `f64` degrees.

pub mod angle;
pub mod sign;

pub use angle::{angular_distance, normalize_360};
pub use sign::{
    ALL_SIGNS, Dms, Element, Modality, Sign, SignPosition, deg_to_dms, dms_to_deg,
    sign_from_longitude,
};
