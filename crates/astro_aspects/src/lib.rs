//! Aspect detection and aspect-pattern recognition.
//!
//! This crate provides:
//! - A per-family orb table with reset-to-defaults
//! - Pairwise aspect detection with applying/separating classification
//! - Aspect sets within one chart and across two charts (transits, synastry)
//! - Grand Trine, T-Square, and Stellium pattern detection
//! - Static interpretation lookups (name, symbol, harmony) and strength
//!
//! Body positions come from an external ephemeris; this crate only reads them.
//!
//! ```
//! use astro_aspects::*;
//!
//! let table = OrbTable::new();
//! let chart = [
//!     BodyPosition::new(Body::Sun, 0.0, 0.98),
//!     BodyPosition::new(Body::Moon, 120.0, 13.2),
//!     BodyPosition::new(Body::Jupiter, 240.0, 0.08),
//! ];
//! let aspects = calc_all_aspects(&table, &chart);
//! let patterns = find_patterns(&chart, &aspects);
//! assert_eq!(aspects.len(), 3);
//! assert_eq!(patterns[0].kind, PatternKind::GrandTrine);
//! ```

pub mod aspect;
pub mod aspect_types;
pub mod body;
pub mod error;
pub mod orb;
pub mod pattern;
pub mod pattern_types;

pub use aspect::{
    STATIONARY_SPEED_THRESHOLD, aspect_motion, aspect_strength, aspects_involving,
    aspects_of_kind, calc_all_aspects, calc_aspect, calc_cross_aspects, check_aspect,
};
pub use aspect_types::{
    ASPECT_TABLE_ORDER, Aspect, AspectDefinition, AspectKind, AspectMotion, Harmony,
};
pub use body::{ALL_BODIES, Body, BodyPosition, CLASSICAL_BODIES};
pub use error::AspectError;
pub use orb::OrbTable;
pub use pattern::{find_patterns, grand_trines, stelliums, t_squares};
pub use pattern_types::{Pattern, PatternKind, STELLIUM_MIN_BODIES};

// Re-export geometry so callers don't need to depend on astro_geometry directly.
pub use astro_geometry::{Element, Modality, Sign, angular_distance, normalize_360};
