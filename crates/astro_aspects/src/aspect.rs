//! Pairwise aspect detection and aspect-set construction.
//!
//! Detection scans the orb table in its fixed order and takes the first
//! family whose target angle lies within that family's orb of the actual
//! separation. With the built-in orbs no two families overlap; with custom
//! orbs they can, and then the earlier family wins even if a later one is
//! closer to exact.

use astro_geometry::angular_distance;

use crate::aspect_types::{Aspect, AspectKind, AspectMotion};
use crate::body::{Body, BodyPosition};
use crate::error::AspectError;
use crate::orb::OrbTable;

/// Relative speeds closer than this (degrees/day) count as stationary.
pub const STATIONARY_SPEED_THRESHOLD: f64 = 0.01;

/// Find the aspect family formed by two longitudes.
///
/// Returns `(kind, difference_from_exact)` for the first family in table
/// order within orb, or None.
pub fn check_aspect(table: &OrbTable, lon1: f64, lon2: f64) -> Option<(AspectKind, f64)> {
    let separation = angular_distance(lon1, lon2);
    table.definitions().iter().find_map(|def| {
        let diff = (separation - def.target_deg).abs();
        (diff <= def.default_orb).then_some((def.kind, diff))
    })
}

/// Classify whether a pair is moving toward or away from an aspect.
///
/// With `speed_diff = a.speed - b.speed`: below the stationary threshold the
/// pair is stationary. For a positive difference the aspect is applying while
/// the separation is still under the target; for a negative difference it is
/// applying while the separation is over the target. Everything else is
/// separating.
pub fn aspect_motion(a: &BodyPosition, b: &BodyPosition, kind: AspectKind) -> AspectMotion {
    let speed_diff = a.speed_deg_per_day - b.speed_deg_per_day;
    if speed_diff.abs() < STATIONARY_SPEED_THRESHOLD {
        return AspectMotion::Stationary;
    }

    let target = kind.target_deg();
    let current = angular_distance(a.longitude_deg, b.longitude_deg);
    let applying = if speed_diff > 0.0 {
        current < target
    } else {
        current > target
    };

    if applying {
        AspectMotion::Applying
    } else {
        AspectMotion::Separating
    }
}

/// Detect the aspect between two body positions.
///
/// Returns `Err(SelfAspect)` when both positions are the same body and
/// `Ok(None)` when no family is within orb.
pub fn calc_aspect(
    table: &OrbTable,
    a: &BodyPosition,
    b: &BodyPosition,
) -> Result<Option<Aspect>, AspectError> {
    if a.body == b.body {
        return Err(AspectError::SelfAspect(a.body));
    }

    let Some((kind, difference)) = check_aspect(table, a.longitude_deg, b.longitude_deg) else {
        return Ok(None);
    };

    Ok(Some(Aspect {
        body1: a.body,
        body2: b.body,
        kind,
        separation_deg: angular_distance(a.longitude_deg, b.longitude_deg),
        difference_deg: difference,
        motion: aspect_motion(a, b, kind),
        is_exact: difference <= table.tight_orb(kind),
    }))
}

/// All aspects among the unordered pairs `(i, j)`, `i < j`, of one chart.
///
/// Pairs that repeat a body are skipped. Results are in pair order and are
/// never truncated.
pub fn calc_all_aspects(table: &OrbTable, bodies: &[BodyPosition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if let Ok(Some(aspect)) = calc_aspect(table, a, b) {
                aspects.push(aspect);
            }
        }
    }
    log::debug!(
        "calc_all_aspects: {} aspects over {} bodies",
        aspects.len(),
        bodies.len()
    );
    aspects
}

/// All aspects between two charts (e.g. transiting × natal).
///
/// Every body of `list_a` is paired with every body of `list_b`, with the
/// `list_a` body as `body1`. Same-body pairs are skipped, so a transiting
/// Sun is never aspected to a natal Sun.
pub fn calc_cross_aspects(
    table: &OrbTable,
    list_a: &[BodyPosition],
    list_b: &[BodyPosition],
) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for a in list_a {
        for b in list_b {
            if let Ok(Some(aspect)) = calc_aspect(table, a, b) {
                aspects.push(aspect);
            }
        }
    }
    log::debug!(
        "calc_cross_aspects: {} aspects over {}x{} bodies",
        aspects.len(),
        list_a.len(),
        list_b.len()
    );
    aspects
}

/// Aspects that include `body`, in input order.
pub fn aspects_involving(aspects: &[Aspect], body: Body) -> impl Iterator<Item = &Aspect> {
    aspects.iter().filter(move |a| a.involves(body))
}

/// Aspects of one family, in input order.
pub fn aspects_of_kind(aspects: &[Aspect], kind: AspectKind) -> impl Iterator<Item = &Aspect> {
    aspects.iter().filter(move |a| a.kind == kind)
}

/// How close to exact an aspect is: `1 - difference / orb`, floored at 0.
///
/// Uses the table's current detection orb for the family. A zero orb gives
/// 1.0 for a perfectly exact aspect and 0.0 otherwise.
pub fn aspect_strength(table: &OrbTable, aspect: &Aspect) -> f64 {
    let orb = table.orb(aspect.kind);
    if orb <= 0.0 {
        let exact = aspect.difference_deg <= 0.0;
        return if exact { 1.0 } else { 0.0 };
    }
    (1.0 - aspect.difference_deg / orb).max(0.0)
}
