//! Aspect pattern recognition over a completed aspect set.
//!
//! Three independent scans:
//! - Grand Trine: two trines sharing a body, closed by a third trine
//!   between the two other bodies.
//! - T-Square: an opposition whose two ends are both square one apex body.
//! - Stellium: three or more bodies in one sign (positions only).
//!
//! A Grand Trine or T-Square reachable through several edge orders is
//! reported once, keyed by its sorted participant set. Output order is
//! Grand Trines, then T-Squares, then Stelliums in sign order.

use std::collections::HashSet;

use astro_geometry::{ALL_SIGNS, Element};

use crate::aspect::aspects_of_kind;
use crate::aspect_types::{Aspect, AspectKind};
use crate::body::{Body, BodyPosition};
use crate::pattern_types::{Pattern, PatternKind, STELLIUM_MIN_BODIES};

/// Find all patterns in one chart.
///
/// `aspects` is normally the output of
/// [`calc_all_aspects`](crate::aspect::calc_all_aspects) for `bodies`.
pub fn find_patterns(bodies: &[BodyPosition], aspects: &[Aspect]) -> Vec<Pattern> {
    let mut patterns = grand_trines(bodies, aspects);
    patterns.extend(t_squares(bodies, aspects));
    patterns.extend(stelliums(bodies));
    log::debug!(
        "find_patterns: {} patterns from {} bodies, {} aspects",
        patterns.len(),
        bodies.len(),
        aspects.len()
    );
    patterns
}

/// Closed trine triangles.
pub fn grand_trines(bodies: &[BodyPosition], aspects: &[Aspect]) -> Vec<Pattern> {
    let trines: Vec<&Aspect> = aspects_of_kind(aspects, AspectKind::Trine).collect();
    let mut seen = HashSet::new();
    let mut patterns = Vec::new();

    for (i, first) in trines.iter().enumerate() {
        for second in &trines[i + 1..] {
            let Some(shared) = shared_body(first, second) else {
                continue;
            };
            let (Some(p), Some(q)) = (first.other(shared), second.other(shared)) else {
                continue;
            };
            if p == q || !has_edge(&trines, p, q) {
                continue;
            }

            let members = [first.body1, first.body2, q];
            if !seen.insert(sorted(members)) {
                continue;
            }

            let description = format!(
                "Grand Trine: {}, {}, {}",
                display_name(bodies, members[0]),
                display_name(bodies, members[1]),
                display_name(bodies, members[2]),
            );
            log::trace!("{description}");
            patterns.push(Pattern {
                kind: PatternKind::GrandTrine,
                bodies: members.to_vec(),
                apex: None,
                element: common_element(bodies, &members),
                description,
            });
        }
    }
    patterns
}

/// Oppositions with both ends square a common apex.
pub fn t_squares(bodies: &[BodyPosition], aspects: &[Aspect]) -> Vec<Pattern> {
    let squares: Vec<&Aspect> = aspects_of_kind(aspects, AspectKind::Square).collect();
    let mut seen = HashSet::new();
    let mut patterns = Vec::new();

    for opposition in aspects_of_kind(aspects, AspectKind::Opposition) {
        let (p1, p2) = (opposition.body1, opposition.body2);
        for square in &squares {
            let (apex, far_end) = if let Some(apex) = square.other(p1) {
                (apex, p2)
            } else if let Some(apex) = square.other(p2) {
                (apex, p1)
            } else {
                continue;
            };
            if apex == p1 || apex == p2 || !has_edge(&squares, apex, far_end) {
                continue;
            }

            let members = [p1, p2, apex];
            if !seen.insert(sorted(members)) {
                continue;
            }

            let description = format!(
                "T-Square: {} opp {}, both square {}",
                display_name(bodies, p1),
                display_name(bodies, p2),
                display_name(bodies, apex),
            );
            log::trace!("{description}");
            patterns.push(Pattern {
                kind: PatternKind::TSquare,
                bodies: members.to_vec(),
                apex: Some(apex),
                element: None,
                description,
            });
        }
    }
    patterns
}

/// Signs holding at least [`STELLIUM_MIN_BODIES`] bodies.
///
/// Members are listed in input order. The aspect set is not consulted.
pub fn stelliums(bodies: &[BodyPosition]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    for sign in ALL_SIGNS {
        let members: Vec<Body> = bodies
            .iter()
            .filter(|p| p.sign == sign)
            .map(|p| p.body)
            .collect();
        if members.len() < STELLIUM_MIN_BODIES {
            continue;
        }

        let description = format!("Stellium in {} ({} bodies)", sign.name(), members.len());
        log::trace!("{description}");
        patterns.push(Pattern {
            kind: PatternKind::Stellium,
            bodies: members,
            apex: None,
            element: Some(sign.element()),
            description,
        });
    }
    patterns
}

/// The body two aspects have in common, if any.
fn shared_body(a: &Aspect, b: &Aspect) -> Option<Body> {
    if a.involves(b.body1) {
        Some(b.body1)
    } else if a.involves(b.body2) {
        Some(b.body2)
    } else {
        None
    }
}

fn has_edge(edges: &[&Aspect], a: Body, b: Body) -> bool {
    edges.iter().any(|e| e.connects(a, b))
}

fn sorted(mut members: [Body; 3]) -> [Body; 3] {
    members.sort_unstable();
    members
}

fn display_name(bodies: &[BodyPosition], body: Body) -> &str {
    bodies
        .iter()
        .find(|p| p.body == body)
        .map_or(body.name(), |p| p.name.as_str())
}

/// Element shared by every member's sign. None if any member is missing.
fn common_element(bodies: &[BodyPosition], members: &[Body]) -> Option<Element> {
    let element_of = |b: Body| {
        let p = bodies.iter().find(|p| p.body == b)?;
        Some(p.sign.element())
    };
    let mut elements = members.iter().map(|&b| element_of(b));
    let first = elements.next()??;
    elements.all(|e| e == Some(first)).then_some(first)
}
