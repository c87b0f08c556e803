//! End-to-end scenarios over whole charts.
//!
//! Positions are synthetic; no ephemeris is needed.

use astro_aspects::{
    AspectError, AspectKind, AspectMotion, Body, BodyPosition, CLASSICAL_BODIES, OrbTable,
    PatternKind, Sign, calc_all_aspects, calc_aspect, calc_cross_aspects, find_patterns,
};

const EPS: f64 = 1e-10;

fn pos(body: Body, lon: f64, speed: f64) -> BodyPosition {
    BodyPosition::new(body, lon, speed)
}

/// Two bodies on the same degree form an exact conjunction whatever their speeds.
#[test]
fn exact_conjunction_any_speed() {
    let table = OrbTable::new();
    for (s1, s2) in [(1.0, 13.0), (-0.5, 0.2), (0.1, 0.1)] {
        let asp = calc_aspect(&table, &pos(Body::Sun, 10.0, s1), &pos(Body::Moon, 10.0, s2))
            .unwrap()
            .unwrap();
        assert_eq!(asp.kind, AspectKind::Conjunction);
        assert!(asp.difference_deg.abs() < EPS);
        assert!(asp.is_exact);
    }
}

#[test]
fn trine_exact_and_wide() {
    let table = OrbTable::new();
    let sun = pos(Body::Sun, 0.0, 1.0);

    let close = calc_aspect(&table, &sun, &pos(Body::Mars, 122.0, 0.5))
        .unwrap()
        .unwrap();
    assert_eq!(close.kind, AspectKind::Trine);
    assert!((close.separation_deg - 122.0).abs() < EPS);
    assert!((close.difference_deg - 2.0).abs() < EPS);
    assert!(close.is_exact);

    let wide = calc_aspect(&table, &sun, &pos(Body::Mars, 125.0, 0.5))
        .unwrap()
        .unwrap();
    assert_eq!(wide.kind, AspectKind::Trine);
    assert!((wide.difference_deg - 5.0).abs() < EPS);
    assert!(!wide.is_exact);
}

#[test]
fn self_aspect_is_invalid_argument() {
    let table = OrbTable::new();
    for lon in [0.0, 45.0, 359.9] {
        let p = pos(Body::Pluto, lon, 0.01);
        assert_eq!(
            calc_aspect(&table, &p, &p),
            Err(AspectError::SelfAspect(Body::Pluto))
        );
    }
}

#[test]
fn grand_trine_chart() {
    let table = OrbTable::new();
    let chart = [
        pos(Body::Sun, 0.0, 1.0),
        pos(Body::Moon, 120.0, 13.0),
        pos(Body::Jupiter, 240.0, 0.1),
    ];
    let aspects = calc_all_aspects(&table, &chart);
    assert_eq!(aspects.len(), 3);
    assert!(aspects.iter().all(|a| a.kind == AspectKind::Trine));

    let patterns = find_patterns(&chart, &aspects);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].kind, PatternKind::GrandTrine);
    for body in [Body::Sun, Body::Moon, Body::Jupiter] {
        assert!(patterns[0].contains(body), "{} missing", body.name());
    }
}

#[test]
fn five_body_stellium() {
    let table = OrbTable::new();
    let chart = [
        pos(Body::Sun, 10.0, 1.0),
        pos(Body::Mercury, 14.0, 1.4),
        pos(Body::Venus, 18.0, 1.2),
        pos(Body::Mars, 22.0, 0.7),
        pos(Body::Saturn, 25.0, 0.1),
        pos(Body::Moon, 200.0, 13.0),
    ];
    assert!(chart[..5].iter().all(|p| p.sign == Sign::Aries));

    let aspects = calc_all_aspects(&table, &chart);
    let stelliums: Vec<_> = find_patterns(&chart, &aspects)
        .into_iter()
        .filter(|p| p.kind == PatternKind::Stellium)
        .collect();
    assert_eq!(stelliums.len(), 1);
    assert_eq!(stelliums[0].bodies.len(), 5);
    assert_eq!(stelliums[0].description, "Stellium in Aries (5 bodies)");
}

#[test]
fn cross_chart_opposition() {
    let table = OrbTable::new();
    let transit = [pos(Body::Mars, 0.0, 0.7)];
    let natal = [pos(Body::Venus, 180.0, 1.2)];
    let aspects = calc_cross_aspects(&table, &transit, &natal);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Opposition);
    assert!(aspects[0].difference_deg.abs() < EPS);
    assert!(aspects[0].is_exact);
}

/// Result sets are returned in full; there is no capacity limit.
#[test]
fn full_result_set_is_returned() {
    let table = OrbTable::new();
    // 23 bodies on one degree: every pair is a conjunction
    let chart: Vec<_> = astro_aspects::ALL_BODIES
        .iter()
        .map(|&b| pos(b, 42.0, 0.5))
        .collect();
    let aspects = calc_all_aspects(&table, &chart);
    assert_eq!(aspects.len(), 23 * 22 / 2);

    let cross = calc_cross_aspects(&table, &chart, &chart);
    // Same-body pairs are skipped
    assert_eq!(cross.len(), 23 * 23 - 23);
}

#[test]
fn custom_orbs_change_detection() {
    let mut table = OrbTable::new();
    let a = pos(Body::Sun, 0.0, 1.0);
    let b = pos(Body::Moon, 130.0, 13.0);
    assert_eq!(calc_aspect(&table, &a, &b), Ok(None));

    table.set_orb(AspectKind::Trine, 10.0).unwrap();
    let asp = calc_aspect(&table, &a, &b).unwrap().unwrap();
    assert_eq!(asp.kind, AspectKind::Trine);

    table.reset();
    assert_eq!(calc_aspect(&table, &a, &b), Ok(None));
}

#[test]
fn transit_motion_compares_separation_with_target() {
    let table = OrbTable::new();
    // Moon is closing on the square, but the rule only compares the current
    // separation with the target: 94 > 90 with a positive speed difference
    // reads as separating.
    let transit = [pos(Body::Moon, 6.0, 13.2).with_name("Transit Moon")];
    let natal = [pos(Body::Sun, 100.0, 0.0).with_name("Natal Sun")];
    let aspects = calc_cross_aspects(&table, &transit, &natal);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert_eq!(aspects[0].motion, AspectMotion::Separating);
}

#[test]
fn realistic_chart_patterns_are_well_formed() {
    let table = OrbTable::new();
    let lons = [
        279.86, 222.45, 271.89, 241.57, 327.96, 25.25, 40.4, 314.81, 303.19, 251.45,
    ];
    let chart: Vec<_> = CLASSICAL_BODIES
        .iter()
        .zip(lons)
        .map(|(&b, lon)| pos(b, lon, 0.5))
        .collect();
    let aspects = calc_all_aspects(&table, &chart);
    for a in &aspects {
        assert_ne!(a.body1, a.body2);
        assert!(a.difference_deg <= table.orb(a.kind));
        assert_eq!(a.is_exact, a.difference_deg <= table.tight_orb(a.kind));
    }
    for p in find_patterns(&chart, &aspects) {
        match p.kind {
            PatternKind::GrandTrine | PatternKind::TSquare => assert_eq!(p.bodies.len(), 3),
            PatternKind::Stellium => assert!(p.bodies.len() >= 3),
            _ => unreachable!(),
        }
    }
}
