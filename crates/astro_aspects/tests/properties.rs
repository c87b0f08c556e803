//! Property tests for detector invariants.

use astro_aspects::{
    ALL_BODIES, AspectMotion, Body, BodyPosition, OrbTable, STATIONARY_SPEED_THRESHOLD,
    aspect_motion, calc_all_aspects, calc_aspect,
};
use proptest::prelude::*;

fn body_position() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..360.0, -2.0f64..15.0)
}

proptest! {
    #[test]
    fn detected_aspects_respect_orbs(
        (lon1, s1) in body_position(),
        (lon2, s2) in body_position(),
    ) {
        let table = OrbTable::new();
        let a = BodyPosition::new(Body::Sun, lon1, s1);
        let b = BodyPosition::new(Body::Moon, lon2, s2);
        if let Some(asp) = calc_aspect(&table, &a, &b).unwrap() {
            prop_assert!(asp.difference_deg >= 0.0);
            prop_assert!(asp.difference_deg <= table.orb(asp.kind));
            let within_tight = asp.difference_deg <= table.tight_orb(asp.kind);
            prop_assert_eq!(asp.is_exact, within_tight);
            prop_assert!((0.0..=180.0).contains(&asp.separation_deg));
        }
    }

    #[test]
    fn self_aspect_always_fails(lon in -720.0f64..720.0, speed in -2.0f64..15.0) {
        let table = OrbTable::new();
        let p = BodyPosition::new(Body::Mars, lon, speed);
        prop_assert!(calc_aspect(&table, &p, &p).is_err());
    }

    #[test]
    fn motion_is_total(
        (lon1, s1) in body_position(),
        (lon2, s2) in body_position(),
        idx in 0usize..11,
    ) {
        let kind = astro_aspects::ASPECT_TABLE_ORDER[idx];
        let a = BodyPosition::new(Body::Venus, lon1, s1);
        let b = BodyPosition::new(Body::Saturn, lon2, s2);
        let m = aspect_motion(&a, &b, kind);
        if (s1 - s2).abs() < STATIONARY_SPEED_THRESHOLD {
            prop_assert_eq!(m, AspectMotion::Stationary);
        } else {
            prop_assert!(m != AspectMotion::Stationary);
        }
    }

    #[test]
    fn orb_round_trip(idx in 0usize..11, orb in 0.0f64..30.0) {
        let kind = astro_aspects::ASPECT_TABLE_ORDER[idx];
        let mut table = OrbTable::new();
        table.set_orb(kind, orb).unwrap();
        prop_assert_eq!(table.orb(kind), orb);
        table.reset();
        prop_assert_eq!(table, OrbTable::new());
    }

    #[test]
    fn all_aspects_bounded_by_pairs(lons in prop::collection::vec(0.0f64..360.0, 0..23)) {
        let table = OrbTable::new();
        let chart: Vec<_> = lons
            .iter()
            .zip(ALL_BODIES)
            .map(|(&lon, body)| BodyPosition::new(body, lon, 1.0))
            .collect();
        let n = chart.len();
        let aspects = calc_all_aspects(&table, &chart);
        prop_assert!(aspects.len() <= n * n.saturating_sub(1) / 2);
    }
}
