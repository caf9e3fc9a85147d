use karst_geom::{Cuboid, Point3};
use proptest::prelude::*;

fn small_i32() -> impl Strategy<Value = i32> {
    -10_000i32..=10_000
}

fn arb_point() -> impl Strategy<Value = Point3> {
    (small_i32(), small_i32(), small_i32()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

proptest! {
    // Componentwise add/sub are inverses
    #[test]
    fn add_sub_roundtrip(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(a + b - b, a);
        prop_assert_eq!(a - b + b, a);
    }

    // Scalar ops agree with splat point ops
    #[test]
    fn scalar_ops_match_splat(p in arb_point(), s in 1i32..=64) {
        prop_assert_eq!(p * s, p * Point3::splat(s));
        prop_assert_eq!(p / s, p / Point3::splat(s));
        prop_assert_eq!(p + s, p + Point3::splat(s));
        prop_assert_eq!(p - s, p - Point3::splat(s));
    }

    // floor_div floors toward negative infinity on every component
    #[test]
    fn floor_div_floors(p in arb_point(), s in 1i32..=64) {
        let q = p.floor_div(s);
        for (c, qc) in [(p.x, q.x), (p.y, q.y), (p.z, q.z)] {
            prop_assert!(qc * s <= c);
            prop_assert!(c < (qc + 1) * s);
        }
    }

    // floor_div and truncating Div agree exactly on non-negative input
    #[test]
    fn floor_div_matches_trunc_for_non_negative(
        x in 0i32..=10_000, y in 0i32..=10_000, z in 0i32..=10_000, s in 1i32..=64,
    ) {
        let p = Point3::new(x, y, z);
        prop_assert_eq!(p.floor_div(s), p / s);
    }

    // clamp lands inside the inclusive box and is idempotent
    #[test]
    fn clamp_in_bounds(p in arb_point(), a in arb_point(), b in arb_point()) {
        let min = Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        let c = p.clamp(min, max);
        prop_assert!(c.x >= min.x && c.x <= max.x);
        prop_assert!(c.y >= min.y && c.y <= max.y);
        prop_assert!(c.z >= min.z && c.z <= max.z);
        prop_assert_eq!(c.clamp(min, max), c);
    }

    // distance is symmetric and zero iff equal
    #[test]
    fn distance_symmetric(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert_eq!(a.distance(a), 0.0);
        if a != b {
            prop_assert!(a.distance(b) > 0.0);
        }
    }

    // Half-open containment agrees with cell enumeration
    #[test]
    fn cuboid_contains_matches_cells(a in arb_point(), d in (0i32..=4, 0i32..=4, 0i32..=4)) {
        let max = Point3::new(a.x + d.0, a.y + d.1, a.z + d.2);
        let c = Cuboid::new(a, max);
        let cells: Vec<Point3> = c.cells().collect();
        prop_assert_eq!(cells.len() as u64, c.volume());
        for p in &cells {
            prop_assert!(c.contains(*p));
        }
        // Max corner is excluded on every axis
        prop_assert!(!c.contains(max));
        prop_assert!(!c.contains(Point3::new(max.x, a.y, a.z)));
    }
}
