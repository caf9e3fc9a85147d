use karst_geom::{Camera, Cuboid, Point3, Vec3};

#[test]
fn point3_constants_and_splat() {
    assert_eq!(Point3::ZERO, Point3::new(0, 0, 0));
    assert_eq!(Point3::ONE, Point3::new(1, 1, 1));
    assert_eq!(Point3::splat(7), Point3::new(7, 7, 7));
}

#[test]
fn point3_componentwise_ops() {
    let a = Point3::new(1, 2, 3);
    let b = Point3::new(4, -5, 6);
    assert_eq!(a + b, Point3::new(5, -3, 9));
    assert_eq!(a - b, Point3::new(-3, 7, -3));
    assert_eq!(a * b, Point3::new(4, -10, 18));
    assert_eq!(Point3::new(8, 9, 10) / Point3::new(2, 3, 5), Point3::new(4, 3, 2));
    assert_eq!(a * 3, Point3::new(3, 6, 9));
    assert_eq!(Point3::new(9, 12, 15) / 3, Point3::new(3, 4, 5));
}

#[test]
fn floor_div_handles_negatives() {
    // Truncating division would map -1 to chunk 0; floor division must not.
    let p = Point3::new(-1, 16, 31);
    assert_eq!(p.floor_div(16), Point3::new(-1, 1, 1));
    assert_eq!(Point3::new(-16, -17, 0).floor_div(16), Point3::new(-1, -2, 0));
}

#[test]
fn distance_is_euclidean() {
    let a = Point3::new(0, 0, 0);
    let b = Point3::new(3, 4, 0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(Point3::new(1, 1, 1).distance(Point3::new(2, 2, 2)), 3f32.sqrt());
}

#[test]
fn to_vec3_is_explicit_and_exact() {
    let v = Point3::new(-2, 7, 300).to_vec3();
    assert_eq!(v, Vec3::new(-2.0, 7.0, 300.0));
}

#[test]
fn cuboid_is_half_open() {
    let c = Cuboid::new(Point3::ZERO, Point3::splat(2));
    assert!(c.contains(Point3::new(0, 0, 0)));
    assert!(c.contains(Point3::new(1, 1, 1)));
    assert!(!c.contains(Point3::new(2, 0, 0)));
    assert!(!c.contains(Point3::new(0, 2, 0)));
    assert!(!c.contains(Point3::new(0, 0, 2)));
    assert!(!c.contains(Point3::new(-1, 0, 0)));
    assert_eq!(c.volume(), 8);
    assert_eq!(c.cells().count(), 8);
}

#[test]
fn degenerate_cuboid_is_empty() {
    let c = Cuboid::new(Point3::splat(3), Point3::splat(3));
    assert_eq!(c.volume(), 0);
    assert_eq!(c.cells().count(), 0);
    assert!(!c.contains(Point3::splat(3)));

    let inverted = Cuboid::new(Point3::splat(4), Point3::ZERO);
    assert_eq!(inverted.volume(), 0);
    assert_eq!(inverted.cells().count(), 0);
}

#[test]
fn camera_carries_view_params() {
    let cam = Camera::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
    assert_eq!(cam.position.y, 10.0);
    assert_eq!((cam.position - cam.target).length(), 10.0);
}
