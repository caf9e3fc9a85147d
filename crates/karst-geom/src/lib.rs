//! Integer coordinate model: points, cuboids, and the float types render math needs.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Integer 3D coordinate. The same type names both block coordinates and
/// chunk coordinates; arithmetic never rescales between the two spaces —
/// callers convert explicitly with [`Point3::floor_div`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 { x: 0, y: 0, z: 0 };
    pub const ONE: Point3 = Point3 { x: 1, y: 1, z: 1 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Componentwise floor division. Floors toward negative infinity, so
    /// `-1 / 16` maps to `-1`, not `0`; this is what block-to-chunk
    /// conversion needs for coordinates below an axis origin.
    #[inline]
    pub fn floor_div(self, s: i32) -> Self {
        Self {
            x: self.x.div_euclid(s),
            y: self.y.div_euclid(s),
            z: self.z.div_euclid(s),
        }
    }

    /// Componentwise clamp into the inclusive box `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Point3, max: Point3) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
            z: self.z.clamp(min.z, max.z),
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point3) -> f32 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt() as f32
    }

    /// Explicit conversion into float space for render math.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl Add for Point3 {
    type Output = Point3;
    #[inline]
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, rhs: Point3) {
        *self = *self + rhs;
    }
}

impl Sub for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Point3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Point3) {
        *self = *self - rhs;
    }
}

impl Mul for Point3 {
    type Output = Point3;
    #[inline]
    fn mul(self, rhs: Point3) -> Point3 {
        Point3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Point3 {
    type Output = Point3;
    /// Componentwise truncating division, like `i32`'s own `/`.
    #[inline]
    fn div(self, rhs: Point3) -> Point3 {
        Point3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Mul<i32> for Point3 {
    type Output = Point3;
    #[inline]
    fn mul(self, rhs: i32) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<i32> for Point3 {
    type Output = Point3;
    #[inline]
    fn div(self, rhs: i32) -> Point3 {
        Point3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Add<i32> for Point3 {
    type Output = Point3;
    #[inline]
    fn add(self, rhs: i32) -> Point3 {
        self + Point3::splat(rhs)
    }
}

impl Sub<i32> for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, rhs: i32) -> Point3 {
        self - Point3::splat(rhs)
    }
}

impl From<(i32, i32, i32)> for Point3 {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Point3> for (i32, i32, i32) {
    fn from(value: Point3) -> Self {
        (value.x, value.y, value.z)
    }
}

/// Axis-aligned integer box, half-open on every axis: a point is inside iff
/// `min <= p < max` componentwise. An axis with `min >= max` makes the box
/// empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cuboid {
    pub min: Point3,
    pub max: Point3,
}

impl Cuboid {
    #[inline]
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Number of cells in the box.
    #[inline]
    pub fn volume(&self) -> u64 {
        let dx = (self.max.x - self.min.x).max(0) as u64;
        let dy = (self.max.y - self.min.y).max(0) as u64;
        let dz = (self.max.z - self.min.z).max(0) as u64;
        dx * dy * dz
    }

    /// Iterates every contained cell, x innermost.
    pub fn cells(&self) -> impl Iterator<Item = Point3> + '_ {
        let min = self.min;
        let max = self.max;
        (min.z..max.z).flat_map(move |z| {
            (min.y..max.y)
                .flat_map(move |y| (min.x..max.x).map(move |x| Point3::new(x, y, z)))
        })
    }
}

/// Float 3-vector for camera/render math.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// View parameters handed to render passes. The core never interprets these
/// itself; they flow through to whatever sink submits geometry.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    #[inline]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}
