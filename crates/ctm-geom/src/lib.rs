//! Minimal geometry types for the connected-texture mesher (no renderer dependency).
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

pub mod direction;

pub use direction::{Axis, DirSet, Direction};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
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
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
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
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn distance_squared(self, rhs: Vec3) -> f32 {
        let d = self - rhs;
        d.dot(d)
    }

    /// Component-wise maximum against a scalar floor.
    #[inline]
    pub fn max_scalar(self, floor: f32) -> Vec3 {
        Vec3::new(self.x.max(floor), self.y.max(floor), self.z.max(floor))
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Texture-space coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The full block cell in block-local space.
    pub const UNIT_CUBE: Aabb = Aabb {
        min: Vec3::ZERO,
        max: Vec3::ONE,
    };

    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Scales each axis about the box centre; `1.0` leaves that axis unchanged.
    pub fn scale(&self, sx: f32, sy: f32, sz: f32) -> Aabb {
        let e = self.extents();
        let w = (e.x * (1.0 - sx)) / 2.0;
        let h = (e.y * (1.0 - sy)) / 2.0;
        let d = (e.z * (1.0 - sz)) / 2.0;
        Aabb {
            min: Vec3::new(self.min.x + w, self.min.y + h, self.min.z + d),
            max: Vec3::new(self.max.x - w, self.max.y - h, self.max.z - d),
        }
    }

    /// Returns the four corners of the given face, counter-clockwise when viewed
    /// from outside the box.
    pub fn corners_for_face(&self, face: Direction) -> [Vec3; 4] {
        let (x0, y0, z0) = (self.min.x, self.min.y, self.min.z);
        let (x1, y1, z1) = (self.max.x, self.max.y, self.max.z);
        match face {
            Direction::Down => [
                Vec3::new(x0, y0, z0),
                Vec3::new(x1, y0, z0),
                Vec3::new(x1, y0, z1),
                Vec3::new(x0, y0, z1),
            ],
            Direction::Up => [
                Vec3::new(x1, y1, z1),
                Vec3::new(x1, y1, z0),
                Vec3::new(x0, y1, z0),
                Vec3::new(x0, y1, z1),
            ],
            Direction::North => [
                Vec3::new(x0, y0, z0),
                Vec3::new(x0, y1, z0),
                Vec3::new(x1, y1, z0),
                Vec3::new(x1, y0, z0),
            ],
            Direction::South => [
                Vec3::new(x0, y0, z1),
                Vec3::new(x1, y0, z1),
                Vec3::new(x1, y1, z1),
                Vec3::new(x0, y1, z1),
            ],
            Direction::West => [
                Vec3::new(x0, y0, z0),
                Vec3::new(x0, y0, z1),
                Vec3::new(x0, y1, z1),
                Vec3::new(x0, y1, z0),
            ],
            Direction::East => [
                Vec3::new(x1, y1, z1),
                Vec3::new(x1, y0, z1),
                Vec3::new(x1, y0, z0),
                Vec3::new(x1, y1, z0),
            ],
        }
    }
}
