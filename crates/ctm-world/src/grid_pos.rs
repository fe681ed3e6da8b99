use core::ops::Add;

use ctm_geom::{Direction, Vec3};
use serde::{Deserialize, Serialize};

/// Integer voxel cell coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighboring cell one step in `dir`.
    #[inline]
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Minimum corner of the cell in world space.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    pub fn distance_sq(self, other: GridPos) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        let dz = i64::from(self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

impl Add<Direction> for GridPos {
    type Output = GridPos;
    #[inline]
    fn add(self, dir: Direction) -> GridPos {
        self.offset(dir)
    }
}

impl From<(i32, i32, i32)> for GridPos {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<[i32; 3]> for GridPos {
    fn from(value: [i32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<GridPos> for (i32, i32, i32) {
    fn from(value: GridPos) -> Self {
        (value.x, value.y, value.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_then_opposite_returns_home() {
        let p = GridPos::new(3, -2, 7);
        for d in Direction::ALL {
            let n = p + d;
            assert_eq!(p.distance_sq(n), 1);
            assert_eq!(n + d.opposite(), p);
        }
    }
}
