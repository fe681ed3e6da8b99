use ctm_geom::{Direction, Vec2};
use serde::{Deserialize, Serialize};

pub type BlockId = u16;
/// Per-cell variant value (metadata).
pub type BlockMeta = u8;

// Compact voxel representation used at runtime
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub meta: BlockMeta,
}

impl Block {
    #[inline]
    pub const fn new(id: BlockId, meta: BlockMeta) -> Self {
        Self { id, meta }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct MaterialId(pub u16);

// Used by cube-like shapes to resolve which material to apply
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}

impl FaceRole {
    #[inline]
    pub fn of(dir: Direction) -> FaceRole {
        match dir {
            Direction::Up => FaceRole::Top,
            Direction::Down => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }
}

/// Sub-rectangle of the texture atlas, in normalized atlas coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    pub const FULL: UvRect = UvRect {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };

    #[inline]
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.u1 - self.u0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.v1 - self.v0
    }

    /// Maps a `[0,1]^2` tile-local coordinate into this rect.
    #[inline]
    pub fn lerp(&self, local: Vec2) -> Vec2 {
        Vec2::new(
            self.u0 + local.x * self.width(),
            self.v0 + local.y * self.height(),
        )
    }

    /// Inclusive containment with a small tolerance for float noise.
    pub fn contains(&self, uv: Vec2, eps: f32) -> bool {
        let (ulo, uhi) = (self.u0.min(self.u1), self.u0.max(self.u1));
        let (vlo, vhi) = (self.v0.min(self.v1), self.v0.max(self.v1));
        uv.x >= ulo - eps && uv.x <= uhi + eps && uv.y >= vlo - eps && uv.y <= vhi + eps
    }
}

/// A resolved texture: the material it came from and where it sits in the atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Texture {
    pub material: MaterialId,
    pub uv: UvRect,
}
