use ctm_geom::{Vec2, Vec3};

/// A lit, textured vertex as handed to the vertex sink.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub uv: Vec2,
    /// Packed light value; `None` when never lit.
    pub brightness: Option<u32>,
    /// RGBA tint in `[0,1]`.
    pub color: Option<[f32; 4]>,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec3, uv: Vec2) -> Self {
        Self {
            pos,
            uv,
            brightness: None,
            color: None,
        }
    }

    #[inline]
    pub fn with_brightness(mut self, brightness: u32) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[inline]
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = Some(color);
        self
    }

    /// Copies lighting from `src`; the tint is only overwritten when `src` has one.
    #[inline]
    pub fn copy_lighting(&mut self, src: &Vertex) {
        self.brightness = src.brightness;
        if let Some(c) = src.color {
            self.color = Some(c);
        }
    }
}

/// The last vertex of `vertices` among those nearest to `p`.
pub fn closest_vertex(vertices: &[Vertex], p: Vec3) -> Option<&Vertex> {
    let mut best = None;
    let mut d2 = f32::MAX;
    for v in vertices {
        let tmp = p.distance_squared(v.pos);
        if tmp <= d2 {
            best = Some(v);
            d2 = tmp;
        }
    }
    best
}
