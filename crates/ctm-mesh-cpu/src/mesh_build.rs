use ctm_geom::Vec3;

use crate::constants::OPAQUE_WHITE;
use crate::vertex::Vertex;

/// Destination for finished quads (the host's vertex buffer).
pub trait VertexSink {
    fn submit_quad(&mut self, quad: [Vertex; 4]);
}

impl VertexSink for Vec<[Vertex; 4]> {
    #[inline]
    fn submit_quad(&mut self, quad: [Vertex; 4]) {
        self.push(quad);
    }
}

// Flat vertex list, four entries per quad.
impl VertexSink for Vec<Vertex> {
    #[inline]
    fn submit_quad(&mut self, quad: [Vertex; 4]) {
        self.extend_from_slice(&quad);
    }
}

/// Submits `vertices` four at a time; a trailing partial quad is dropped.
pub fn submit_quads(vertices: &[Vertex], sink: &mut impl VertexSink) {
    let chunks = vertices.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        log::warn!(
            "dropping {} trailing vertices (not a whole quad)",
            chunks.remainder().len()
        );
    }
    for q in chunks {
        sink.submit_quad([q[0], q[1], q[2], q[3]]);
    }
}

/// Indexed triangle buffers ready for upload.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub col: Vec<u8>,
    pub light: Vec<u32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across frames.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.col.clear();
        self.light.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.col.reserve(n_quads * 4 * 4);
        self.light.reserve(n_quads * 4);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    /// Appends a quad as two triangles `(0,1,2)` and `(0,2,3)`, keeping the caller's winding.
    /// Unset brightness is written as `0`, a missing tint as opaque white.
    pub fn add_quad(&mut self, quad: &[Vertex; 4]) {
        let base = self.vertex_count() as u32;
        let n = (quad[1].pos - quad[0].pos)
            .cross(quad[2].pos - quad[0].pos)
            .normalized();
        for v in quad {
            self.pos.extend_from_slice(&[v.pos.x, v.pos.y, v.pos.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[v.uv.x, v.uv.y]);
            self.col.extend_from_slice(&v.color.map_or(OPAQUE_WHITE, rgba_u8));
            self.light.push(v.brightness.unwrap_or(0));
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }
}

impl VertexSink for MeshBuild {
    #[inline]
    fn submit_quad(&mut self, quad: [Vertex; 4]) {
        self.add_quad(&quad);
    }
}

#[inline]
fn rgba_u8(c: [f32; 4]) -> [u8; 4] {
    c.map(|ch| (ch.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctm_geom::Vec2;

    fn quad() -> [Vertex; 4] {
        [
            Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec2::new(0.0, 0.0)),
            Vertex::new(Vec3::new(0.0, 1.0, 1.0), Vec2::new(0.0, 1.0)),
            Vertex::new(Vec3::new(1.0, 1.0, 1.0), Vec2::new(1.0, 1.0)).with_brightness(7),
            Vertex::new(Vec3::new(1.0, 1.0, 0.0), Vec2::new(1.0, 0.0))
                .with_color([1.0, 0.5, 0.0, 1.0]),
        ]
    }

    #[test]
    fn add_quad_writes_two_triangles() {
        let mut mb = MeshBuild::default();
        mb.add_quad(&quad());
        mb.add_quad(&quad());
        assert_eq!(mb.vertex_count(), 8);
        assert_eq!(mb.quad_count(), 2);
        assert_eq!(&mb.idx[6..], &[4, 5, 6, 4, 6, 7]);
        // Winding (0,1,2) of this quad faces +Y.
        assert_eq!(&mb.norm[0..3], &[0.0, 1.0, 0.0]);
        assert_eq!(mb.light[2], 7);
        assert_eq!(mb.light[0], 0);
        assert_eq!(&mb.col[12..16], &[255, 128, 0, 255]);
        assert_eq!(&mb.col[0..4], &[255, 255, 255, 255]);
        mb.clear_keep_capacity();
        assert_eq!(mb.vertex_count(), 0);
        assert!(mb.pos.capacity() >= 24);
    }

    #[test]
    fn submit_quads_groups_by_four() {
        let mut flat = quad().to_vec();
        flat.extend_from_slice(&quad());
        flat.push(Vertex::default());
        let mut out: Vec<[Vertex; 4]> = Vec::new();
        submit_quads(&flat, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1][2].brightness, Some(7));

        let mut flat_out: Vec<Vertex> = Vec::new();
        submit_quads(&flat, &mut flat_out);
        assert_eq!(flat_out, flat[..8].to_vec());
    }
}
