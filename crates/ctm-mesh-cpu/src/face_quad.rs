use ctm_blocks::Texture;
use ctm_geom::{Aabb, Direction, Vec3};
use ctm_world::GridPos;

use crate::uv::uv_for_corner;
use crate::vertex::Vertex;

/// The four lit, UV-mapped corners of a block face, in `Aabb::corners_for_face` order.
///
/// With `translate` the quad is placed at `pos`; otherwise it stays block-local.
pub fn reference_quad(
    face: Direction,
    pos: GridPos,
    bounds: &Aabb,
    texture: &Texture,
    brightness: Option<u32>,
    color: Option<[f32; 4]>,
    translate: bool,
) -> [Vertex; 4] {
    let origin = if translate { pos.to_vec3() } else { Vec3::ZERO };
    bounds.corners_for_face(face).map(|c| {
        let p = c + origin;
        Vertex {
            pos: p,
            uv: uv_for_corner(p, origin, face, texture),
            brightness,
            color,
        }
    })
}
