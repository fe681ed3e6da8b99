use ctm_blocks::Texture;
use ctm_geom::{Direction, Vec2, Vec3};

// Planes (a, b, c, d) evaluated as a*x + b*y + c*z + d on block-local points.
// Indexed by Direction::index(): Down, Up, North, South, West, East.
const U_PLANES: [[f32; 4]; 6] = [
    [1.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0, 1.0],
];

const V_PLANES: [[f32; 4]; 6] = [
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0, 1.0],
    [0.0, -1.0, 0.0, 1.0],
    [0.0, -1.0, 0.0, 1.0],
    [0.0, -1.0, 0.0, 1.0],
];

#[inline]
fn plane_distance(plane: &[f32; 4], p: Vec3) -> f32 {
    plane[0] * p.x + plane[1] * p.y + plane[2] * p.z + plane[3]
}

/// Tile-local `[0,1]^2` coordinate of a block-local point on `face`.
#[inline]
pub fn face_local_uv(p: Vec3, face: Direction) -> Vec2 {
    let i = face.index();
    Vec2::new(plane_distance(&U_PLANES[i], p), plane_distance(&V_PLANES[i], p))
}

/// Projects `corner` onto `face` relative to `origin` (the cell's minimum corner, or
/// zero for block-local geometry) and maps it into the texture's atlas rect.
#[inline]
pub fn uv_for_corner(corner: Vec3, origin: Vec3, face: Direction, texture: &Texture) -> Vec2 {
    texture.uv.lerp(face_local_uv(corner - origin, face))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctm_blocks::{MaterialId, UvRect};
    use ctm_geom::Aabb;

    #[test]
    fn unit_face_corners_map_to_tile_corners() {
        for face in Direction::ALL {
            let mut seen = Vec::new();
            for c in Aabb::UNIT_CUBE.corners_for_face(face) {
                let uv = face_local_uv(c, face);
                assert!(uv.x == 0.0 || uv.x == 1.0, "{face:?} {uv:?}");
                assert!(uv.y == 0.0 || uv.y == 1.0, "{face:?} {uv:?}");
                assert!(!seen.contains(&uv));
                seen.push(uv);
            }
        }
    }

    #[test]
    fn world_origin_cancels_translation() {
        let t = Texture {
            material: MaterialId(0),
            uv: UvRect::new(0.25, 0.5, 0.5, 0.75),
        };
        let origin = Vec3::new(10.0, -3.0, 4.0);
        let local = Vec3::new(0.25, 1.0, 0.75);
        let a = uv_for_corner(local, Vec3::ZERO, Direction::Up, &t);
        let b = uv_for_corner(local + origin, origin, Direction::Up, &t);
        assert_eq!(a, b);
        assert_eq!(a, Vec2::new(0.25 + 0.25 * 0.25, 0.5 + 0.75 * 0.25));
    }
}
