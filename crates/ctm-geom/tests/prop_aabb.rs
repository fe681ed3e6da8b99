use ctm_geom::{Aabb, Direction, Vec3};
use proptest::prelude::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn unit_f32() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn arb_bounds() -> impl Strategy<Value = Aabb> {
    (unit_f32(), unit_f32(), unit_f32(), unit_f32(), unit_f32(), unit_f32()).prop_map(
        |(a, b, c, d, e, f)| {
            Aabb::new(
                Vec3::new(a.min(d), b.min(e), c.min(f)),
                Vec3::new(a.max(d), b.max(e), c.max(f)),
            )
        },
    )
}

fn arb_face() -> impl Strategy<Value = Direction> {
    (0usize..6).prop_map(|i| Direction::ALL[i])
}

proptest! {
    // Scaling keeps the centre fixed and scales extents linearly.
    #[test]
    fn scale_preserves_center(bb in arb_bounds(), sx in unit_f32(), sy in unit_f32(), sz in unit_f32()) {
        let s = bb.scale(sx, sy, sz);
        prop_assert!(vapprox(s.center(), bb.center(), 1e-5));
        let e = bb.extents();
        prop_assert!(vapprox(s.extents(), Vec3::new(e.x * sx, e.y * sy, e.z * sz), 1e-5));
    }

    // Scale factor of one is the identity.
    #[test]
    fn scale_identity(bb in arb_bounds()) {
        let s = bb.scale(1.0, 1.0, 1.0);
        prop_assert!(vapprox(s.min, bb.min, 1e-6));
        prop_assert!(vapprox(s.max, bb.max, 1e-6));
    }

    // Every face corner is a corner of the box and the four are distinct for solid boxes.
    #[test]
    fn face_corners_are_box_corners(face in arb_face()) {
        let bb = Aabb::new(Vec3::new(0.1, 0.2, 0.3), Vec3::new(0.9, 0.8, 0.7));
        let cs = bb.corners_for_face(face);
        for c in cs {
            prop_assert!(c.x == bb.min.x || c.x == bb.max.x);
            prop_assert!(c.y == bb.min.y || c.y == bb.max.y);
            prop_assert!(c.z == bb.min.z || c.z == bb.max.z);
        }
        for i in 0..4 {
            for j in (i + 1)..4 {
                prop_assert!(cs[i] != cs[j]);
            }
        }
    }
}
