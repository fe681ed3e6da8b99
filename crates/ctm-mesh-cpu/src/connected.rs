//! Connected-texture face mesher: border strips along open edges, a shrunk
//! interior, and small corner fills where a neighbor's border meets this face.

use ctm_blocks::{BlockId, BlockMeta, BlockRegistry, Texture};
use ctm_geom::{Aabb, DirSet, Direction, Vec3};
use ctm_world::{BlockAccess, GridPos};

use crate::constants::{CORNER_FLOOR, CORNER_INSET, CORNER_NUDGE, DEFAULT_SCALE_FACTOR};
use crate::edges::{ConnectionPolicy, EdgeSet, RegistryConnectivity, open_edges};
use crate::mesh_build::{VertexSink, submit_quads};
use crate::texture::TextureSelector;
use crate::uv::uv_for_corner;
use crate::vertex::{Vertex, closest_vertex};

/// Collaborators for one meshing call: the grid being read and the block registry
/// that supplies bounds and textures.
pub struct FaceContext<'a, W: ?Sized> {
    pub world: &'a W,
    pub registry: &'a BlockRegistry,
}

impl<W: ?Sized> Clone for FaceContext<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: ?Sized> Copy for FaceContext<'_, W> {}

impl<'a, W: BlockAccess + ?Sized> FaceContext<'a, W> {
    #[inline]
    pub fn new(world: &'a W, registry: &'a BlockRegistry) -> Self {
        Self { world, registry }
    }

    /// Render bounds of the block at `pos`; an empty cell counts as a full cube.
    #[inline]
    pub fn bounds_at(&self, pos: GridPos) -> Aabb {
        self.world
            .block_at(pos)
            .map_or(Aabb::UNIT_CUBE, |id| self.registry.bounds_of(id))
    }
}

/// Renderer configuration. Read-only while meshing, so one instance can serve
/// any number of faces and threads.
#[derive(Clone, Debug)]
pub struct ConnectedTextureRenderer {
    force_all_edges: bool,
    match_metadata: bool,
    sides_to_render: DirSet,
    edge_texture: Option<TextureSelector>,
    scale_factor: f32,
}

impl Default for ConnectedTextureRenderer {
    fn default() -> Self {
        Self {
            force_all_edges: false,
            match_metadata: false,
            sides_to_render: DirSet::ALL,
            edge_texture: None,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl ConnectedTextureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn force_all_edges(&self) -> bool {
        self.force_all_edges
    }

    /// Border every edge regardless of neighbors.
    pub fn set_force_all_edges(&mut self, force: bool) {
        self.force_all_edges = force;
    }

    #[inline]
    pub fn match_metadata(&self) -> bool {
        self.match_metadata
    }

    pub fn set_match_metadata(&mut self, on: bool) {
        self.match_metadata = on;
    }

    /// True when two metadata values count as the same variant under the current setting.
    #[inline]
    pub fn matches_metadata(&self, a: BlockMeta, b: BlockMeta) -> bool {
        !self.match_metadata || a == b
    }

    #[inline]
    pub fn sides_to_render(&self) -> DirSet {
        self.sides_to_render
    }

    pub fn set_sides_to_render(&mut self, sides: DirSet) {
        self.sides_to_render = sides;
    }

    #[inline]
    pub fn edge_texture(&self) -> Option<&TextureSelector> {
        self.edge_texture.as_ref()
    }

    pub fn set_edge_texture_selector(&mut self, selector: Option<TextureSelector>) {
        self.edge_texture = selector;
    }

    /// Installs a fixed border texture, or clears border rendering with `None`.
    pub fn set_edge_texture(&mut self, texture: Option<Texture>) {
        self.edge_texture = texture.map(TextureSelector::Fixed);
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, scale: f32) {
        self.scale_factor = scale;
    }

    /// The registry-backed connection rule matching this renderer's metadata setting.
    #[inline]
    pub fn connectivity<'a>(&self, registry: &'a BlockRegistry) -> RegistryConnectivity<'a> {
        RegistryConnectivity {
            registry,
            match_metadata: self.match_metadata,
        }
    }

    /// Meshes one face and submits the result to `sink`, four vertices per quad.
    pub fn render_face<W, S>(
        &self,
        ctx: &FaceContext<'_, W>,
        face: Direction,
        pos: GridPos,
        ref_quad: &[Vertex],
        translate_to_pos: bool,
        sink: &mut S,
    ) where
        W: BlockAccess + ?Sized,
        S: VertexSink,
    {
        let policy = self.connectivity(ctx.registry);
        self.render_face_with(ctx, &policy, face, pos, ref_quad, translate_to_pos, sink);
    }

    /// Like [`render_face`](Self::render_face) with a caller-supplied connection rule.
    #[allow(clippy::too_many_arguments)]
    pub fn render_face_with<W, P, S>(
        &self,
        ctx: &FaceContext<'_, W>,
        policy: &P,
        face: Direction,
        pos: GridPos,
        ref_quad: &[Vertex],
        translate_to_pos: bool,
        sink: &mut S,
    ) where
        W: BlockAccess + ?Sized,
        P: ConnectionPolicy + ?Sized,
        S: VertexSink,
    {
        let verts = self.build_face_with(ctx, policy, face, pos, ref_quad, translate_to_pos);
        submit_quads(&verts, sink);
    }

    /// Builds the vertex list for one face using the registry connection rule.
    pub fn build_face<W>(
        &self,
        ctx: &FaceContext<'_, W>,
        face: Direction,
        pos: GridPos,
        ref_quad: &[Vertex],
        translate_to_pos: bool,
    ) -> Vec<Vertex>
    where
        W: BlockAccess + ?Sized,
    {
        let policy = self.connectivity(ctx.registry);
        self.build_face_with(ctx, &policy, face, pos, ref_quad, translate_to_pos)
    }

    /// Builds the vertex list for one face: the (possibly shrunk) reference quad,
    /// then one strip per open edge, then one quad per corner fill.
    ///
    /// Returns nothing for a face outside `sides_to_render`, and the untouched
    /// reference quad when no border texture applies to the face.
    pub fn build_face_with<W, P>(
        &self,
        ctx: &FaceContext<'_, W>,
        policy: &P,
        face: Direction,
        pos: GridPos,
        ref_quad: &[Vertex],
        translate_to_pos: bool,
    ) -> Vec<Vertex>
    where
        W: BlockAccess + ?Sized,
        P: ConnectionPolicy + ?Sized,
    {
        if !self.sides_to_render.contains(face) {
            return Vec::new();
        }
        let mut refs = ref_quad.to_vec();
        let Some(texture) = self
            .edge_texture
            .as_ref()
            .and_then(|sel| sel.texture_for(face, ctx.registry))
        else {
            return refs;
        };

        let policy = MetadataGate {
            inner: policy,
            match_metadata: self.match_metadata,
        };
        let open = if self.force_all_edges {
            EdgeSet::edges_of(face)
        } else {
            open_edges(ctx.world, pos, face, &policy)
        };
        let bounds = ctx.bounds_at(pos);
        let origin = if translate_to_pos {
            pos.to_vec3()
        } else {
            Vec3::ZERO
        };

        let mut strips = Vec::with_capacity(open.len() * 4);
        for edge in face.edges().into_iter().filter(|e| open.contains(*e)) {
            shrink_toward(&mut refs, edge, 1.0 - self.scale_factor);
            let len = strip_extents(edge, self.scale_factor, &bounds);
            let shift = strip_shift(edge, len);
            for c in Aabb::UNIT_CUBE
                .scale(len.x, len.y, len.z)
                .corners_for_face(face)
            {
                let p = c + origin + shift;
                let mut v = Vertex::new(p, uv_for_corner(p, origin, face, &texture));
                if let Some(src) = closest_vertex(&refs, p) {
                    v.copy_lighting(src);
                }
                strips.push(v);
            }
        }

        let mut corners = Vec::new();
        let edges = face.edges();
        for i in 0..4 {
            let (d1, d2) = (edges[i], edges[(i + 1) % 4]);
            if needs_corner(ctx.world, &policy, open, face, pos, d1, d2) {
                push_corner_quad(
                    &mut corners,
                    face,
                    d1,
                    d2,
                    &bounds,
                    origin,
                    &texture,
                    &refs,
                );
            }
        }

        log::trace!(
            "ctm face {:?} at {:?}: open={:?} strips={} corners={}",
            face,
            pos,
            open,
            strips.len() / 4,
            corners.len() / 4
        );

        refs.reserve(strips.len() + corners.len());
        refs.extend(strips);
        refs.extend(corners);
        refs
    }
}

// Applies the renderer's own metadata rule on top of whatever policy is in use.
struct MetadataGate<'a, P: ?Sized> {
    inner: &'a P,
    match_metadata: bool,
}

impl<P: ConnectionPolicy + ?Sized> ConnectionPolicy for MetadataGate<'_, P> {
    #[inline]
    fn connects(&self, here: BlockId, other: BlockId) -> bool {
        self.inner.connects(here, other)
    }

    #[inline]
    fn matches_metadata(&self, here: BlockMeta, other: BlockMeta) -> bool {
        (!self.match_metadata || here == other) && self.inner.matches_metadata(here, other)
    }
}

/// Moves the reference vertices extremal along `edge` (max for positive edges,
/// min for negative) inward by `amount`.
///
/// Scans in order: a strictly new extreme takes the first slot, an equal value
/// takes the second. A slot that was never filled is skipped.
fn shrink_toward(refs: &mut [Vertex], edge: Direction, amount: f32) {
    let positive = edge.is_positive();
    let mut extreme = if positive { f32::MIN } else { f32::MAX };
    let mut slots: [Option<usize>; 2] = [None, None];
    for (i, v) in refs.iter().enumerate() {
        let val = v.pos.along(edge);
        let hit = if positive {
            val >= extreme
        } else {
            val <= extreme
        };
        if hit {
            if val != extreme {
                slots[0] = Some(i);
            } else {
                slots[1] = Some(i);
            }
            extreme = val;
        }
    }
    let Some(first) = slots[0] else {
        return;
    };
    let step = edge.scaled(amount);
    refs[first].pos -= step;
    if let Some(second) = slots[1] {
        refs[second].pos -= step;
    }
}

/// Per-axis size of the border strip box for `edge`, corrected for block bounds.
#[inline]
fn strip_extents(edge: Direction, scale: f32, bounds: &Aabb) -> Vec3 {
    let (dx, dy, dz) = edge.offset();
    let len = |d: i32, min: f32, max: f32| {
        1.0 - d.abs() as f32 * scale - (2.0 * (1.0 - max) - min)
    };
    Vec3::new(
        len(dx, bounds.min.x, bounds.max.x),
        len(dy, bounds.min.y, bounds.max.y),
        len(dz, bounds.min.z, bounds.max.z),
    )
}

/// Offset that slides the centred strip box against `edge`.
#[inline]
fn strip_shift(edge: Direction, len: Vec3) -> Vec3 {
    let (dx, dy, dz) = edge.offset();
    // Integer signum: axes the edge does not run along stay put.
    let shift = |d: i32, l: f32| d as f32 * 0.5 - d.signum() as f32 * l / 2.0;
    Vec3::new(shift(dx, len.x), shift(dy, len.y), shift(dz, len.z))
}

/// A corner between `d1` and `d2` is filled when neither edge is open here but
/// one of the two neighbors across them has its border running into the corner.
fn needs_corner<W, P>(
    world: &W,
    policy: &P,
    open: EdgeSet,
    face: Direction,
    pos: GridPos,
    d1: Direction,
    d2: Direction,
) -> bool
where
    W: BlockAccess + ?Sized,
    P: ConnectionPolicy + ?Sized,
{
    if open.contains(d1) || open.contains(d2) {
        return false;
    }
    open_edges(world, pos.offset(d1), face, policy).contains(d2)
        || open_edges(world, pos.offset(d2), face, policy).contains(d1)
}

#[allow(clippy::too_many_arguments)]
fn push_corner_quad(
    out: &mut Vec<Vertex>,
    face: Direction,
    d1: Direction,
    d2: Direction,
    bounds: &Aabb,
    origin: Vec3,
    texture: &Texture,
    refs: &[Vertex],
) {
    let mut tip = (d1.unit() + d2.unit() + face.scaled(CORNER_NUDGE)).max_scalar(CORNER_FLOOR);
    tip -= Vec3::new(
        (1.0 - bounds.max.x) - bounds.min.x,
        (1.0 - bounds.max.y) - bounds.min.y,
        (1.0 - bounds.max.z) - bounds.min.z,
    );
    if face.is_positive() {
        tip += face.unit();
    }
    tip += origin;

    let mut lit = Vertex::new(tip, uv_for_corner(tip, origin, face, texture));
    if let Some(src) = closest_vertex(refs, tip) {
        lit.copy_lighting(src);
    }
    out.push(lit);

    let insets = if face.is_positive() {
        [d2.unit(), d1.unit() + d2.unit(), d1.unit()]
    } else {
        [d1.unit(), d1.unit() + d2.unit(), d2.unit()]
    };
    for inset in insets {
        let p = tip - inset * CORNER_INSET;
        let mut v = Vertex::new(p, uv_for_corner(p, origin, face, texture));
        v.copy_lighting(&lit);
        out.push(v);
    }
}
