//! Edge connectivity: which in-plane edges of a face border a cell that does not
//! continue its texture.

use ctm_blocks::{BlockId, BlockMeta, BlockRegistry};
use ctm_geom::{DirSet, Direction};
use ctm_world::{BlockAccess, GridPos};

/// Edges of a face that need a border. Always a subset of the face's four edges.
pub type EdgeSet = DirSet;

/// Decides whether a neighbor continues the connected texture of a block.
pub trait ConnectionPolicy {
    fn connects(&self, here: BlockId, other: BlockId) -> bool;

    #[inline]
    fn matches_metadata(&self, _here: BlockMeta, _other: BlockMeta) -> bool {
        true
    }
}

impl<P: ConnectionPolicy + ?Sized> ConnectionPolicy for &P {
    #[inline]
    fn connects(&self, here: BlockId, other: BlockId) -> bool {
        (**self).connects(here, other)
    }

    #[inline]
    fn matches_metadata(&self, here: BlockMeta, other: BlockMeta) -> bool {
        (**self).matches_metadata(here, other)
    }
}

/// Registry-driven policy: same block or shared `connect_group`, with metadata
/// compared only when `match_metadata` is set.
#[derive(Clone, Copy, Debug)]
pub struct RegistryConnectivity<'a> {
    pub registry: &'a BlockRegistry,
    pub match_metadata: bool,
}

impl ConnectionPolicy for RegistryConnectivity<'_> {
    #[inline]
    fn connects(&self, here: BlockId, other: BlockId) -> bool {
        self.registry.textures_connect(here, other)
    }

    #[inline]
    fn matches_metadata(&self, here: BlockMeta, other: BlockMeta) -> bool {
        !self.match_metadata || here == other
    }
}

/// Adapts a plain `Fn(here, other) -> bool`; metadata is ignored.
#[derive(Clone, Copy, Debug)]
pub struct FnConnectivity<F>(pub F);

impl<F: Fn(BlockId, BlockId) -> bool> ConnectionPolicy for FnConnectivity<F> {
    #[inline]
    fn connects(&self, here: BlockId, other: BlockId) -> bool {
        (self.0)(here, other)
    }
}

/// Computes the open edges of `face` for the block at `pos`.
///
/// An edge is open when the neighbor across it is empty, does not connect, or
/// fails the metadata check. An empty cell has no open edges.
pub fn open_edges<W, P>(world: &W, pos: GridPos, face: Direction, policy: &P) -> EdgeSet
where
    W: BlockAccess + ?Sized,
    P: ConnectionPolicy + ?Sized,
{
    let Some(here) = world.block_at(pos) else {
        return EdgeSet::EMPTY;
    };
    let here_meta = world.metadata_at(pos);
    let mut out = EdgeSet::EMPTY;
    for edge in face.edges() {
        let n = pos.offset(edge);
        let open = match world.block_at(n) {
            None => true,
            Some(other) => {
                !policy.connects(here, other)
                    || !policy.matches_metadata(here_meta, world.metadata_at(n))
            }
        };
        if open {
            out.insert(edge);
        }
    }
    out
}
