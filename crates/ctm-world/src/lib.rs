//! Grid positions and the read-only block query interface used by the mesher.
#![forbid(unsafe_code)]

pub mod grid;
pub mod grid_pos;

pub use grid::VoxelGrid;
pub use grid_pos::GridPos;

use ctm_blocks::{Block, BlockId, BlockMeta};

/// Read-only access to the voxel grid. Implementations must be pure reads.
pub trait BlockAccess {
    /// The block occupying `pos`, or `None` for an empty cell.
    fn block_at(&self, pos: GridPos) -> Option<BlockId>;

    /// Metadata (variant) of the cell at `pos`; `0` for empty cells.
    fn metadata_at(&self, pos: GridPos) -> BlockMeta;

    #[inline]
    fn cell(&self, pos: GridPos) -> Option<Block> {
        self.block_at(pos)
            .map(|id| Block::new(id, self.metadata_at(pos)))
    }
}

impl<T: BlockAccess + ?Sized> BlockAccess for &T {
    #[inline]
    fn block_at(&self, pos: GridPos) -> Option<BlockId> {
        (**self).block_at(pos)
    }

    #[inline]
    fn metadata_at(&self, pos: GridPos) -> BlockMeta {
        (**self).metadata_at(pos)
    }
}
