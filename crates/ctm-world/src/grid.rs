use ctm_blocks::{Block, BlockId, BlockMeta};
use hashbrown::HashMap;

use crate::{BlockAccess, GridPos};

// Upper bound on the up-front reservation made by `fill`.
const MAX_FILL_RESERVE: usize = 1 << 20;

/// Sparse voxel storage keyed by cell. Cells not present are empty.
#[derive(Clone, Debug, Default)]
pub struct VoxelGrid {
    cells: HashMap<GridPos, Block>,
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Places a block, returning whatever occupied the cell before.
    pub fn set(&mut self, pos: GridPos, block: Block) -> Option<Block> {
        self.cells.insert(pos, block)
    }

    pub fn remove(&mut self, pos: GridPos) -> Option<Block> {
        self.cells.remove(&pos)
    }

    #[inline]
    pub fn get(&self, pos: GridPos) -> Option<Block> {
        self.cells.get(&pos).copied()
    }

    /// Fills the inclusive box spanned by `a` and `b`.
    pub fn fill(&mut self, a: GridPos, b: GridPos, block: Block) {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        let (z0, z1) = (a.z.min(b.z), a.z.max(b.z));
        if let Some(n) = box_volume(a, b) {
            self.cells.reserve(n.min(MAX_FILL_RESERVE));
        }
        for y in y0..=y1 {
            for z in z0..=z1 {
                for x in x0..=x1 {
                    self.cells.insert(GridPos::new(x, y, z), block);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Block)> + '_ {
        self.cells.iter().map(|(p, b)| (*p, *b))
    }
}

impl BlockAccess for VoxelGrid {
    #[inline]
    fn block_at(&self, pos: GridPos) -> Option<BlockId> {
        self.cells.get(&pos).map(|b| b.id)
    }

    #[inline]
    fn metadata_at(&self, pos: GridPos) -> BlockMeta {
        self.cells.get(&pos).map_or(0, |b| b.meta)
    }
}

// Cell count of the inclusive box spanned by `a` and `b`, if it fits in a usize.
fn box_volume(a: GridPos, b: GridPos) -> Option<usize> {
    let span = |p: i32, q: i32| (i64::from(p) - i64::from(q)).unsigned_abs() + 1;
    span(a.x, b.x)
        .checked_mul(span(a.y, b.y))?
        .checked_mul(span(a.z, b.z))
        .and_then(|n| usize::try_from(n).ok())
}
