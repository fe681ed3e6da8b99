use std::fmt;
use std::sync::Arc;

use ctm_blocks::{BlockId, BlockMeta, BlockRegistry, Texture};
use ctm_geom::Direction;

/// Picks the border texture for a face.
#[derive(Clone)]
pub enum TextureSelector {
    /// Same texture on every face.
    Fixed(Texture),
    /// A reference block's own texture for the face, at a fixed metadata.
    FromBlock { block: BlockId, meta: BlockMeta },
    /// Caller-supplied lookup.
    Custom(Arc<dyn Fn(Direction) -> Option<Texture> + Send + Sync>),
}

impl TextureSelector {
    pub fn custom(f: impl Fn(Direction) -> Option<Texture> + Send + Sync + 'static) -> Self {
        TextureSelector::Custom(Arc::new(f))
    }

    /// `None` means the face gets no border at all.
    pub fn texture_for(&self, dir: Direction, registry: &BlockRegistry) -> Option<Texture> {
        match self {
            TextureSelector::Fixed(t) => Some(*t),
            TextureSelector::FromBlock { block, meta } => registry.texture_for(*block, dir, *meta),
            TextureSelector::Custom(f) => f(dir),
        }
    }
}

impl fmt::Debug for TextureSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureSelector::Fixed(t) => f.debug_tuple("Fixed").field(t).finish(),
            TextureSelector::FromBlock { block, meta } => f
                .debug_struct("FromBlock")
                .field("block", block)
                .field("meta", meta)
                .finish(),
            TextureSelector::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
