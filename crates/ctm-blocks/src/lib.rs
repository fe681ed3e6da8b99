//! Block, material, and registry crate.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod material;
pub mod registry;
pub mod types;

pub use error::ConfigError;
pub use material::MaterialCatalog;
pub use registry::{BlockRegistry, BlockType};
pub use types::{Block, BlockId, BlockMeta, FaceRole, MaterialId, Texture, UvRect};
