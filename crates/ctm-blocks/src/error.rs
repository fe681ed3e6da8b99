use thiserror::Error;

/// Name-resolution failures while turning config files into runtime tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),
    #[error("unknown block `{0}`")]
    UnknownBlock(String),
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
    #[error("duplicate block `{name}` (ids {first} and {second})")]
    DuplicateBlock {
        name: String,
        first: u16,
        second: u16,
    },
    #[error("atlas tile [{col}, {row}] for `{key}` lies outside a {tiles_x}x{tiles_y} atlas")]
    TileOutOfRange {
        key: String,
        col: u16,
        row: u16,
        tiles_x: u16,
        tiles_y: u16,
    },
}
