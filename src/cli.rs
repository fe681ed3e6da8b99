use std::path::PathBuf;

use clap::Parser;

/// Meshes the connected-texture faces of a voxel scene and reports what was built.
#[derive(Parser, Debug)]
#[command(name = "ctm")]
#[command(about = "Connected-texture face mesher", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Material catalog (TOML)
    #[arg(long, default_value = "assets/voxels/materials.toml")]
    pub materials: PathBuf,

    /// Block definitions (TOML)
    #[arg(long, default_value = "assets/voxels/blocks.toml")]
    pub blocks: PathBuf,

    /// Scene: placed voxels plus the `[renderer]` table
    #[arg(long, default_value = "assets/scenes/window.toml")]
    pub scene: PathBuf,

    /// Keep vertices block-local instead of placing them at their grid position
    #[arg(long)]
    pub local: bool,
}
