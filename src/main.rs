mod cli;
mod scene;

use std::error::Error;
use std::time::Instant;

use clap::Parser;
use ctm_blocks::BlockRegistry;
use ctm_mesh_cpu::MeshBuild;

use crate::cli::Cli;
use crate::scene::Scene;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let reg = BlockRegistry::load_from_paths(&args.materials, &args.blocks)?;
    let scene = Scene::load(&args.scene, &reg)?;
    log::info!(
        "scene {}: {} voxels, target block `{}`",
        args.scene.display(),
        scene.grid.len(),
        scene.target_name
    );

    let start = Instant::now();
    let mut mb = MeshBuild::default();
    let stats = scene.mesh(&reg, !args.local, &mut mb);
    let total_ms = start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
    log::info!(
        target: "perf",
        "ms total={} ctm_scene blocks={} faces={} hidden={} quads={} verts={}",
        total_ms,
        stats.blocks,
        stats.faces,
        stats.hidden,
        mb.quad_count(),
        mb.vertex_count()
    );
    Ok(())
}
