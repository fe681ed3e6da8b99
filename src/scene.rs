use std::error::Error;
use std::fs;
use std::path::Path;

use ctm_blocks::{Block, BlockId, BlockMeta, BlockRegistry, ConfigError};
use ctm_geom::Direction;
use ctm_mesh_cpu::{
    ConnectedTextureConfig, ConnectedTextureRenderer, FaceContext, MeshBuild, reference_quad,
};
use ctm_world::{BlockAccess, GridPos, VoxelGrid};
use serde::Deserialize;

// Flat per-face shading for the reference quads, indexed by Direction::index().
const FACE_LIGHT: [u32; 6] = [128, 255, 204, 204, 153, 153];

// Scene file
#[derive(Deserialize, Debug, Clone)]
pub struct SceneConfig {
    pub target_block: String,
    #[serde(default)]
    pub renderer: ConnectedTextureConfig,
    #[serde(default)]
    pub voxels: Vec<VoxelDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VoxelDef {
    pub block: String,
    pub at: [i32; 3],
    #[serde(default)]
    pub meta: BlockMeta,
    // Inclusive opposite corner; a single cell when absent
    #[serde(default)]
    pub fill_to: Option<[i32; 3]>,
}

pub struct Scene {
    pub grid: VoxelGrid,
    pub target: BlockId,
    pub target_name: String,
    pub renderer: ConnectedTextureRenderer,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    pub blocks: usize,
    pub faces: usize,
    pub hidden: usize,
}

impl Scene {
    pub fn load(path: impl AsRef<Path>, reg: &BlockRegistry) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let cfg: SceneConfig = toml::from_str(&s)?;
        Ok(Self::from_config(&cfg, reg)?)
    }

    pub fn from_config(cfg: &SceneConfig, reg: &BlockRegistry) -> Result<Self, ConfigError> {
        let target = reg
            .id_by_name(&cfg.target_block)
            .ok_or_else(|| ConfigError::UnknownBlock(cfg.target_block.clone()))?;
        let mut grid = VoxelGrid::new();
        for v in &cfg.voxels {
            let id = reg
                .id_by_name(&v.block)
                .ok_or_else(|| ConfigError::UnknownBlock(v.block.clone()))?;
            let at = GridPos::from(v.at);
            let block = Block::new(id, v.meta);
            match v.fill_to {
                Some(to) => grid.fill(at, GridPos::from(to), block),
                None => {
                    grid.set(at, block);
                }
            }
        }
        let renderer = cfg.renderer.build(reg)?;
        Ok(Scene {
            grid,
            target,
            target_name: cfg.target_block.clone(),
            renderer,
        })
    }

    /// Meshes every face of every target block that is not covered by an occupied
    /// neighbor cell.
    pub fn mesh(&self, reg: &BlockRegistry, translate: bool, out: &mut MeshBuild) -> MeshStats {
        let mut cells: Vec<(GridPos, Block)> = self
            .grid
            .iter()
            .filter(|(_, b)| b.id == self.target)
            .collect();
        cells.sort_by_key(|(p, _)| (p.y, p.z, p.x));

        let ctx = FaceContext::new(&self.grid, reg);
        let mut stats = MeshStats {
            blocks: cells.len(),
            ..Default::default()
        };
        out.reserve_quads(cells.len() * 6);
        for (pos, block) in cells {
            let bounds = reg.bounds_of(block.id);
            for face in Direction::ALL {
                if self.grid.block_at(pos.offset(face)).is_some() {
                    stats.hidden += 1;
                    continue;
                }
                let Some(tex) = reg.texture_for(block.id, face, block.meta) else {
                    log::debug!("no texture for {:?} face of block {} at {:?}", face, block.id, pos);
                    continue;
                };
                let quad = reference_quad(
                    face,
                    pos,
                    &bounds,
                    &tex,
                    Some(FACE_LIGHT[face.index()]),
                    None,
                    translate,
                );
                self.renderer
                    .render_face(&ctx, face, pos, &quad, translate, out);
                stats.faces += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctm_blocks::MaterialCatalog;
    use ctm_blocks::config::BlocksConfig;

    const MATERIALS: &str = r#"
[atlas]
tiles_x = 4
tiles_y = 4

[materials]
glass = [0, 0]
glass_border = [1, 0]
stone = [2, 0]
"#;

    const BLOCKS: &str = r#"
[[blocks]]
name = "glass"
materials = { all = "glass" }

[[blocks]]
name = "stone"
materials = { all = "stone" }
"#;

    fn registry() -> BlockRegistry {
        let mats = MaterialCatalog::from_toml_str(MATERIALS).unwrap();
        let blocks: BlocksConfig = toml::from_str(BLOCKS).unwrap();
        BlockRegistry::from_configs(mats, blocks).unwrap()
    }

    #[test]
    fn meshes_a_window_pane() {
        let reg = registry();
        let cfg: SceneConfig = toml::from_str(
            r#"
target_block = "glass"

[renderer]
edge_texture = { material = "glass_border" }

[[voxels]]
block = "glass"
at = [0, 0, 0]
fill_to = [2, 2, 0]

[[voxels]]
block = "stone"
at = [0, -1, 0]
fill_to = [2, -1, 0]
"#,
        )
        .unwrap();
        let scene = Scene::from_config(&cfg, &reg).unwrap();
        let mut mb = MeshBuild::default();
        let stats = scene.mesh(&reg, true, &mut mb);
        assert_eq!(stats.blocks, 9);
        // North and south of every cell, plus the west, east and top rims.
        assert_eq!(stats.faces, 18 + 9);
        assert_eq!(stats.hidden, 9 * 6 - 27);
        // Rim faces carry border strips on top of their reference quads.
        assert!(mb.quad_count() > stats.faces);
        assert_eq!(mb.vertex_count(), mb.quad_count() * 4);
    }

    #[test]
    fn unknown_target_is_an_error() {
        let reg = registry();
        let cfg: SceneConfig = toml::from_str("target_block = \"mud\"").unwrap();
        assert!(matches!(
            Scene::from_config(&cfg, &reg),
            Err(ConfigError::UnknownBlock(name)) if name == "mud"
        ));
    }
}
