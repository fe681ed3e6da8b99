use std::error::Error;

use ctm_blocks::{BlockMeta, BlockRegistry, ConfigError};
use ctm_geom::{DirSet, Direction};
use serde::Deserialize;

use crate::connected::ConnectedTextureRenderer;
use crate::constants::DEFAULT_SCALE_FACTOR;
use crate::texture::TextureSelector;

// [renderer] table of a scene file
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ConnectedTextureConfig {
    pub force_all_edges: bool,
    pub match_metadata: bool,
    // Direction names; every face when absent
    pub sides: Option<Vec<String>>,
    pub scale_factor: f32,
    pub edge_texture: Option<EdgeTextureDef>,
}

impl Default for ConnectedTextureConfig {
    fn default() -> Self {
        Self {
            force_all_edges: false,
            match_metadata: false,
            sides: None,
            scale_factor: DEFAULT_SCALE_FACTOR,
            edge_texture: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EdgeTextureDef {
    // edge_texture = { material = "glass_border" }
    Material { material: String },
    // edge_texture = { block = "glass_frame", meta = 0 }
    Block {
        block: String,
        #[serde(default)]
        meta: BlockMeta,
    },
}

impl ConnectedTextureConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Resolves names against `registry` into a ready renderer.
    pub fn build(&self, registry: &BlockRegistry) -> Result<ConnectedTextureRenderer, ConfigError> {
        let mut r = ConnectedTextureRenderer::new();
        r.set_force_all_edges(self.force_all_edges);
        r.set_match_metadata(self.match_metadata);
        r.set_scale_factor(self.scale_factor);
        if let Some(names) = &self.sides {
            let mut sides = DirSet::EMPTY;
            for n in names {
                let d = Direction::from_name(n)
                    .ok_or_else(|| ConfigError::UnknownDirection(n.clone()))?;
                sides.insert(d);
            }
            r.set_sides_to_render(sides);
        }
        let selector = match &self.edge_texture {
            None => None,
            Some(EdgeTextureDef::Material { material }) => {
                let tex = registry
                    .materials
                    .texture_by_key(material)
                    .ok_or_else(|| ConfigError::UnknownMaterial(material.clone()))?;
                Some(TextureSelector::Fixed(tex))
            }
            Some(EdgeTextureDef::Block { block, meta }) => {
                let id = registry
                    .id_by_name(block)
                    .ok_or_else(|| ConfigError::UnknownBlock(block.clone()))?;
                Some(TextureSelector::FromBlock { block: id, meta: *meta })
            }
        };
        r.set_edge_texture_selector(selector);
        log::debug!(
            "connected texture renderer: force_all_edges={} match_metadata={} sides={:?} scale={} edge_texture={:?}",
            r.force_all_edges(),
            r.match_metadata(),
            r.sides_to_render(),
            r.scale_factor(),
            r.edge_texture()
        );
        Ok(r)
    }
}
