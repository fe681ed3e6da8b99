use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{MaterialId, Texture, UvRect};

#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub uv: UvRect,
}

impl Material {
    #[inline]
    pub fn texture(&self) -> Texture {
        Texture {
            material: self.id,
            uv: self.uv,
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn texture(&self, id: MaterialId) -> Option<Texture> {
        self.get(id).map(Material::texture)
    }

    pub fn texture_by_key(&self, key: &str) -> Option<Texture> {
        self.get_id(key).and_then(|id| self.texture(id))
    }

    /// Registers a material with an explicit atlas rect, replacing any existing entry for `key`.
    pub fn insert(&mut self, key: &str, uv: UvRect) -> MaterialId {
        if let Some(id) = self.get_id(key) {
            self.materials[id.0 as usize].uv = uv;
            return id;
        }
        let id = MaterialId(self.materials.len() as u16);
        self.by_key.insert(key.to_string(), id);
        self.materials.push(Material {
            id,
            key: key.to_string(),
            uv,
        });
        id
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let atlas = cfg.atlas.unwrap_or_default();
        let mut catalog = MaterialCatalog::new();
        let mut entries: Vec<(String, MaterialEntry)> = cfg.materials.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so MaterialId assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let uv = match entry {
                MaterialEntry::Tile([col, row]) => atlas.tile_rect(&key, col, row)?,
                MaterialEntry::Rect { uv: [u0, v0, u1, v1] } => UvRect::new(u0, v0, u1, v1),
            };
            catalog.insert(&key, uv);
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    #[serde(default)]
    pub atlas: Option<AtlasConfig>,
    pub materials: HashMap<String, MaterialEntry>,
}

/// Uniform grid atlas layout used by `tile = [col, row]` entries.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct AtlasConfig {
    pub tiles_x: u16,
    pub tiles_y: u16,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tiles_x: 16,
            tiles_y: 16,
        }
    }
}

impl AtlasConfig {
    pub fn tile_rect(&self, key: &str, col: u16, row: u16) -> Result<UvRect, ConfigError> {
        if col >= self.tiles_x || row >= self.tiles_y {
            return Err(ConfigError::TileOutOfRange {
                key: key.to_string(),
                col,
                row,
                tiles_x: self.tiles_x,
                tiles_y: self.tiles_y,
            });
        }
        let du = 1.0 / self.tiles_x as f32;
        let dv = 1.0 / self.tiles_y as f32;
        let u0 = col as f32 * du;
        let v0 = row as f32 * dv;
        Ok(UvRect::new(u0, v0, u0 + du, v0 + dv))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum MaterialEntry {
    // Grid cell: material = [col, row]
    Tile([u16; 2]),
    // Explicit rect: material = { uv = [u0, v0, u1, v1] }
    Rect { uv: [f32; 4] },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_map_into_atlas_cells() {
        let cat = MaterialCatalog::from_toml_str(
            r#"
            [atlas]
            tiles_x = 4
            tiles_y = 2

            [materials]
            glass = [1, 1]
            frame = { uv = [0.0, 0.0, 0.25, 0.5] }
        "#,
        )
        .unwrap();
        let glass = cat.texture_by_key("glass").unwrap();
        assert_eq!(glass.uv, UvRect::new(0.25, 0.5, 0.5, 1.0));
        let frame = cat.texture_by_key("frame").unwrap();
        assert_eq!(frame.uv, UvRect::new(0.0, 0.0, 0.25, 0.5));
        // Sorted keys: frame < glass
        assert_eq!(frame.material, MaterialId(0));
        assert_eq!(glass.material, MaterialId(1));
    }

    #[test]
    fn tile_outside_atlas_is_rejected() {
        let err = MaterialCatalog::from_toml_str(
            r#"
            [atlas]
            tiles_x = 2
            tiles_y = 2

            [materials]
            far = [2, 0]
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("far"));
    }

    #[test]
    fn insert_replaces_existing_rect() {
        let mut cat = MaterialCatalog::new();
        let a = cat.insert("a", UvRect::FULL);
        let b = cat.insert("a", UvRect::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(a, b);
        assert_eq!(cat.materials.len(), 1);
        assert_eq!(cat.get(a).unwrap().uv.u1, 0.5);
    }
}
