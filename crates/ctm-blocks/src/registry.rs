use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use ctm_geom::{Aabb, Direction, Vec3};

use super::config::{BlockDef, BlocksConfig, BoundsDef, MaterialSelector, MaterialsDef};
use super::error::ConfigError;
use super::material::MaterialCatalog;
use super::types::{BlockId, BlockMeta, FaceRole, MaterialId, Texture};

#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedSelector {
    Fixed(MaterialId),
    ByMeta(Vec<MaterialId>),
}

impl ResolvedSelector {
    /// Out-of-range metadata falls back to the first variant.
    #[inline]
    fn pick(&self, meta: BlockMeta) -> Option<MaterialId> {
        match self {
            ResolvedSelector::Fixed(id) => Some(*id),
            ResolvedSelector::ByMeta(v) => v.get(meta as usize).or_else(|| v.first()).copied(),
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct CompiledMaterials {
    pub all: Option<ResolvedSelector>,
    pub top: Option<ResolvedSelector>,
    pub bottom: Option<ResolvedSelector>,
    pub side: Option<ResolvedSelector>,
    // Indexed by Direction::index(); only the four horizontal slots are ever set.
    pub per_dir: [Option<ResolvedSelector>; 6],
}

impl CompiledMaterials {
    pub fn material_for(&self, dir: Direction, meta: BlockMeta) -> Option<MaterialId> {
        let pick = self.per_dir[dir.index()].as_ref().or_else(|| {
            match FaceRole::of(dir) {
                FaceRole::Top => self.top.as_ref(),
                FaceRole::Bottom => self.bottom.as_ref(),
                FaceRole::Side => self.side.as_ref(),
            }
            .or(self.all.as_ref())
        })?;
        pick.pick(meta)
    }
}

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub bounds: Aabb,
    pub materials: CompiledMaterials,
    pub connect_group: Option<String>,
}

impl BlockType {
    #[inline]
    pub fn material_for(&self, dir: Direction, meta: BlockMeta) -> Option<MaterialId> {
        self.materials.material_for(dir, meta)
    }
}

#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub materials: MaterialCatalog,
    pub blocks: Vec<Option<BlockType>>,
    pub by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            materials: MaterialCatalog::new(),
            blocks: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize).and_then(Option::as_ref)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Render bounds of a block; unknown ids render as a full cube.
    #[inline]
    pub fn bounds_of(&self, id: BlockId) -> Aabb {
        self.get(id).map_or(Aabb::UNIT_CUBE, |ty| ty.bounds)
    }

    /// The block's own texture for one of its faces and a metadata value.
    pub fn texture_for(&self, id: BlockId, dir: Direction, meta: BlockMeta) -> Option<Texture> {
        let mid = self.get(id)?.material_for(dir, meta)?;
        self.materials.texture(mid)
    }

    /// Whether two blocks continue each other's connected texture: the same block,
    /// or two blocks declaring the same `connect_group`.
    pub fn textures_connect(&self, a: BlockId, b: BlockId) -> bool {
        if a == b {
            return true;
        }
        match (self.get(a), self.get(b)) {
            (Some(ta), Some(tb)) => match (&ta.connect_group, &tb.connect_group) {
                (Some(ga), Some(gb)) => ga == gb,
                _ => false,
            },
            _ => false,
        }
    }

    pub fn load_from_paths(
        materials_path: impl AsRef<Path>,
        blocks_path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let materials = MaterialCatalog::from_path(materials_path)?;
        let blocks_toml = fs::read_to_string(blocks_path)?;
        let blocks_cfg: BlocksConfig = toml::from_str(&blocks_toml)?;
        Self::from_configs(materials, blocks_cfg)
    }

    pub fn from_configs(
        materials: MaterialCatalog,
        cfg: BlocksConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry {
            materials,
            blocks: Vec::new(),
            by_name: HashMap::new(),
        };
        for def in cfg.blocks.into_iter() {
            reg.register(def)?;
        }
        log::debug!(
            "block registry: {} blocks, {} materials",
            reg.by_name.len(),
            reg.materials.materials.len()
        );
        Ok(reg)
    }

    /// Adds one block definition. Ids default to the next free slot.
    pub fn register(&mut self, def: BlockDef) -> Result<BlockId, ConfigError> {
        let id = def.id.unwrap_or(self.blocks.len() as u16);
        if let Some(&first) = self.by_name.get(&def.name) {
            return Err(ConfigError::DuplicateBlock {
                name: def.name,
                first,
                second: id,
            });
        }
        let ty = BlockType {
            id,
            bounds: def.bounds.map_or(Aabb::UNIT_CUBE, compile_bounds),
            materials: compile_materials(&self.materials, &def.name, def.materials),
            connect_group: def.connect_group,
            name: def.name,
        };
        let ix = id as usize;
        if self.blocks.len() <= ix {
            self.blocks.resize(ix + 1, None);
        }
        if let Some(prev) = self.blocks[ix].take() {
            log::warn!("block id {} reassigned from `{}` to `{}`", id, prev.name, ty.name);
            self.by_name.remove(&prev.name);
        }
        self.by_name.insert(ty.name.clone(), id);
        self.blocks[ix] = Some(ty);
        Ok(id)
    }
}

fn compile_bounds(b: BoundsDef) -> Aabb {
    Aabb::new(
        Vec3::new(b.min[0], b.min[1], b.min[2]),
        Vec3::new(b.max[0], b.max[1], b.max[2]),
    )
}

fn compile_materials(
    matcat: &MaterialCatalog,
    block: &str,
    mats: Option<MaterialsDef>,
) -> CompiledMaterials {
    let lookup = |k: &str| {
        let id = matcat.get_id(k);
        if id.is_none() {
            log::warn!("block `{}` references unknown material `{}`", block, k);
        }
        id
    };
    let resolve_selector = |sel: &Option<MaterialSelector>| -> Option<ResolvedSelector> {
        match sel.as_ref()? {
            MaterialSelector::Key(k) => lookup(k.as_str()).map(ResolvedSelector::Fixed),
            MaterialSelector::ByMeta(keys) => {
                let ids: Vec<MaterialId> = keys.iter().filter_map(|k| lookup(k.as_str())).collect();
                if ids.is_empty() {
                    None
                } else {
                    Some(ResolvedSelector::ByMeta(ids))
                }
            }
        }
    };
    let mut out = CompiledMaterials::default();
    if let Some(m) = mats {
        out.all = resolve_selector(&m.all);
        out.top = resolve_selector(&m.top);
        out.bottom = resolve_selector(&m.bottom);
        out.side = resolve_selector(&m.side);
        out.per_dir[Direction::North.index()] = resolve_selector(&m.north);
        out.per_dir[Direction::South.index()] = resolve_selector(&m.south);
        out.per_dir[Direction::West.index()] = resolve_selector(&m.west);
        out.per_dir[Direction::East.index()] = resolve_selector(&m.east);
    }
    out
}
