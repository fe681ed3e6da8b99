use serde::Deserialize;

// Top-level blocks config file
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u16>,

    #[serde(default)]
    pub materials: Option<MaterialsDef>,

    // Render bounds inside the cell; full cube when absent
    #[serde(default)]
    pub bounds: Option<BoundsDef>,

    // Blocks sharing a group continue each other's connected texture
    #[serde(default)]
    pub connect_group: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct BoundsDef {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

// Materials mapping: all/top/bottom/side plus per-direction overrides
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MaterialsDef {
    #[serde(default)]
    pub all: Option<MaterialSelector>,
    #[serde(default)]
    pub top: Option<MaterialSelector>,
    #[serde(default)]
    pub bottom: Option<MaterialSelector>,
    #[serde(default)]
    pub side: Option<MaterialSelector>,
    #[serde(default)]
    pub north: Option<MaterialSelector>,
    #[serde(default)]
    pub south: Option<MaterialSelector>,
    #[serde(default)]
    pub west: Option<MaterialSelector>,
    #[serde(default)]
    pub east: Option<MaterialSelector>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum MaterialSelector {
    // side = "glass"
    Key(String),
    // side = ["glass", "glass_red"]  (indexed by metadata)
    ByMeta(Vec<String>),
}
