//! CPU meshing crate: connected-texture faces and the vertex plumbing around them.
#![forbid(unsafe_code)]

pub mod config;
pub mod connected;
pub mod constants;
pub mod edges;
pub mod face_quad;
pub mod mesh_build;
pub mod texture;
pub mod uv;
pub mod vertex;

pub use config::{ConnectedTextureConfig, EdgeTextureDef};
pub use connected::{ConnectedTextureRenderer, FaceContext};
pub use edges::{ConnectionPolicy, EdgeSet, FnConnectivity, RegistryConnectivity, open_edges};
pub use face_quad::reference_quad;
pub use mesh_build::{MeshBuild, VertexSink, submit_quads};
pub use texture::TextureSelector;
pub use uv::uv_for_corner;
pub use vertex::{Vertex, closest_vertex};
