use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ctm_blocks::registry::BlockRegistry;
use ctm_blocks::types::Block;
use ctm_geom::Direction;
use ctm_mesh_cpu::{ConnectedTextureRenderer, FaceContext, MeshBuild, reference_quad};
use ctm_world::{BlockAccess, GridPos, VoxelGrid};

fn load_registry() -> BlockRegistry {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let vox = root.join("../../assets/voxels");
    BlockRegistry::load_from_paths(vox.join("materials.toml"), vox.join("blocks.toml")).unwrap()
}

// Glass cube with every other cell of its shell knocked out, so faces see a mix
// of open edges and corner notches.
fn checkered_cube(reg: &BlockRegistry, n: i32) -> VoxelGrid {
    let glass = reg.id_by_name("glass").unwrap();
    let mut g = VoxelGrid::new();
    g.fill(GridPos::ORIGIN, GridPos::new(n - 1, n - 1, n - 1), Block::new(glass, 0));
    for y in 0..n {
        for z in 0..n {
            for x in 0..n {
                let shell = x == 0 || y == 0 || z == 0 || x == n - 1 || y == n - 1 || z == n - 1;
                if shell && (x + y + z) % 2 == 0 {
                    g.remove(GridPos::new(x, y, z));
                }
            }
        }
    }
    g
}

fn mesh_all(
    r: &ConnectedTextureRenderer,
    reg: &BlockRegistry,
    g: &VoxelGrid,
    out: &mut MeshBuild,
) {
    let ctx = FaceContext::new(g, reg);
    for (pos, block) in g.iter() {
        for face in Direction::ALL {
            if g.block_at(pos.offset(face)).is_some() {
                continue;
            }
            let Some(tex) = reg.texture_for(block.id, face, block.meta) else {
                continue;
            };
            let quad = reference_quad(
                face,
                pos,
                &reg.bounds_of(block.id),
                &tex,
                Some(240),
                None,
                true,
            );
            r.render_face(&ctx, face, pos, &quad, true, out);
        }
    }
}

fn bench_connected_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("connected_cube");
    let reg = load_registry();
    let g = checkered_cube(&reg, 16);
    let mut r = ConnectedTextureRenderer::new();
    r.set_edge_texture(reg.materials.texture_by_key("glass_border"));
    let mut out = MeshBuild::default();
    group.bench_function("checkered_16", |b| {
        b.iter(|| {
            out.clear_keep_capacity();
            mesh_all(&r, &reg, &g, &mut out);
            black_box(out.quad_count());
        })
    });
    r.set_force_all_edges(true);
    group.bench_function("checkered_16_forced", |b| {
        b.iter(|| {
            out.clear_keep_capacity();
            mesh_all(&r, &reg, &g, &mut out);
            black_box(out.quad_count());
        })
    });
    group.finish();
}

fn bench_open_edges(c: &mut Criterion) {
    let reg = load_registry();
    let g = checkered_cube(&reg, 16);
    let policy = ConnectedTextureRenderer::new().connectivity(&reg);
    let cells: Vec<GridPos> = g.iter().map(|(p, _)| p).collect();
    c.bench_function("open_edges_all_faces", |b| {
        b.iter(|| {
            let mut n = 0usize;
            for &p in &cells {
                for face in Direction::ALL {
                    n += ctm_mesh_cpu::open_edges(&g, p, face, &policy).len();
                }
            }
            black_box(n);
        })
    });
}

criterion_group!(benches, bench_connected_cube, bench_open_edges);
criterion_main!(benches);
