//! Example morphing a cube into a pyramid and back
//!
//! A ping-pong driver feeds the control value; each simulated frame steps
//! the engine and packs the derived mesh into the interleaved vertex layout.

use hearth_morph::driver::{create_ping_pong_driver, sample_ping_pong};
use hearth_morph::material::{create_material, set_property, set_texture, MaterialProperty};
use hearth_morph::mesh::bounds::{aabb_center, aabb_size};
use hearth_morph::mesh::{build_gpu_vertices, create_mesh, gpu_vertex_bytes, MeshData};
use hearth_morph::morph::{
    create_shared_morph_engine, morph_correspondence_stats, read_derived,
    set_shared_control_value, tick_shared,
};
use hearth_morph::{parse_config, MorphSourcesData};

const FRAME_TIME: f32 = 1.0 / 30.0;
const FRAME_COUNT: usize = 90;

fn cube() -> MeshData {
    let positions = vec![
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ];
    let indices = vec![
        0, 2, 1, 0, 3, 2, // back
        4, 5, 6, 4, 6, 7, // front
        0, 1, 5, 0, 5, 4, // bottom
        3, 7, 6, 3, 6, 2, // top
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
    ];
    create_mesh("cube", positions, indices)
}

fn pyramid() -> MeshData {
    let positions = vec![
        [-1.5, -1.0, -1.5],
        [1.5, -1.0, -1.5],
        [1.5, -1.0, 1.5],
        [-1.5, -1.0, 1.5],
        [0.0, 2.0, 0.0],
    ];
    let indices = vec![0, 1, 2, 0, 2, 3, 0, 4, 1, 1, 4, 2, 2, 4, 3, 3, 4, 0];
    create_mesh("pyramid", positions, indices)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Ping-Pong Morph Example");
    println!("=======================");

    let mut old_material = create_material("stone", [0.6, 0.6, 0.6, 1.0]);
    set_property(&mut old_material, "_Glossiness", MaterialProperty::Float(0.1));
    set_texture(&mut old_material, "_MainTex", Some(1));

    let mut new_material = create_material("gold", [1.0, 0.8, 0.2, 1.0]);
    set_property(&mut new_material, "_Glossiness", MaterialProperty::Float(0.9));
    set_texture(&mut new_material, "_MainTex", Some(2));

    let sources = MorphSourcesData {
        old_mesh: cube(),
        new_mesh: pyramid(),
        old_material,
        new_material,
    };
    let config = parse_config("step_on_create = true\nparallel = true")?;
    let engine = create_shared_morph_engine(sources, config)?;

    let (old_to_new, new_to_old) = morph_correspondence_stats(&engine.read());
    println!("cube -> pyramid: {}", old_to_new);
    println!("pyramid -> cube: {}", new_to_old);

    let driver = create_ping_pong_driver(0.5, 0.0, 1.0);
    let mut vertices = Vec::new();

    for frame in 0..FRAME_COUNT {
        let t = sample_ping_pong(&driver, frame as f32 * FRAME_TIME);
        set_shared_control_value(&engine, t);
        tick_shared(&engine)?;

        let (vertex_count, color) = read_derived(&engine, |mesh, material| {
            build_gpu_vertices(mesh, 0, &mut vertices);
            (mesh.positions.len(), material.color)
        });

        if frame % 10 == 0 {
            println!(
                "frame {:>3}  t={:.3}  vertices={}  bytes={}  color=[{:.2}, {:.2}, {:.2}]",
                frame,
                t,
                vertex_count,
                gpu_vertex_bytes(&vertices).len(),
                color[0],
                color[1],
                color[2]
            );
        }
    }

    let (center, size) = read_derived(&engine, |mesh, _| {
        (aabb_center(&mesh.bounds), aabb_size(&mesh.bounds))
    });
    println!(
        "final bounds: center=({:.2}, {:.2}, {:.2}) size=({:.2}, {:.2}, {:.2})",
        center.x, center.y, center.z, size.x, size.y, size.z
    );

    Ok(())
}
