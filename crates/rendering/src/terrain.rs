//! Rolling-terrain mesh under the development.
//!
//! The height field is a fixed closed-form sine blend, displaced on a
//! regular vertex grid with normals from central differences. No noise
//! source is involved; the landscape is identical every launch.

use bevy::prelude::*;
use bevy::render::mesh::Indices;

use estate::config::{TERRAIN_BASE_Y, TERRAIN_DEPTH, TERRAIN_RESOLUTION, TERRAIN_WIDTH};

pub fn terrain_height(x: f32, z: f32) -> f32 {
    (x * 0.1).sin() * 0.3 + (z * 0.08).cos() * 0.2 + ((x + z) * 0.05).sin() * 0.4
}

fn terrain_normal(x: f32, z: f32) -> Vec3 {
    let e = 0.1;
    let dhdx = (terrain_height(x + e, z) - terrain_height(x - e, z)) / (2.0 * e);
    let dhdz = (terrain_height(x, z + e) - terrain_height(x, z - e)) / (2.0 * e);
    Vec3::new(-dhdx, 1.0, -dhdz).normalize()
}

pub fn build_terrain_mesh() -> Mesh {
    let res = TERRAIN_RESOLUTION;
    let stride = res + 1;
    let vert_count = stride * stride;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vert_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vert_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vert_count);
    let mut indices: Vec<u32> = Vec::with_capacity(res * res * 6);

    for iz in 0..=res {
        for ix in 0..=res {
            let fx = ix as f32 / res as f32;
            let fz = iz as f32 / res as f32;
            let x = -TERRAIN_WIDTH / 2.0 + fx * TERRAIN_WIDTH;
            let z = -TERRAIN_DEPTH / 2.0 + fz * TERRAIN_DEPTH;
            positions.push([x, terrain_height(x, z), z]);
            normals.push(terrain_normal(x, z).to_array());
            uvs.push([fx, fz]);
        }
    }

    for iz in 0..res {
        for ix in 0..res {
            let vi = (iz * stride + ix) as u32;
            let stride = stride as u32;
            indices.push(vi);
            indices.push(vi + stride);
            indices.push(vi + stride + 1);
            indices.push(vi);
            indices.push(vi + stride + 1);
            indices.push(vi + 1);
        }
    }

    let mut mesh = Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        bevy::render::render_asset::RenderAssetUsages::RENDER_WORLD
            | bevy::render::render_asset::RenderAssetUsages::MAIN_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn spawn_terrain(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(build_terrain_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x4a, 0xde, 0x80),
            metallic: 0.1,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, TERRAIN_BASE_Y, 0.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_formula_at_origin() {
        // sin(0)*0.3 + cos(0)*0.2 + sin(0)*0.4 = 0.2
        assert!((terrain_height(0.0, 0.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_height_is_bounded_by_amplitudes() {
        for ix in -30..=30 {
            for iz in -25..=25 {
                let h = terrain_height(ix as f32 * 2.0, iz as f32 * 2.0);
                assert!(h.abs() <= 0.9 + 1e-6);
            }
        }
    }

    #[test]
    fn test_mesh_dimensions() {
        let mesh = build_terrain_mesh();
        let stride = TERRAIN_RESOLUTION + 1;
        assert_eq!(mesh.count_vertices(), stride * stride);
        let indices = mesh.indices().expect("terrain mesh is indexed");
        assert_eq!(indices.len(), TERRAIN_RESOLUTION * TERRAIN_RESOLUTION * 6);
    }

    #[test]
    fn test_normals_are_unit_length_and_upward() {
        for (x, z) in [(0.0, 0.0), (10.0, -7.5), (-25.0, 20.0)] {
            let n = terrain_normal(x, z);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.y > 0.0);
        }
    }
}
