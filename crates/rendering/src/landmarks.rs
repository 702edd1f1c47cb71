//! Fixed landmark meshes: the school block and the nursery tree line.

use bevy::prelude::*;

pub fn spawn_landmarks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // School building
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(6.0, 1.0, 6.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x8b, 0x5c, 0xf6),
            ..default()
        })),
        Transform::from_xyz(10.0, 0.5, 0.0),
    ));

    // Tree line along the nursery
    let tree_mesh = meshes.add(Cone {
        radius: 0.4,
        height: 1.0,
    });
    let tree_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x22, 0xc5, 0x5e),
        ..default()
    });
    for i in 0..5 {
        commands.spawn((
            Mesh3d(tree_mesh.clone()),
            MeshMaterial3d(tree_material.clone()),
            Transform::from_xyz(8.0 + i as f32 * 1.2, 0.3, -8.0),
        ));
    }
}
