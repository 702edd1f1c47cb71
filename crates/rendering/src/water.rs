//! The river along the western edge: a translucent plane whose color
//! oscillates between two cyans each frame.

use bevy::prelude::*;

const RIVER_SIZE: Vec2 = Vec2::new(4.0, 16.0);
const RIVER_POS: Vec3 = Vec3::new(-14.0, 0.1, -8.0);

// #0ea5e9 and #06b6d4
const COLOR_A: [f32; 3] = [0x0e as f32 / 255.0, 0xa5 as f32 / 255.0, 0xe9 as f32 / 255.0];
const COLOR_B: [f32; 3] = [0x06 as f32 / 255.0, 0xb6 as f32 / 255.0, 0xd4 as f32 / 255.0];

#[derive(Resource)]
pub struct RiverMaterial(pub Handle<StandardMaterial>);

/// Water surface color and opacity at time `t`.
pub fn river_surface(t: f32) -> Color {
    let wave = (t * 2.0).sin() * 0.5 + 0.5;
    let mix = |a: f32, b: f32| a + (b - a) * wave;
    Color::srgba(
        mix(COLOR_A[0], COLOR_B[0]),
        mix(COLOR_A[1], COLOR_B[1]),
        mix(COLOR_A[2], COLOR_B[2]),
        0.7 + wave * 0.2,
    )
}

pub fn spawn_river(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: river_surface(0.0),
        alpha_mode: AlphaMode::Blend,
        metallic: 0.2,
        perceptual_roughness: 0.3,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(RIVER_SIZE.x, RIVER_SIZE.y))),
        MeshMaterial3d(material.clone()),
        Transform::from_translation(RIVER_POS),
    ));
    commands.insert_resource(RiverMaterial(material));
}

pub fn animate_river(
    time: Res<Time>,
    river: Option<Res<RiverMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(river) = river else {
        return;
    };
    if let Some(material) = materials.get_mut(&river.0) {
        material.base_color = river_surface(time.elapsed_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_oscillates_between_the_two_cyans() {
        // wave = 1 at t where sin(2t) = 1, wave = 0 where sin(2t) = -1.
        let quarter = std::f32::consts::FRAC_PI_4;
        let at_b = river_surface(quarter).to_srgba();
        assert!((at_b.red - COLOR_B[0]).abs() < 1e-4);
        assert!((at_b.alpha - 0.9).abs() < 1e-4);

        let at_a = river_surface(3.0 * quarter).to_srgba();
        assert!((at_a.red - COLOR_A[0]).abs() < 1e-4);
        assert!((at_a.alpha - 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_surface_alpha_stays_translucent() {
        for i in 0..100 {
            let alpha = river_surface(i as f32 * 0.37).to_srgba().alpha;
            assert!((0.7..=0.9).contains(&alpha));
        }
    }
}
