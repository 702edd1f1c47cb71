//! Road strips across the development: primary arteries in orange,
//! secondary access roads in blue. Layout is a fixed table of straight
//! segments in ground-plane coordinates.

use bevy::prelude::*;

const ROAD_Y: f32 = 0.05;

pub struct RoadSpec {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub primary: bool,
}

const fn road(start: Vec2, end: Vec2, width: f32, primary: bool) -> RoadSpec {
    RoadSpec {
        start,
        end,
        width,
        primary,
    }
}

pub const ROADS: [RoadSpec; 7] = [
    // Primary arteries
    road(Vec2::new(-16.0, 0.0), Vec2::new(16.0, 0.0), 1.5, true),
    road(Vec2::new(0.0, -14.0), Vec2::new(0.0, 12.0), 1.5, true),
    road(Vec2::new(-10.0, -6.0), Vec2::new(14.0, -6.0), 1.0, true),
    // Secondary access roads
    road(Vec2::new(-12.0, 4.0), Vec2::new(-4.0, 4.0), 0.8, false),
    road(Vec2::new(-4.0, 4.0), Vec2::new(4.0, 4.0), 0.8, false),
    road(Vec2::new(4.0, 4.0), Vec2::new(12.0, 4.0), 0.8, false),
    road(Vec2::new(-10.0, -10.0), Vec2::new(10.0, -10.0), 0.8, false),
];

/// Midpoint, length and ground-plane angle of a road segment.
pub fn road_pose(start: Vec2, end: Vec2) -> (Vec3, f32, f32) {
    let mid = (start + end) / 2.0;
    let length = (end - start).length();
    let angle = (end.y - start.y).atan2(end.x - start.x);
    (Vec3::new(mid.x, ROAD_Y, mid.y), length, angle)
}

pub fn spawn_roads(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for spec in &ROADS {
        let (mid, length, angle) = road_pose(spec.start, spec.end);
        let color = if spec.primary {
            Color::srgb_u8(0xf9, 0x73, 0x16)
        } else {
            Color::srgb_u8(0x3b, 0x82, 0xf6)
        };
        commands.spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(length, spec.width))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                metallic: 0.3,
                perceptual_roughness: 0.7,
                ..default()
            })),
            Transform::from_translation(mid).with_rotation(Quat::from_rotation_y(-angle)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_pose_horizontal() {
        let (mid, length, angle) = road_pose(Vec2::new(-16.0, 0.0), Vec2::new(16.0, 0.0));
        assert_eq!(mid, Vec3::new(0.0, ROAD_Y, 0.0));
        assert_eq!(length, 32.0);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_road_pose_vertical() {
        let (mid, length, angle) = road_pose(Vec2::new(0.0, -14.0), Vec2::new(0.0, 12.0));
        assert_eq!(mid, Vec3::new(0.0, ROAD_Y, -1.0));
        assert_eq!(length, 26.0);
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_maps_length_axis_onto_segment() {
        let start = Vec2::new(1.0, 2.0);
        let end = Vec2::new(5.0, -3.0);
        let (_, length, angle) = road_pose(start, end);
        let dir3 = Quat::from_rotation_y(-angle) * Vec3::X;
        let expected = (end - start) / length;
        assert!((dir3.x - expected.x).abs() < 1e-5);
        assert!((dir3.z - expected.y).abs() < 1e-5);
    }
}
