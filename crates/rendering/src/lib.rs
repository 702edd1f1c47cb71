//! 3D scene for the virtual tour: terrain, river, roads, zone footprints,
//! plot blocks, landmarks, lighting, the orbit camera and cursor picking.

use bevy::prelude::*;

pub mod camera;
pub mod landmarks;
pub mod picking;
pub mod plot_render;
pub mod roads;
pub mod terrain;
pub mod water;
pub mod zone_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<camera::OrbitDrag>()
            .init_resource::<camera::PanDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    terrain::spawn_terrain,
                    water::spawn_river,
                    roads::spawn_roads,
                    zone_render::spawn_zone_footprints,
                    landmarks::spawn_landmarks,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                plot_render::spawn_plots.after(estate::plots::populate_board),
            )
            .add_systems(
                Update,
                (
                    picking::pick_plots,
                    camera::auto_rotate_camera,
                    camera::camera_orbit_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    plot_render::update_plot_appearance,
                    plot_render::elevate_plots,
                    zone_render::update_zone_footprints,
                    water::animate_river,
                ),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 250.0,
    });

    // Sun, angled from the north-east, casting shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm fill light over the extension area
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0xfb, 0xbf, 0x24),
            intensity: 300_000.0,
            ..default()
        },
        Transform::from_xyz(-10.0, 10.0, -10.0),
    ));
}
