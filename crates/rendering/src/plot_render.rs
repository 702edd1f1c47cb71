//! Plot blocks: one box per generated plot, colored by status, lifted on
//! hover and further on selection with a smooth per-frame approach toward
//! the target height.

use bevy::prelude::*;

use estate::config::{ELEVATION_LERP, HOVER_ELEVATION, PLOT_BLOCK_HEIGHT, SELECTED_ELEVATION};
use estate::plots::{PlotBoard, PlotStatus};
use estate::selection::{HoveredPlot, SelectedPlot};
use estate::zones::ZoneCatalog;

#[derive(Component)]
pub struct PlotBlock {
    pub number: u32,
    pub resting_elevation: f32,
    pub base_color: Color,
    /// Half extents of the box, for cursor picking.
    pub half_extents: Vec3,
}

/// Status drives the block color; available plots take their zone's color.
pub fn status_color(status: PlotStatus, zone_color: Color) -> Color {
    match status {
        PlotStatus::Sold => Color::srgb_u8(0x6b, 0x72, 0x80),
        PlotStatus::Reserved => Color::srgb_u8(0xea, 0xb3, 0x08),
        PlotStatus::Available => zone_color,
    }
}

/// Elevation detent for a plot given the current hover/selection state.
pub fn elevation_target(
    number: u32,
    hovered: Option<u32>,
    selected: Option<u32>,
    resting: f32,
) -> f32 {
    if selected == Some(number) {
        SELECTED_ELEVATION
    } else if hovered == Some(number) {
        HOVER_ELEVATION
    } else {
        resting
    }
}

/// One step of the decay toward the target height.
pub fn lerp_toward(current: f32, target: f32) -> f32 {
    current + (target - current) * ELEVATION_LERP
}

pub fn spawn_plots(
    board: Res<PlotBoard>,
    catalog: Res<ZoneCatalog>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for plot in board.plots() {
        let zone_color = catalog
            .get(&plot.zone_id)
            .map(|z| z.color())
            .unwrap_or(Color::srgb_u8(0x14, 0xb8, 0xa6));
        let base_color = status_color(plot.status, zone_color);

        commands.spawn((
            PlotBlock {
                number: plot.number,
                resting_elevation: plot.resting_elevation,
                base_color,
                half_extents: Vec3::new(
                    plot.dimensions.x / 2.0,
                    PLOT_BLOCK_HEIGHT / 2.0,
                    plot.dimensions.y / 2.0,
                ),
            },
            Mesh3d(meshes.add(Cuboid::new(
                plot.dimensions.x,
                PLOT_BLOCK_HEIGHT,
                plot.dimensions.y,
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color,
                metallic: 0.1,
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(plot.position),
        ));
    }
}

/// Recolor blocks when hover or selection changes: hovered blocks flash
/// white, the selected block gets a white glow.
pub fn update_plot_appearance(
    hovered: Res<HoveredPlot>,
    selected: Res<SelectedPlot>,
    blocks: Query<(&PlotBlock, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !hovered.is_changed() && !selected.is_changed() {
        return;
    }
    for (block, material) in &blocks {
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        material.base_color = if hovered.0 == Some(block.number) {
            Color::WHITE
        } else {
            block.base_color
        };
        material.emissive = if selected.0 == Some(block.number) {
            LinearRgba::WHITE * 0.3
        } else {
            LinearRgba::BLACK
        };
    }
}

/// Per-frame approach toward the current elevation detent. Never snaps;
/// toggling hover/selection mid-flight simply retargets the decay.
pub fn elevate_plots(
    hovered: Res<HoveredPlot>,
    selected: Res<SelectedPlot>,
    mut blocks: Query<(&PlotBlock, &mut Transform)>,
) {
    for (block, mut transform) in &mut blocks {
        let target = elevation_target(
            block.number,
            hovered.0,
            selected.0,
            block.resting_elevation,
        );
        transform.translation.y = lerp_toward(transform.translation.y, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        let zone = Color::srgb_u8(0xf9, 0x73, 0x16);
        assert_eq!(status_color(PlotStatus::Available, zone), zone);
        assert_ne!(status_color(PlotStatus::Reserved, zone), zone);
        assert_ne!(status_color(PlotStatus::Sold, zone), zone);
    }

    #[test]
    fn test_elevation_detents_selection_beats_hover() {
        let resting = 0.1;
        assert_eq!(elevation_target(1, None, None, resting), resting);
        assert_eq!(elevation_target(1, Some(1), None, resting), HOVER_ELEVATION);
        assert_eq!(
            elevation_target(1, Some(1), Some(1), resting),
            SELECTED_ELEVATION
        );
        // Some other plot's state never lifts this one.
        assert_eq!(elevation_target(1, Some(2), Some(3), resting), resting);
    }

    #[test]
    fn test_lerp_converges_without_overshoot() {
        let mut y = 0.1;
        for _ in 0..200 {
            let next = lerp_toward(y, SELECTED_ELEVATION);
            assert!(next <= SELECTED_ELEVATION + 1e-6);
            assert!(next >= y);
            y = next;
        }
        assert!((y - SELECTED_ELEVATION).abs() < 1e-3);
    }
}
