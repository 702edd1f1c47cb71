//! Cursor picking against plot blocks.
//!
//! Casts the cursor ray into the scene and intersects it with each plot's
//! axis-aligned box; the nearest hit becomes the hovered plot. Releasing
//! the left button over a plot toggles its selection, unless the press
//! turned into a camera drag.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use estate::selection::{HoveredPlot, SelectedPlot};

use crate::camera::OrbitDrag;
use crate::plot_render::PlotBlock;

/// Slab-method ray/AABB intersection. Returns the entry distance along
/// the ray, 0.0 if the origin is inside the box.
pub fn ray_box_intersection(origin: Vec3, dir: Vec3, center: Vec3, half: Vec3) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let lo = center[axis] - half[axis];
        let hi = center[axis] + half[axis];

        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

#[allow(clippy::too_many_arguments)]
pub fn pick_plots(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut contexts: EguiContexts,
    buttons: Res<ButtonInput<MouseButton>>,
    drag: Res<OrbitDrag>,
    blocks: Query<(&PlotBlock, &Transform)>,
    mut hovered: ResMut<HoveredPlot>,
    mut selected: ResMut<SelectedPlot>,
) {
    // Pointer is on the overlay UI: nothing in the scene is hovered.
    if contexts.ctx_mut().wants_pointer_input() {
        if hovered.0.is_some() {
            hovered.0 = None;
        }
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let hit = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world(cam_transform, screen_pos).ok())
        .and_then(|ray| {
            let mut best: Option<(f32, u32)> = None;
            for (block, transform) in &blocks {
                if let Some(t) = ray_box_intersection(
                    ray.origin,
                    *ray.direction,
                    transform.translation,
                    block.half_extents,
                ) {
                    if best.map_or(true, |(bt, _)| t < bt) {
                        best = Some((t, block.number));
                    }
                }
            }
            best.map(|(_, number)| number)
        });

    if hovered.0 != hit {
        hovered.0 = hit;
    }

    // Click = press and release without crossing the drag threshold.
    if buttons.just_released(MouseButton::Left) && !drag.is_dragging {
        if let Some(number) = hit {
            selected.toggle(number);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec3 = Vec3::new(0.6, 0.1, 0.7);

    #[test]
    fn test_ray_straight_down_hits() {
        let center = Vec3::new(2.0, 0.15, -3.0);
        let t = ray_box_intersection(
            Vec3::new(2.0, 10.0, -3.0),
            Vec3::NEG_Y,
            center,
            HALF,
        )
        .expect("ray should hit");
        assert!((t - (10.0 - 0.25)).abs() < 1e-4);
    }

    #[test]
    fn test_ray_misses_beside_the_box() {
        let center = Vec3::new(2.0, 0.15, -3.0);
        assert!(ray_box_intersection(
            Vec3::new(4.0, 10.0, -3.0),
            Vec3::NEG_Y,
            center,
            HALF
        )
        .is_none());
    }

    #[test]
    fn test_origin_inside_box_is_distance_zero() {
        let center = Vec3::ZERO;
        let t = ray_box_intersection(Vec3::ZERO, Vec3::X, center, HALF).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_box_behind_ray_is_ignored() {
        let center = Vec3::new(0.0, 0.0, 0.0);
        assert!(ray_box_intersection(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::X,
            center,
            HALF
        )
        .is_none());
    }

    #[test]
    fn test_nearest_of_two_boxes_wins() {
        let origin = Vec3::new(0.0, 5.0, 0.0);
        let near = ray_box_intersection(origin, Vec3::NEG_Y, Vec3::new(0.0, 2.0, 0.0), HALF);
        let far = ray_box_intersection(origin, Vec3::NEG_Y, Vec3::new(0.0, 0.0, 0.0), HALF);
        assert!(near.unwrap() < far.unwrap());
    }
}
