use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use estate::config::{TERRAIN_DEPTH, TERRAIN_WIDTH};
use estate::selection::AutoRotate;

const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 50.0;
// Elevation limits matching the tour's polar-angle bounds (PI/6 .. PI/2.5).
const MIN_PITCH: f32 = 18.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 60.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.001;

/// Auto-rotate path: a circle of this radius at this height, 0.2 rad/s,
/// always looking at the world origin.
const AUTO_RADIUS: f32 = 30.0;
const AUTO_HEIGHT: f32 = 20.0;
const AUTO_ANGULAR_SPEED: f32 = 0.2;

/// Pixels of movement before a left press counts as a camera drag rather
/// than a plot click.
const DRAG_THRESHOLD: f32 = 5.0;

/// Orbital camera model: the camera orbits a focus point on the ground.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    /// Horizontal rotation in radians.
    pub yaw: f32,
    /// Elevation angle in radians, clamped to MIN_PITCH..MAX_PITCH.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the tour's opening shot at (25, 25, 25) looking at origin.
        let pos = Vec3::splat(25.0);
        let distance = pos.length();
        Self {
            focus: Vec3::ZERO,
            yaw: pos.x.atan2(pos.z),
            pitch: (pos.y / distance).asin(),
            distance,
        }
    }
}

/// Left-drag orbit state. Differentiates a click (select a plot) from a
/// drag (rotate the camera) via DRAG_THRESHOLD.
#[derive(Resource, Default)]
pub struct OrbitDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
}

/// Right-drag pan state.
#[derive(Resource, Default)]
pub struct PanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

pub fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    (orbit.focus + Vec3::new(x, y, z), orbit.focus)
}

/// Orbit pose on the auto-rotate circle at angle `t`, chosen so the camera
/// sits at (cos t * 30, 20, sin t * 30) looking at the origin.
pub fn auto_orbit_pose(t: f32) -> (f32, f32, f32) {
    let distance = (AUTO_RADIUS * AUTO_RADIUS + AUTO_HEIGHT * AUTO_HEIGHT).sqrt();
    let pitch = (AUTO_HEIGHT / AUTO_RADIUS).atan();
    let yaw = std::f32::consts::FRAC_PI_2 - t;
    (yaw, pitch, distance)
}

pub fn zoomed_distance(distance: f32, scroll: f32) -> f32 {
    (distance * (1.0 - scroll * ZOOM_SPEED)).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

pub fn clamped_pitch(pitch: f32) -> f32 {
    pitch.clamp(MIN_PITCH, MAX_PITCH)
}

fn clamp_focus(focus: &mut Vec3) {
    let margin = 5.0;
    focus.x = focus.x.clamp(-TERRAIN_WIDTH / 2.0 - margin, TERRAIN_WIDTH / 2.0 + margin);
    focus.z = focus.z.clamp(-TERRAIN_DEPTH / 2.0 - margin, TERRAIN_DEPTH / 2.0 + margin);
}

/// While auto-rotate is on, the orbit pose is rewritten every frame from
/// wall-clock time. Writing into `OrbitCamera` (rather than the transform
/// directly) means toggling auto-rotate off leaves manual control holding
/// the exact current pose — no jump.
pub fn auto_rotate_camera(
    time: Res<Time>,
    auto: Res<AutoRotate>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if !auto.0 {
        return;
    }
    let (yaw, pitch, distance) = auto_orbit_pose(time.elapsed_secs() * AUTO_ANGULAR_SPEED);
    orbit.focus = Vec3::ZERO;
    orbit.yaw = yaw;
    orbit.pitch = pitch;
    orbit.distance = distance;
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch). Only
/// active while auto-rotate is off; short presses stay clicks.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    auto: Res<AutoRotate>,
    mut drag: ResMut<OrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if auto.0 {
        drag.pressed = false;
        drag.is_dragging = false;
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !contexts.ctx_mut().wants_pointer_input() {
        if let Some(pos) = window.cursor_position() {
            drag.pressed = true;
            drag.start_pos = pos;
            drag.last_pos = pos;
            drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.pressed = false;
        drag.is_dragging = false;
    }

    if drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !drag.is_dragging && (pos - drag.start_pos).length() > DRAG_THRESHOLD {
                drag.is_dragging = true;
                drag.last_pos = pos;
            }

            if drag.is_dragging {
                let delta = pos - drag.last_pos;
                orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
                orbit.pitch = clamped_pitch(orbit.pitch + delta.y * ORBIT_SENSITIVITY);
                drag.last_pos = pos;
            }
        }
    }
}

/// Right-mouse drag: pan the focus along the ground plane, direction
/// relative to the current yaw.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    auto: Res<AutoRotate>,
    mut drag: ResMut<PanDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if auto.0 {
        drag.dragging = false;
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let scale = orbit.distance * PAN_SENSITIVITY * 10.0;

    if buttons.just_pressed(MouseButton::Right) && !contexts.ctx_mut().wants_pointer_input() {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            let cos_yaw = orbit.yaw.cos();
            let sin_yaw = orbit.yaw.sin();
            let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
            let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
            orbit.focus.x += world_x * scale;
            orbit.focus.z += world_z * scale;
            clamp_focus(&mut orbit.focus);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom, bounded to MIN_DISTANCE..MAX_DISTANCE.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    auto: Res<AutoRotate>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if auto.0 || contexts.ctx_mut().wants_pointer_input() {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.distance = zoomed_distance(orbit.distance, dy);
    }
}

/// Apply the orbit state to the actual camera transform whenever it changed.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}
