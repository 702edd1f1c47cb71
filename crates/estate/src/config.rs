/// Terrain extents in world units (X by Z).
pub const TERRAIN_WIDTH: f32 = 60.0;
pub const TERRAIN_DEPTH: f32 = 50.0;

/// Vertex grid resolution along each terrain axis.
pub const TERRAIN_RESOLUTION: usize = 64;

/// World-space Y of the terrain plane before height displacement.
pub const TERRAIN_BASE_Y: f32 = -0.5;

/// Fraction of a grid cell a plot footprint occupies. The remaining 10%
/// forms the visible gap between neighbouring plots.
pub const PLOT_FOOTPRINT_RATIO: f32 = 0.9;

/// Height of a plot block mesh.
pub const PLOT_BLOCK_HEIGHT: f32 = 0.2;

/// World-space Y at which plot blocks sit.
pub const PLOT_SPAWN_Y: f32 = 0.15;

/// Elevation detents for the hover/selection lift, in world units.
pub const HOVER_ELEVATION: f32 = 0.3;
pub const SELECTED_ELEVATION: f32 = 0.5;

/// Per-frame interpolation factor toward the elevation target.
pub const ELEVATION_LERP: f32 = 0.1;

/// Simulated reservation submission delay, in seconds.
pub const SUBMIT_SECONDS: f32 = 1.5;

/// How long the success screen stays up before the dialog resets, in seconds.
pub const SUCCESS_SECONDS: f32 = 2.0;
