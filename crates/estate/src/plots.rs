//! Plot grid generation.
//!
//! A zone's bounds are tiled into `rows x cols` equal cells, one plot per
//! cell in row-major order. Geometry is a pure function of the zone data;
//! only the status draw consumes the RNG. Plots live for the session and
//! are regenerated on every launch; status is a presentation placeholder,
//! not a reservation ledger.

use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use crate::config::{PLOT_FOOTPRINT_RATIO, PLOT_SPAWN_Y};
use crate::rng::TourRng;
use crate::zones::{Zone, ZoneCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotStatus {
    Available,
    Reserved,
    Sold,
}

impl PlotStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlotStatus::Available => "Available",
            PlotStatus::Reserved => "Reserved",
            PlotStatus::Sold => "Sold",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Plot {
    pub number: u32,
    pub zone_id: String,
    pub status: PlotStatus,
    pub price: Option<u64>,
    pub size_acres: Option<f32>,
    pub position: Vec3,
    /// Footprint on the ground plane (width, depth).
    pub dimensions: Vec2,
    pub resting_elevation: f32,
}

impl Plot {
    pub fn id(&self) -> String {
        format!("plot-{}", self.number)
    }
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(
        "zone `{zone}` has degenerate bounds: min {min:?} must be strictly \
         below max {max:?} on both axes"
    )]
    DegenerateBounds {
        zone: String,
        min: [f32; 2],
        max: [f32; 2],
    },
    #[error("zone `{zone}` has an empty plot grid ({rows}x{cols})")]
    EmptyGrid { zone: String, rows: u32, cols: u32 },
}

/// Tile `zone`'s bounds into its configured grid and emit one plot per cell.
///
/// Returns an empty vec for zones without grid parameters. Fails fast on
/// degenerate bounds or a zero-sized grid; both are configuration mistakes,
/// not runtime conditions.
pub fn generate_plots(zone: &Zone, rng: &mut impl Rng) -> Result<Vec<Plot>, LayoutError> {
    let Some(grid) = &zone.grid else {
        return Ok(Vec::new());
    };

    if !zone.bounds.is_valid() {
        return Err(LayoutError::DegenerateBounds {
            zone: zone.id.clone(),
            min: zone.bounds.min,
            max: zone.bounds.max,
        });
    }
    if grid.rows == 0 || grid.cols == 0 {
        return Err(LayoutError::EmptyGrid {
            zone: zone.id.clone(),
            rows: grid.rows,
            cols: grid.cols,
        });
    }

    let cell_width = zone.bounds.width() / grid.cols as f32;
    let cell_depth = zone.bounds.depth() / grid.rows as f32;

    let mut plots = Vec::with_capacity(grid.plot_count() as usize);
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let number = grid.number_offset + row * grid.cols + col + 1;
            let x = zone.bounds.min[0] + col as f32 * cell_width + cell_width / 2.0;
            let z = zone.bounds.min[1] + row as f32 * cell_depth + cell_depth / 2.0;
            let status = if rng.gen::<f64>() < grid.reserved_probability {
                PlotStatus::Reserved
            } else {
                PlotStatus::Available
            };
            plots.push(Plot {
                number,
                zone_id: zone.id.clone(),
                status,
                price: Some(zone.price_per_plot),
                size_acres: Some(grid.plot_size_acres),
                position: Vec3::new(x, PLOT_SPAWN_Y, z),
                dimensions: Vec2::new(
                    cell_width * PLOT_FOOTPRINT_RATIO,
                    cell_depth * PLOT_FOOTPRINT_RATIO,
                ),
                resting_elevation: grid.resting_elevation,
            });
        }
    }
    Ok(plots)
}

/// All plots generated for the session, across every zone.
#[derive(Resource, Default)]
pub struct PlotBoard {
    plots: Vec<Plot>,
}

impl PlotBoard {
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn get(&self, number: u32) -> Option<&Plot> {
        self.plots.iter().find(|p| p.number == number)
    }
}

/// Startup: generate plots for every zone that carries a grid.
///
/// A zone that fails layout validation is skipped with a warning rather
/// than taking the whole scene down; the other zones still render.
pub fn populate_board(
    catalog: Res<ZoneCatalog>,
    mut rng: ResMut<TourRng>,
    mut board: ResMut<PlotBoard>,
) {
    for zone in catalog.zones() {
        match generate_plots(zone, &mut rng.0) {
            Ok(plots) => {
                if !plots.is_empty() {
                    info!("generated {} plots for zone `{}`", plots.len(), zone.id);
                }
                board.plots.extend(plots);
            }
            Err(e) => warn!("skipping plot generation: {e}"),
        }
    }
}
