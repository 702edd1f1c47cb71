//! Domain state for the Isinya Gardens virtual tour: the zone catalog,
//! the plot grid generator, selection/camera flags, and the reservation
//! dialog state machine. Nothing in this crate touches the renderer.

use bevy::prelude::*;

pub mod config;
pub mod plots;
pub mod reservation;
pub mod rng;
pub mod selection;
pub mod zones;

pub struct EstatePlugin;

impl Plugin for EstatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<zones::ZoneCatalog>()
            .init_resource::<rng::TourRng>()
            .init_resource::<plots::PlotBoard>()
            .init_resource::<selection::ActiveZone>()
            .init_resource::<selection::SelectedPlot>()
            .init_resource::<selection::HoveredPlot>()
            .init_resource::<selection::AutoRotate>()
            .init_resource::<reservation::ReservationDialog>()
            .add_systems(Startup, plots::populate_board)
            .add_systems(Update, reservation::tick_reservation);
    }
}
