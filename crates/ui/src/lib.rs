//! egui overlay for the virtual tour: navigation bar, zone offer cards,
//! plot inspection, legend and the reservation dialog.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod format;
pub mod legend;
pub mod nav_bar;
pub mod plot_panel;
pub mod reservation_dialog;
pub mod theme;
pub mod zone_cards;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_tour_theme)
            .add_systems(
                Update,
                (
                    nav_bar::nav_bar_ui,
                    nav_bar::welcome_card_ui,
                    zone_cards::zone_cards_ui,
                    plot_panel::plot_panel_ui,
                    plot_panel::hover_tooltip_ui,
                    legend::legend_ui,
                    reservation_dialog::reservation_dialog_ui,
                ),
            );
    }
}
