//! Plot inspection: the detail panel for the selected plot and the
//! lightweight tooltip for the hovered one.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estate::plots::{PlotBoard, PlotStatus};
use estate::selection::{HoveredPlot, SelectedPlot};
use estate::zones::ZoneCatalog;

use crate::format::format_kes;
use crate::theme::{zone_color32, GREEN, YELLOW};

fn status_color32(status: PlotStatus) -> egui::Color32 {
    match status {
        PlotStatus::Available => GREEN,
        PlotStatus::Reserved => YELLOW,
        PlotStatus::Sold => egui::Color32::GRAY,
    }
}

pub fn plot_panel_ui(
    mut contexts: EguiContexts,
    board: Res<PlotBoard>,
    catalog: Res<ZoneCatalog>,
    mut selected: ResMut<SelectedPlot>,
) {
    let Some(number) = selected.0 else {
        return;
    };
    let Some(plot) = board.get(number) else {
        // Board was rebuilt under us; drop the stale selection.
        selected.0 = None;
        return;
    };

    let ctx = contexts.ctx_mut();
    let mut close = false;
    egui::Window::new(format!("Plot #{}", plot.number))
        .anchor(egui::Align2::LEFT_TOP, [16.0, 80.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            if let Some(zone) = catalog.get(&plot.zone_id) {
                ui.colored_label(zone_color32(zone), &zone.name);
            }
            ui.separator();

            if let Some(price) = plot.price {
                ui.horizontal(|ui| {
                    ui.label("Price");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.strong(format_kes(price));
                    });
                });
            }
            if let Some(size) = plot.size_acres {
                ui.horizontal(|ui| {
                    ui.label("Size");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{size} acres"));
                    });
                });
            }
            ui.horizontal(|ui| {
                ui.label("Status");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(status_color32(plot.status), plot.status.label());
                });
            });

            ui.separator();
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    if close {
        selected.0 = None;
    }
}

pub fn hover_tooltip_ui(
    mut contexts: EguiContexts,
    board: Res<PlotBoard>,
    hovered: Res<HoveredPlot>,
) {
    let Some(plot) = hovered.0.and_then(|n| board.get(n)) else {
        return;
    };

    let ctx = contexts.ctx_mut();
    egui::Window::new("hover_tooltip")
        .title_bar(false)
        .resizable(false)
        .interactable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, [16.0, -16.0])
        .show(ctx, |ui| {
            ui.strong(format!("Plot #{}", plot.number));
            if let Some(size) = plot.size_acres {
                ui.label(format!("{} • {size} acres", plot.zone_id));
            }
            if let Some(price) = plot.price {
                ui.colored_label(GREEN, format_kes(price));
            }
            ui.colored_label(status_color32(plot.status), plot.status.label());
        });
}
