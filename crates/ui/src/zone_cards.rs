//! "Choose Your Zone" offer cards: pricing, deadline increase, features
//! and the entry point into the reservation flow.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estate::reservation::ReservationDialog;
use estate::selection::ActiveZone;
use estate::zones::{Zone, ZoneCatalog};

use crate::format::format_kes;
use crate::theme::{zone_color32, GREEN, RED, TEAL};

/// The reserve flow both highlights the zone in the scene and opens the
/// reservation dialog pre-populated with its pricing.
pub fn reserve_zone(zone_id: &str, active: &mut ActiveZone, dialog: &mut ReservationDialog) {
    active.0 = Some(zone_id.to_owned());
    dialog.open_for(zone_id);
}

fn zone_card(
    ui: &mut egui::Ui,
    zone: &Zone,
    active: &mut ActiveZone,
    dialog: &mut ReservationDialog,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&zone.name)
                    .size(15.0)
                    .strong()
                    .color(zone_color32(zone)),
            );
            if zone.id == "zone-c" {
                ui.label(
                    egui::RichText::new("BEST VALUE")
                        .size(10.0)
                        .color(egui::Color32::BLACK)
                        .background_color(TEAL),
                );
            }
        });
        ui.label(format!("{} plots available", zone.plots_available));
        ui.label(egui::RichText::new(&zone.description).weak());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Current price");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(
                    GREEN,
                    egui::RichText::new(format_kes(zone.price_per_plot)).strong(),
                );
            });
        });
        ui.horizontal(|ui| {
            ui.label("10% deposit");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(TEAL, format_kes(zone.deposit()));
            });
        });
        ui.horizontal(|ui| {
            ui.label("After July 2026");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(
                    RED,
                    format!(
                        "{} (+{})",
                        format_kes(zone.price_after_deadline),
                        format_kes(zone.deadline_savings())
                    ),
                );
            });
        });

        ui.add_space(4.0);
        for feature in &zone.features {
            ui.label(format!("✔ {feature}"));
        }

        ui.add_space(6.0);
        let button = egui::Button::new(
            egui::RichText::new(format!("Reserve Plot in {}", zone.name))
                .color(egui::Color32::WHITE),
        )
        .fill(zone_color32(zone));
        if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
            reserve_zone(&zone.id, active, dialog);
        }
    });
}

pub fn zone_cards_ui(
    mut contexts: EguiContexts,
    catalog: Res<ZoneCatalog>,
    mut active: ResMut<ActiveZone>,
    mut dialog: ResMut<ReservationDialog>,
) {
    let ctx = contexts.ctx_mut();
    egui::Window::new("Choose Your Zone")
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 60.0])
        .resizable(false)
        .collapsible(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Prices increase after July 2026. Reserve with a 10% deposit.")
                    .weak(),
            );
            for zone in catalog.on_offer() {
                zone_card(ui, zone, &mut active, &mut dialog);
            }
        });
}
