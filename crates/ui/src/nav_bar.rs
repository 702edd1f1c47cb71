//! Top navigation: project title, overview/zone switching and the
//! auto-rotate toggle, plus the overview welcome card.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estate::selection::{ActiveZone, AutoRotate};
use estate::zones::ZoneCatalog;

use crate::format::format_kes_short;
use crate::theme::zone_color32;

pub fn nav_bar_ui(
    mut contexts: EguiContexts,
    catalog: Res<ZoneCatalog>,
    mut active: ResMut<ActiveZone>,
    mut auto: ResMut<AutoRotate>,
) {
    let ctx = contexts.ctx_mut();
    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Isinya Gardens")
                    .size(17.0)
                    .strong(),
            );
            ui.label(egui::RichText::new("3D Virtual Tour").size(11.0).weak());
            ui.separator();

            if ui
                .selectable_label(active.0.is_none(), "Overview")
                .clicked()
            {
                active.0 = None;
            }

            for zone in catalog.on_offer() {
                let is_active = active.is(&zone.id);
                let mut text = egui::RichText::new(format!("{}  ON OFFER", zone.name));
                if is_active {
                    text = text.color(egui::Color32::WHITE);
                }
                let mut button = egui::Button::new(text);
                if is_active {
                    button = button.fill(zone_color32(zone));
                }
                if ui.add(button).clicked() {
                    active.0 = Some(zone.id.clone());
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if auto.0 {
                    "⏸ Stop Rotation"
                } else {
                    "▶ Auto Rotate"
                };
                if ui.button(label).clicked() {
                    auto.0 = !auto.0;
                }
            });
        });
    });
}

/// Bottom-center intro card, shown only in overview mode.
pub fn welcome_card_ui(
    mut contexts: EguiContexts,
    catalog: Res<ZoneCatalog>,
    active: Res<ActiveZone>,
) {
    if active.0.is_some() {
        return;
    }
    let ctx = contexts.ctx_mut();
    egui::Window::new("welcome_card")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Welcome to Isinya Gardens")
                        .size(18.0)
                        .strong(),
                );
                ui.label(
                    "Explore our premium land development in Kajiado County. \
                     Click on a zone or plot to learn more.",
                );
                ui.horizontal(|ui| {
                    for zone in catalog.on_offer() {
                        ui.colored_label(
                            zone_color32(zone),
                            format!("● {} - {}", zone.name, format_kes_short(zone.price_per_plot)),
                        );
                    }
                });
            });
        });
}
