//! Bottom-right color key for the scene.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estate::zones::ZoneCatalog;

use crate::format::format_kes_short;
use crate::theme::zone_color32;

fn legend_row(ui: &mut egui::Ui, color: egui::Color32, label: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(3), color);
        ui.label(label);
    });
}

pub fn legend_ui(mut contexts: EguiContexts, catalog: Res<ZoneCatalog>) {
    let ctx = contexts.ctx_mut();
    egui::Window::new("Legend")
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            for zone in catalog.on_offer() {
                legend_row(
                    ui,
                    zone_color32(zone),
                    &format!("{} ({})", zone.name, format_kes_short(zone.price_per_plot)),
                );
            }
            if let Some(school) = catalog.get("school") {
                legend_row(ui, zone_color32(school), &school.name);
            }
            if let Some(nursery) = catalog.get("nursery") {
                legend_row(ui, zone_color32(nursery), &nursery.name);
            }
            legend_row(ui, egui::Color32::from_rgb(0x0e, 0xa5, 0xe9), "River");
        });
}
