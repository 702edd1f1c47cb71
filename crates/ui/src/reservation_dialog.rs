//! The reservation dialog: a modal window over a dimmed backdrop with the
//! contact form, the simulated submission phase and the success screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estate::reservation::{DialogPhase, ReservationDialog};
use estate::zones::ZoneCatalog;

use crate::format::format_kes;
use crate::theme::{GREEN, RED, TEAL};

pub fn reservation_dialog_ui(
    mut contexts: EguiContexts,
    catalog: Res<ZoneCatalog>,
    mut dialog: ResMut<ReservationDialog>,
) {
    if !dialog.open {
        return;
    }
    let ctx = contexts.ctx_mut();

    // Dim the rest of the UI while the dialog is up.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("reservation_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let zone = dialog.zone_id.as_ref().and_then(|id| catalog.get(id));
    let success = matches!(dialog.phase, DialogPhase::Success(_));
    let submitting = dialog.is_submitting();
    let mut close = false;

    egui::Window::new("Reserve Your Plot")
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            if success {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new("✔").size(36.0).color(GREEN));
                    ui.label(
                        egui::RichText::new("Reservation Request Sent!")
                            .size(16.0)
                            .strong(),
                    );
                    ui.label("Our team will contact you within 24 hours.");
                    ui.add_space(12.0);
                });
                return;
            }

            if let Some(zone) = zone {
                ui.label(egui::RichText::new(&zone.name).weak());
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Plot price");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.strong(format_kes(zone.price_per_plot));
                    });
                });
                ui.horizontal(|ui| {
                    ui.label("10% deposit to reserve");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(
                            TEAL,
                            egui::RichText::new(format_kes(zone.deposit())).strong(),
                        );
                    });
                });
                if zone.deadline_savings() > 0 {
                    ui.colored_label(
                        GREEN,
                        format!(
                            "✔ You save {} by reserving now!",
                            format_kes(zone.deadline_savings())
                        ),
                    );
                }
                ui.separator();
            }

            ui.label("Full Name *");
            ui.add_enabled(
                !submitting,
                egui::TextEdit::singleline(&mut dialog.form.name).hint_text("John Doe"),
            );
            ui.label("Phone Number *");
            ui.add_enabled(
                !submitting,
                egui::TextEdit::singleline(&mut dialog.form.phone)
                    .hint_text("+254 7XX XXX XXX"),
            );
            ui.label("Email");
            ui.add_enabled(
                !submitting,
                egui::TextEdit::singleline(&mut dialog.form.email)
                    .hint_text("john@example.com"),
            );
            ui.label("Message (optional)");
            ui.add_enabled(
                !submitting,
                egui::TextEdit::multiline(&mut dialog.form.message)
                    .desired_rows(3)
                    .hint_text("Any specific requirements?"),
            );

            if let Some(error) = dialog.error {
                ui.colored_label(RED, error.to_string());
            }

            ui.add_space(6.0);
            if submitting {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Processing...");
                });
            } else {
                ui.horizontal(|ui| {
                    let submit = egui::Button::new(
                        egui::RichText::new("Reserve Now with 10% Deposit")
                            .color(egui::Color32::WHITE),
                    )
                    .fill(TEAL);
                    if ui.add(submit).clicked() {
                        if let Some(zone) = zone {
                            // Validation errors stay inline in dialog.error.
                            let _ = dialog.submit(zone);
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            }

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("By submitting, you agree to be contacted by the RDG Team")
                    .size(10.0)
                    .weak(),
            );
        });

    if close {
        dialog.close();
    }
}
