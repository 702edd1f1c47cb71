use bevy_egui::{egui, EguiContexts};

use estate::zones::Zone;

pub fn zone_color32(zone: &Zone) -> egui::Color32 {
    egui::Color32::from_rgb(zone.color[0], zone.color[1], zone.color[2])
}

pub const TEAL: egui::Color32 = egui::Color32::from_rgb(0x14, 0xb8, 0xa6);
pub const GREEN: egui::Color32 = egui::Color32::from_rgb(0x4a, 0xde, 0x80);
pub const YELLOW: egui::Color32 = egui::Color32::from_rgb(0xea, 0xb3, 0x08);
pub const RED: egui::Color32 = egui::Color32::from_rgb(0xf8, 0x71, 0x71);

pub fn apply_tour_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Near-black panels with a teal accent
    let panel = egui::Color32::from_rgb(18, 20, 26);
    let inactive = egui::Color32::from_rgb(38, 42, 52);
    let hover = egui::Color32::from_rgb(55, 65, 80);
    let active = TEAL;

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(12, 14, 18);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(26, 30, 38);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
