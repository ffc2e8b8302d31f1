//! Navigation bar: brand, section links, and login chrome.
//!
//! The bar condenses once the page scrolls past a threshold, matching
//! the rest of the kiosk's scroll-linked behavior.

use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular;

use crate::content::{BRAND_NAME, NAV_LINKS};
use crate::state::AppState;
use crate::ui::{theme, NAV_HEIGHT, NAV_HEIGHT_CONDENSED};

pub fn render_navbar(ctx: &egui::Context, state: &mut AppState) {
    let condensed = state.scroll.condensed();
    let height = if condensed {
        NAV_HEIGHT_CONDENSED
    } else {
        NAV_HEIGHT
    };

    egui::TopBottomPanel::top("navbar")
        .exact_height(height)
        .frame(egui::Frame::side_top_panel(&ctx.style()).fill(theme::brand::DARK))
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(regular::LEAF)
                        .size(22.0)
                        .color(theme::brand::ACCENT),
                );
                let brand_size = if condensed { 14.0 } else { 16.0 };
                ui.label(
                    RichText::new(BRAND_NAME)
                        .strong()
                        .size(brand_size)
                        .color(Color32::WHITE),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(12.0);

                    // Login and search are static chrome on the kiosk.
                    let _ = ui.add(
                        egui::Button::new(
                            RichText::new("Login").size(13.0).strong().color(Color32::WHITE),
                        )
                        .fill(theme::brand::PRIMARY)
                        .min_size(egui::vec2(0.0, 30.0)),
                    );
                    ui.label(
                        RichText::new(regular::MAGNIFYING_GLASS)
                            .size(16.0)
                            .color(theme::text::MUTED_ON_DARK),
                    );
                    ui.add_space(8.0);

                    for link in NAV_LINKS.iter().rev() {
                        if nav_link(ui, link.label).clicked() {
                            state.scroll.request_jump(link.section);
                        }
                    }
                });
            });
        });
}

fn nav_link(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Label::new(
            RichText::new(label)
                .size(13.5)
                .color(Color32::from_gray(225)),
        )
        .sense(egui::Sense::click()),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
