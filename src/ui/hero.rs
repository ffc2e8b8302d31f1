//! Hero section: full-height headline with a scroll-linked fade.

use eframe::egui::{self, Color32, RichText, Sense, UiBuilder};
use egui_phosphor::regular;

use crate::content::{self, SectionId};
use crate::state::AppState;
use crate::ui::{centered, cta_button, theme, NAV_HEIGHT};

pub fn render_hero(ui: &mut egui::Ui, state: &mut AppState) {
    let height = (ui.ctx().screen_rect().height() - NAV_HEIGHT).max(480.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, theme::brand::DARK);
    // Soft accent wash standing in for the hero photograph.
    painter.circle_filled(
        rect.right_center() + egui::vec2(80.0, -40.0),
        rect.height() * 0.55,
        theme::brand::ACCENT.gamma_multiply(0.05),
    );
    painter.circle_filled(
        rect.right_bottom() + egui::vec2(-120.0, 40.0),
        rect.height() * 0.3,
        theme::brand::PRIMARY.gamma_multiply(0.25),
    );

    let fade = state.scroll.hero_fade();
    if fade <= 0.0 {
        return;
    }

    let content_rect = rect.shrink2(egui::vec2(0.0, 40.0));
    ui.scope_builder(UiBuilder::new().max_rect(content_rect), |ui| {
        ui.multiply_opacity(fade);
        centered(ui, |ui| {
            ui.add_space(height * 0.16);
            ui.label(
                RichText::new(content::HERO_EYEBROW.to_uppercase())
                    .size(13.0)
                    .strong()
                    .color(theme::brand::ACCENT),
            );
            ui.add_space(14.0);

            let [first, accent, last] = content::HERO_HEADLINE;
            ui.label(RichText::new(first).size(46.0).strong().color(Color32::WHITE));
            ui.label(
                RichText::new(accent)
                    .size(46.0)
                    .strong()
                    .color(theme::brand::ACCENT),
            );
            ui.label(RichText::new(last).size(46.0).strong().color(Color32::WHITE));

            ui.add_space(18.0);
            ui.scope(|ui| {
                ui.set_max_width(560.0);
                ui.label(
                    RichText::new(content::HERO_LEAD)
                        .size(15.0)
                        .color(theme::text::BODY_ON_DARK),
                );
            });

            ui.add_space(26.0);
            if cta_button(ui, content::HERO_CTA).clicked() {
                state.scroll.request_jump(SectionId::About);
            }
        });
    });

    // Scroll indicator pinned to the bottom of the section.
    let hint_color = theme::text::MUTED_ON_DARK.gamma_multiply(fade);
    let painter = ui.painter();
    painter.text(
        rect.center_bottom() + egui::vec2(0.0, -44.0),
        egui::Align2::CENTER_BOTTOM,
        content::HERO_SCROLL_HINT.to_uppercase(),
        egui::FontId::proportional(11.0),
        hint_color,
    );
    painter.text(
        rect.center_bottom() + egui::vec2(0.0, -24.0),
        egui::Align2::CENTER_BOTTOM,
        regular::CARET_DOWN,
        egui::FontId::proportional(16.0),
        hint_color,
    );
}
