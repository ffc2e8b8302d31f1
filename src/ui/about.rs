//! About section: mission copy, partner chips, and the seed funding callout.

use eframe::egui::{self, Color32, RichText, Sense, UiBuilder};
use egui_phosphor::regular;

use crate::content;
use crate::ui::{section_band, section_heading, theme};

pub fn render_about(ui: &mut egui::Ui) {
    section_band(ui, theme::surface::WHITE, |ui| {
        ui.columns(2, |cols| {
            render_copy(&mut cols[0]);
            render_visual_card(&mut cols[1]);
        });
    });
}

fn render_copy(ui: &mut egui::Ui) {
    section_heading(ui, content::ABOUT_SUB, content::ABOUT_TITLE, false);
    ui.add_space(16.0);
    ui.label(
        RichText::new(content::ABOUT_BODY)
            .size(15.0)
            .color(theme::text::BODY),
    );

    ui.add_space(14.0);
    let _ = ui
        .add(
            egui::Label::new(
                RichText::new(format!("{} {}", content::ABOUT_CTA, regular::ARROW_RIGHT))
                    .size(14.0)
                    .strong()
                    .color(theme::brand::PRIMARY),
            )
            .sense(Sense::click()),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    ui.add_space(30.0);
    ui.label(
        RichText::new(content::ABOUT_PARTNERS_LABEL.to_uppercase())
            .size(11.0)
            .strong()
            .color(theme::text::MUTED),
    );
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        for partner in content::ABOUT_PARTNERS {
            partner_chip(ui, partner);
        }
    });
}

fn partner_chip(ui: &mut egui::Ui, name: &str) {
    egui::Frame::default()
        .fill(theme::surface::LIGHT)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(12, 7))
        .show(ui, |ui| {
            ui.label(
                RichText::new(name.to_uppercase())
                    .size(12.0)
                    .strong()
                    .color(theme::text::MUTED),
            );
        });
}

/// Dark visual panel with the seed funding figure overlaid bottom-left.
fn render_visual_card(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let height = (width * 0.75).clamp(260.0, 400.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 10.0, theme::brand::PRIMARY_DEEP);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        regular::LEAF,
        egui::FontId::proportional(rect.height() * 0.45),
        theme::brand::ACCENT.gamma_multiply(0.35),
    );

    let card = egui::Rect::from_min_size(
        egui::pos2(rect.left() + 18.0, rect.bottom() - 128.0),
        egui::vec2(250.0, 110.0),
    );
    painter.rect_filled(card, 8.0, Color32::WHITE);
    ui.scope_builder(UiBuilder::new().max_rect(card.shrink(14.0)), |ui| {
        ui.label(
            RichText::new(content::ABOUT_CALLOUT_FIGURE)
                .size(26.0)
                .strong()
                .color(theme::brand::PRIMARY),
        );
        ui.label(
            RichText::new(content::ABOUT_CALLOUT_TEXT)
                .size(11.5)
                .color(theme::text::MUTED),
        );
    });
}
