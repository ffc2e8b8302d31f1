//! Featured stories: card strip of success stories.

use eframe::egui::{self, RichText, Sense};
use egui_phosphor::regular;

use crate::content;
use crate::ui::{section_band, section_heading, theme};

pub fn render_stories(ui: &mut egui::Ui) {
    section_band(ui, theme::surface::WHITE, |ui| {
        section_heading(ui, content::STORIES_SUB, content::STORIES_TITLE, false);
        ui.add_space(24.0);

        ui.columns(3, |cols| {
            for (story, col) in content::STORIES.iter().zip(cols.iter_mut()) {
                story_card(col, story);
            }
        });
    });
}

fn story_card(ui: &mut egui::Ui, story: &content::Story) {
    egui::Frame::default()
        .fill(theme::surface::CARD)
        .corner_radius(8.0)
        .show(ui, |ui| {
            render_cover(ui);
            egui::Frame::default()
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(story.title)
                            .size(15.0)
                            .strong()
                            .color(theme::text::HEADING),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(story.date)
                            .size(12.0)
                            .color(theme::text::MUTED),
                    );
                });
        });
}

fn render_cover(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 140.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 8.0, theme::surface::LIGHT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        regular::IMAGE,
        egui::FontId::proportional(36.0),
        theme::brand::PRIMARY.gamma_multiply(0.4),
    );
}
