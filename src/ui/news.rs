//! Media center: latest news and updates as tagged rows.

use eframe::egui::{self, RichText, Sense};
use egui_phosphor::regular;

use crate::content;
use crate::ui::{section_band, section_heading, theme};

pub fn render_news(ui: &mut egui::Ui) {
    section_band(ui, theme::surface::LIGHT, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                section_heading(ui, content::NEWS_SUB, content::NEWS_TITLE, false);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let _ = ui
                    .add(
                        egui::Label::new(
                            RichText::new(format!(
                                "{} {}",
                                content::NEWS_CTA,
                                regular::ARROW_RIGHT
                            ))
                            .size(14.0)
                            .strong()
                            .color(theme::brand::PRIMARY),
                        )
                        .sense(Sense::click()),
                    )
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
            });
        });
        ui.add_space(22.0);

        for (index, item) in content::NEWS_ITEMS.iter().enumerate() {
            if index > 0 {
                ui.separator();
            }
            news_row(ui, item);
        }
    });
}

fn news_row(ui: &mut egui::Ui, item: &content::NewsItem) {
    egui::Frame::default()
        .inner_margin(egui::Margin::symmetric(0, 14))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                tag_pill(ui, item.tag);
                ui.add_space(6.0);
                ui.label(
                    RichText::new(item.date)
                        .size(12.0)
                        .color(theme::text::MUTED),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let _ = ui
                        .add(
                            egui::Label::new(
                                RichText::new(format!(
                                    "{} {}",
                                    content::NEWS_READ,
                                    regular::ARROW_RIGHT
                                ))
                                .size(13.0)
                                .color(theme::brand::PRIMARY),
                            )
                            .sense(Sense::click()),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                });
            });
            ui.add_space(6.0);
            ui.label(
                RichText::new(item.title)
                    .size(15.5)
                    .strong()
                    .color(theme::text::HEADING),
            );
        });
}

fn tag_pill(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::default()
        .fill(theme::brand::PRIMARY.gamma_multiply(0.12))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                RichText::new(tag.to_uppercase())
                    .size(10.5)
                    .strong()
                    .color(theme::brand::PRIMARY),
            );
        });
}
