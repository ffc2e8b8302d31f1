//! Footer: link columns, social icons, and legal line. Serves as the
//! contact anchor for the navigation bar.

use eframe::egui::{self, Color32, RichText, Sense, Stroke};
use egui_phosphor::regular;

use crate::content;
use crate::ui::{section_band, theme};

pub fn render_footer(ui: &mut egui::Ui) {
    section_band(ui, theme::brand::FOOTER, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(regular::LEAF)
                    .size(22.0)
                    .color(theme::brand::ACCENT),
            );
            ui.label(
                RichText::new(content::BRAND_NAME)
                    .strong()
                    .size(15.0)
                    .color(Color32::WHITE),
            );
        });
        ui.add_space(28.0);

        ui.columns(4, |cols| {
            for (column, col) in content::FOOTER_COLUMNS.iter().zip(cols.iter_mut()) {
                footer_column(col, column);
            }
        });

        ui.add_space(32.0);
        let (rule, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 1.0),
            egui::Sense::hover(),
        );
        ui.painter().line_segment(
            [rule.left_center(), rule.right_center()],
            Stroke::new(1.0, Color32::WHITE.gamma_multiply(0.1)),
        );
        ui.add_space(18.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(content::FOOTER_COPYRIGHT)
                    .size(12.0)
                    .color(theme::text::MUTED_ON_DARK),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for (name, glyph) in content::FOOTER_SOCIALS.iter().rev() {
                    let _ = ui
                        .add(
                            egui::Label::new(
                                RichText::new(*glyph)
                                    .size(16.0)
                                    .color(theme::text::MUTED_ON_DARK),
                            )
                            .sense(Sense::click()),
                        )
                        .on_hover_text(*name)
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                }
                ui.add_space(14.0);
                ui.label(
                    RichText::new(content::FOOTER_LEGAL)
                        .size(12.0)
                        .color(theme::text::MUTED_ON_DARK),
                );
            });
        });
    });
}

fn footer_column(ui: &mut egui::Ui, column: &content::FooterColumn) {
    ui.label(
        RichText::new(column.heading)
            .size(13.5)
            .strong()
            .color(Color32::WHITE),
    );
    ui.add_space(10.0);
    for link in column.links {
        let _ = ui
            .add(
                egui::Label::new(
                    RichText::new(*link)
                        .size(12.5)
                        .color(theme::text::MUTED_ON_DARK),
                )
                .sense(Sense::click()),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        ui.add_space(4.0);
    }
}
