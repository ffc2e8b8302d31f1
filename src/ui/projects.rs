//! Project showcase: dark band of co-financed solar project cards.

use eframe::egui::{self, Color32, RichText, Sense};
use egui_phosphor::regular;

use crate::content;
use crate::ui::{ghost_button, section_band, section_heading, theme};

pub fn render_projects(ui: &mut egui::Ui) {
    section_band(ui, theme::brand::DARK, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                section_heading(ui, content::PROJECTS_SUB, content::PROJECTS_TITLE, true);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let _ = ghost_button(ui, content::PROJECTS_CTA);
            });
        });
        ui.add_space(28.0);

        ui.columns(3, |cols| {
            for (project, col) in content::PROJECTS.iter().zip(cols.iter_mut()) {
                project_card(col, project);
            }
        });
    });
}

fn project_card(ui: &mut egui::Ui, project: &content::Project) {
    egui::Frame::default()
        .fill(theme::surface::CARD_DARK)
        .corner_radius(8.0)
        .show(ui, |ui| {
            render_cover(ui);
            egui::Frame::default()
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(project.title)
                            .size(16.5)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.add_space(10.0);
                    detail_row(ui, regular::BANK, project.capital);
                    detail_row(ui, regular::LIGHTNING, project.capacity);
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(format!(
                            "{} Close: {}",
                            regular::CALENDAR,
                            project.closed
                        ))
                        .size(12.0)
                        .color(theme::text::MUTED_ON_DARK),
                    );
                });
        });
}

/// Cover strip standing in for the project photograph.
fn render_cover(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 130.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 8.0, theme::brand::PRIMARY_DEEP);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        regular::SOLAR_PANEL,
        egui::FontId::proportional(44.0),
        theme::brand::ACCENT.gamma_multiply(0.5),
    );
    painter.text(
        rect.left_top() + egui::vec2(12.0, 12.0),
        egui::Align2::LEFT_TOP,
        content::PROJECT_BADGE,
        egui::FontId::proportional(10.5),
        theme::brand::ACCENT,
    );
}

fn detail_row(ui: &mut egui::Ui, glyph: &str, text: &str) {
    ui.label(
        RichText::new(format!("{} {}", glyph, text))
            .size(13.0)
            .color(theme::text::BODY_ON_DARK),
    );
}
