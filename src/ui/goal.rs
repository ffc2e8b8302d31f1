//! Net zero goal: strategy report visual, environmental objectives, and
//! the domestic investor strip.

use eframe::egui::{self, Color32, RichText, Sense, UiBuilder};
use egui_phosphor::regular;

use crate::content;
use crate::ui::{icon_badge, section_band, section_heading, theme};

pub fn render_goal(ui: &mut egui::Ui) {
    section_band(ui, theme::brand::DARK, |ui| {
        ui.columns(2, |cols| {
            render_report_card(&mut cols[0]);

            let ui = &mut cols[1];
            section_heading(ui, content::GOAL_SUB, content::GOAL_TITLE, true);
            ui.add_space(14.0);
            ui.label(
                RichText::new(content::GOAL_BODY)
                    .size(14.0)
                    .color(theme::text::BODY_ON_DARK),
            );
            ui.add_space(20.0);

            ui.columns(2, |cards| {
                for (card, col) in content::GOAL_CARDS.iter().zip(cards.iter_mut()) {
                    goal_card(col, card);
                }
            });
        });

        ui.add_space(48.0);
        render_investors(ui);
    });
}

/// Strategy report cover standing upright in the left column.
fn render_report_card(ui: &mut egui::Ui) {
    let width = ui.available_width().min(300.0);
    let height = width * 1.25;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 10.0, theme::brand::PRIMARY_DEEP);
    painter.text(
        rect.center() + egui::vec2(0.0, -height * 0.1),
        egui::Align2::CENTER_CENTER,
        regular::LEAF,
        egui::FontId::proportional(56.0),
        theme::brand::ACCENT,
    );
    ui.scope_builder(
        UiBuilder::new().max_rect(rect.shrink(20.0)),
        |ui| {
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.label(
                    RichText::new(content::GOAL_REPORT_SUB)
                        .size(13.0)
                        .color(theme::text::BODY_ON_DARK),
                );
                ui.label(
                    RichText::new(content::GOAL_REPORT_TITLE)
                        .size(26.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
        },
    );
}

fn goal_card(ui: &mut egui::Ui, card: &content::GoalCard) {
    egui::Frame::default()
        .fill(theme::surface::CARD_DARK)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            icon_badge(
                ui,
                card.icon,
                theme::brand::ACCENT.gamma_multiply(0.15),
                theme::brand::ACCENT,
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(card.title)
                    .size(15.5)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(card.body)
                    .size(12.5)
                    .color(theme::text::MUTED_ON_DARK),
            );
        });
}

fn render_investors(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(content::INVESTORS_LABEL.to_uppercase())
                .size(11.5)
                .strong()
                .color(theme::text::MUTED_ON_DARK),
        );
    });
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 28.0;
        for investor in content::INVESTORS {
            ui.label(
                RichText::new(investor)
                    .size(15.0)
                    .strong()
                    .color(Color32::WHITE.gamma_multiply(0.6)),
            );
        }
    });
}
