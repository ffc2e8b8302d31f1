//! Impact section: tabbed figures with count-up animation, capacity
//! building panels, and the theory of change steps.

use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular;
use web_time::Instant;

use crate::content;
use crate::state::{AppState, ImpactTab};
use crate::ui::{cta_button, icon_badge, section_band, section_heading, theme};

pub fn render_impact(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let band = ui.scope(|ui| {
        section_band(ui, theme::surface::LIGHT, |ui| {
            section_heading(ui, content::IMPACT_SUB, content::IMPACT_TITLE, false);
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                for tab in ImpactTab::all() {
                    ui.selectable_value(&mut state.impact.tab, *tab, tab.label());
                }
            });
            ui.add_space(24.0);

            match state.impact.tab {
                ImpactTab::Numbers => render_numbers(ui, state, now),
                ImpactTab::Capacity => render_capacity(ui),
                ImpactTab::Theory => render_theory(ui),
            }
        });
    });

    // Figures start sweeping the first time the section scrolls into view.
    if ui.is_rect_visible(band.response.rect) {
        state.impact.trigger_all(now);
    }
}

fn render_numbers(ui: &mut egui::Ui, state: &AppState, now: Instant) {
    let pipeline = state.impact.pipeline.display_at(now);
    let card_values: Vec<String> = state
        .impact
        .cards
        .iter()
        .zip(content::IMPACT_STATS.iter())
        .map(|(card, stat)| format!("{}{}", card.display_at(now), stat.suffix))
        .collect();

    // Headline figures: animated pipeline next to the static naira equivalent.
    ui.columns(2, |cols| {
        headline_figure(
            &mut cols[0],
            content::PIPELINE_LABEL,
            &pipeline,
            content::PIPELINE_SUFFIX,
        );
        headline_figure(
            &mut cols[1],
            content::LOCAL_VALUE_LABEL,
            content::LOCAL_VALUE,
            content::LOCAL_VALUE_SUFFIX,
        );
    });
    ui.add_space(26.0);

    for (stats, values) in content::IMPACT_STATS.chunks(3).zip(card_values.chunks(3)) {
        ui.columns(3, |cols| {
            for ((stat, value), col) in stats.iter().zip(values).zip(cols.iter_mut()) {
                stat_card(col, stat, value);
            }
        });
        ui.add_space(14.0);
    }

    ui.add_space(12.0);
    let _ = cta_button(ui, content::IMPACT_REPORT_CTA);
}

fn headline_figure(ui: &mut egui::Ui, label: &str, value: &str, suffix: &str) {
    ui.label(
        RichText::new(label.to_uppercase())
            .size(11.5)
            .strong()
            .color(theme::text::MUTED),
    );
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(value)
                .size(44.0)
                .strong()
                .color(theme::brand::PRIMARY),
        );
        ui.label(RichText::new(suffix).size(16.0).color(theme::text::BODY));
    });
}

fn stat_card(ui: &mut egui::Ui, stat: &content::ImpactStat, value: &str) {
    egui::Frame::default()
        .fill(theme::surface::CARD)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_height(108.0);
            icon_badge(
                ui,
                stat.icon,
                theme::brand::PRIMARY.gamma_multiply(0.12),
                theme::brand::PRIMARY,
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(value)
                    .size(24.0)
                    .strong()
                    .color(theme::text::HEADING),
            );
            ui.label(
                RichText::new(stat.label)
                    .size(12.5)
                    .color(theme::text::MUTED),
            );
        });
}

fn render_capacity(ui: &mut egui::Ui) {
    ui.columns(2, |cols| {
        for (panel, col) in content::CAPACITY_PANELS.iter().zip(cols.iter_mut()) {
            capacity_panel(col, panel);
        }
    });
}

fn capacity_panel(ui: &mut egui::Ui, panel: &content::CapacityPanel) {
    let (fill, title_color, body_color) = if panel.dark {
        (
            theme::brand::PRIMARY,
            Color32::WHITE,
            Color32::WHITE.gamma_multiply(0.85),
        )
    } else {
        (theme::surface::CARD, theme::text::HEADING, theme::text::BODY)
    };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            let badge_fill = if panel.dark {
                Color32::WHITE.gamma_multiply(0.15)
            } else {
                theme::brand::PRIMARY.gamma_multiply(0.12)
            };
            let badge_tint = if panel.dark {
                Color32::WHITE
            } else {
                theme::brand::PRIMARY
            };
            icon_badge(ui, panel.icon, badge_fill, badge_tint);
            ui.add_space(10.0);
            ui.label(RichText::new(panel.title).size(19.0).strong().color(title_color));
            ui.add_space(8.0);
            ui.label(RichText::new(panel.body).size(13.5).color(body_color));
            ui.add_space(12.0);
            for item in panel.items {
                ui.label(
                    RichText::new(format!("{} {}", regular::CARET_RIGHT, item))
                        .size(13.0)
                        .color(title_color),
                );
            }
        });
}

fn render_theory(ui: &mut egui::Ui) {
    ui.label(
        RichText::new(content::THEORY_TITLE)
            .size(21.0)
            .strong()
            .color(theme::text::HEADING),
    );
    ui.add_space(6.0);
    ui.label(
        RichText::new(content::THEORY_BODY)
            .size(13.5)
            .color(theme::text::BODY),
    );
    ui.add_space(20.0);

    ui.columns(4, |cols| {
        for (step, col) in content::THEORY_STEPS.iter().zip(cols.iter_mut()) {
            theory_step(col, step);
        }
    });
}

fn theory_step(ui: &mut egui::Ui, step: &content::TheoryStep) {
    egui::Frame::default()
        .fill(theme::surface::CARD)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_height(150.0);
            ui.label(
                RichText::new(step.step)
                    .size(10.5)
                    .strong()
                    .color(theme::brand::ACCENT),
            );
            ui.add_space(6.0);
            icon_badge(
                ui,
                step.icon,
                theme::brand::PRIMARY.gamma_multiply(0.12),
                theme::brand::PRIMARY,
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(step.title)
                    .size(15.0)
                    .strong()
                    .color(theme::text::HEADING),
            );
            ui.label(RichText::new(step.body).size(12.0).color(theme::text::MUTED));
        });
}
