//! Coverage map section: projected Nigeria boundaries on a dot grid,
//! alongside the states-covered stat.

use eframe::egui::{self, Pos2, RichText, Sense, Shape, Stroke};

use crate::content;
use crate::map::{MapPhase, MapView, MAP_VIEWPORT};
use crate::ui::{ghost_button, section_band, theme};

/// Spacing of the background dot grid, in points.
const DOT_SPACING: f32 = 30.0;

pub fn render_map_section(ui: &mut egui::Ui, map: &MapView) {
    section_band(ui, theme::brand::DARK, |ui| {
        ui.columns(2, |cols| {
            render_stat_column(&mut cols[0], map);
            render_canvas(&mut cols[1], map);
        });
    });
}

fn render_stat_column(ui: &mut egui::Ui, map: &MapView) {
    // Oversized ghost numeral painted behind the stat block.
    let ghost_pos = ui.cursor().min + egui::vec2(-10.0, -36.0);
    ui.painter().text(
        ghost_pos,
        egui::Align2::LEFT_TOP,
        content::MAP_STAT,
        egui::FontId::proportional(150.0),
        theme::map::ghost_text(),
    );

    ui.add_space(30.0);
    ui.label(
        RichText::new(content::MAP_STAT)
            .size(56.0)
            .strong()
            .color(theme::brand::ACCENT),
    );
    ui.label(
        RichText::new(content::MAP_STAT_LABEL)
            .size(19.0)
            .strong()
            .color(egui::Color32::WHITE),
    );
    ui.add_space(14.0);
    ui.label(
        RichText::new(content::MAP_BODY)
            .size(14.0)
            .color(theme::text::BODY_ON_DARK),
    );
    ui.add_space(22.0);
    let _ = ghost_button(ui, content::MAP_CTA);

    ui.add_space(16.0);
    match map.phase() {
        phase if phase.is_loading() => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new(phase.label())
                        .size(12.5)
                        .color(theme::text::MUTED_ON_DARK),
                );
            });
        }
        MapPhase::Unavailable => {
            ui.label(
                RichText::new(MapPhase::Unavailable.label())
                    .size(13.0)
                    .strong()
                    .color(theme::text::MUTED_ON_DARK),
            );
            if let Some(failure) = map.failure() {
                ui.label(
                    RichText::new(failure.to_string())
                        .size(11.5)
                        .color(theme::text::MUTED_ON_DARK),
                );
            }
        }
        _ => {}
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if map.has_map() {
            ui.add_space(10.0);
            if ghost_button(ui, "Export SVG").clicked() {
                export_svg(map);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_svg(map: &MapView) {
    let svg = crate::geo::svg::render_document(
        map.country_paths(),
        map.state_paths(),
        MAP_VIEWPORT,
    );
    match std::fs::write("facility-map.svg", svg) {
        Ok(()) => log::info!("Wrote facility-map.svg"),
        Err(e) => log::warn!("Failed to write facility-map.svg: {}", e),
    }
}

fn render_canvas(ui: &mut egui::Ui, map: &MapView) {
    let width = ui.available_width().min(640.0);
    let height = width * (MAP_VIEWPORT.1 / MAP_VIEWPORT.0) as f32;
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), Sense::hover());
    let rect = response.rect;
    if !ui.is_rect_visible(rect) {
        return;
    }

    render_dot_grid(&painter, &rect);

    // Projected coordinates are in the fixed viewport; scale uniformly
    // into the allocated rect.
    let scale = width / MAP_VIEWPORT.0 as f32;
    let to_screen = |point: (f64, f64)| {
        Pos2::new(
            rect.left() + point.0 as f32 * scale,
            rect.top() + point.1 as f32 * scale,
        )
    };

    for path in map.country_paths() {
        for ring in path.rings() {
            let points: Vec<Pos2> = ring.iter().map(|&p| to_screen(p)).collect();
            // Glow pass underneath the crisp outline.
            painter.add(Shape::closed_line(
                points.clone(),
                Stroke::new(4.0, theme::map::glow()),
            ));
            painter.add(Shape::closed_line(
                points,
                Stroke::new(1.5, theme::map::OUTLINE),
            ));
        }
    }

    for path in map.state_paths() {
        for ring in path.rings() {
            let mut points: Vec<Pos2> = ring.iter().map(|&p| to_screen(p)).collect();
            if let Some(&first) = points.first() {
                points.push(first);
            }
            painter.extend(Shape::dashed_line(
                &points,
                Stroke::new(0.5, theme::map::state_line()),
                2.0,
                2.0,
            ));
        }
    }

    match map.phase() {
        MapPhase::Idle | MapPhase::LoadingCountry => {
            canvas_status(&painter, &rect, MapPhase::LoadingCountry.label());
        }
        MapPhase::Unavailable => {
            canvas_status(&painter, &rect, MapPhase::Unavailable.label());
        }
        MapPhase::LoadingStates => {
            // Country already drawn; note the pending interior borders.
            painter.text(
                rect.right_bottom() + egui::vec2(-12.0, -10.0),
                egui::Align2::RIGHT_BOTTOM,
                MapPhase::LoadingStates.label(),
                egui::FontId::proportional(11.0),
                theme::text::MUTED_ON_DARK,
            );
        }
        MapPhase::Ready => {}
    }
}

fn render_dot_grid(painter: &egui::Painter, rect: &egui::Rect) {
    let dot = theme::map::dot();
    let mut y = rect.top() + DOT_SPACING / 2.0;
    while y < rect.bottom() {
        let mut x = rect.left() + DOT_SPACING / 2.0;
        while x < rect.right() {
            painter.circle_filled(Pos2::new(x, y), 1.0, dot);
            x += DOT_SPACING;
        }
        y += DOT_SPACING;
    }
}

fn canvas_status(painter: &egui::Painter, rect: &egui::Rect, label: &str) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        theme::text::MUTED_ON_DARK,
    );
}
