//! UI modules for the facility kiosk.
//!
//! The page is a single scrollable column of full-width sections:
//! - Navigation bar: brand, section links, login chrome
//! - Hero: headline with scroll-linked fade
//! - About, Impact, Projects: portfolio copy and animated figures
//! - Coverage map: projected Nigeria boundaries on a dot grid
//! - Stories, News, Goal, Footer: editorial content

mod about;
mod footer;
mod goal;
mod hero;
mod impact;
mod map_section;
mod navbar;
mod news;
mod projects;
mod stories;
pub mod theme;

pub use about::render_about;
pub use footer::render_footer;
pub use goal::render_goal;
pub use hero::render_hero;
pub use impact::render_impact;
pub use map_section::render_map_section;
pub use navbar::render_navbar;
pub use news::render_news;
pub use projects::render_projects;
pub use stories::render_stories;

use eframe::egui::{self, Color32, Rect, RichText, Stroke};

/// Height of the expanded navigation bar.
pub const NAV_HEIGHT: f32 = 68.0;
/// Height of the condensed navigation bar.
pub const NAV_HEIGHT_CONDENSED: f32 = 52.0;

/// Maximum width of section content.
const CONTENT_WIDTH: f32 = 1080.0;
/// Vertical padding inside each section band.
const SECTION_PADDING: f32 = 72.0;

/// Renders a full-width section band: background fill painted behind a
/// padded, centered content column.
pub(crate) fn section_band<R>(
    ui: &mut egui::Ui,
    fill: Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    // Reserve a paint slot so the fill lands behind the content.
    let background = ui.painter().add(egui::Shape::Noop);

    let inner = ui.vertical(|ui| {
        ui.add_space(SECTION_PADDING);
        let result = centered(ui, add_contents);
        ui.add_space(SECTION_PADDING);
        result
    });

    let band = Rect::from_min_max(
        egui::pos2(ui.max_rect().left(), inner.response.rect.top()),
        egui::pos2(ui.max_rect().right(), inner.response.rect.bottom()),
    );
    ui.painter()
        .set(background, egui::Shape::rect_filled(band, 0.0, fill));

    inner.inner
}

/// Lays out a fixed-width centered column inside a full-width section.
pub(crate) fn centered<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(CONTENT_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_min_width(width);
            ui.set_max_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

/// Standard section heading: short accent rule, uppercase eyebrow, title.
pub(crate) fn section_heading(ui: &mut egui::Ui, eyebrow: &str, title: &str, on_dark: bool) {
    let eyebrow_color = if on_dark {
        theme::brand::ACCENT
    } else {
        theme::brand::PRIMARY
    };
    let title_color = if on_dark {
        Color32::WHITE
    } else {
        theme::text::HEADING
    };

    ui.horizontal(|ui| {
        let (rule, _) = ui.allocate_exact_size(egui::vec2(28.0, 2.0), egui::Sense::hover());
        ui.painter().rect_filled(rule, 0.0, eyebrow_color);
        ui.label(
            RichText::new(eyebrow.to_uppercase())
                .size(12.0)
                .strong()
                .color(eyebrow_color),
        );
    });
    ui.add_space(10.0);
    ui.label(RichText::new(title).size(30.0).strong().color(title_color));
}

/// Solid primary call-to-action button.
pub(crate) fn cta_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).size(14.0).strong().color(Color32::WHITE))
            .fill(theme::brand::PRIMARY)
            .min_size(egui::vec2(0.0, 38.0)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Outlined button for dark surfaces.
pub(crate) fn ghost_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).size(14.0).color(theme::brand::ACCENT))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, theme::brand::ACCENT))
            .min_size(egui::vec2(0.0, 38.0)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Circular icon badge with a Phosphor glyph.
pub(crate) fn icon_badge(ui: &mut egui::Ui, glyph: &str, fill: Color32, tint: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 20.0, fill);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(20.0),
        tint,
    );
}
