#![warn(clippy::all)]

//! Climate Finance Blending Facility kiosk - a single-page portfolio app.
//!
//! Renders the facility's brochure site as one scrollable column: hero,
//! impact figures with count-up animation, project showcase, a projected
//! coverage map of Nigeria, and editorial sections.

mod content;
mod countup;
mod geo;
mod map;
mod state;
mod ui;

use eframe::egui;
use web_time::Instant;

use content::SectionId;
use map::{BoundarySources, MapView};
use state::AppState;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Climate Finance Blending Facility",
        native_options,
        Box::new(|cc| Ok(Box::new(KioskApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(KioskApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application: page state plus the coverage map lifecycle.
pub struct KioskApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Coverage map loading state machine
    map: MapView,
}

impl KioskApp {
    /// Creates a new KioskApp instance and starts the map load.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_fonts(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut map = MapView::new();
        map.mount(&cc.egui_ctx, BoundarySources::bundled());

        Self {
            state: AppState::default(),
            map,
        }
    }
}

/// Installs the default fonts plus the Phosphor icon set.
fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Drain loader events before drawing so this frame sees the
        // freshest map phase.
        self.map.poll();

        ui::render_navbar(ctx, &mut self.state);

        let panel_frame = egui::Frame::default().fill(ui::theme::surface::WHITE);
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| {
                        // Sections paint their own full-width backgrounds
                        // and must stack flush.
                        ui.spacing_mut().item_spacing.y = 0.0;

                        ui::render_hero(ui, &mut self.state);

                        let about = ui.scope(|ui| ui::render_about(ui));
                        if self.state.scroll.take_jump(SectionId::About) {
                            about.response.scroll_to_me(Some(egui::Align::Min));
                        }

                        let impact =
                            ui.scope(|ui| ui::render_impact(ui, &mut self.state, now));
                        if self.state.scroll.take_jump(SectionId::Impact) {
                            impact.response.scroll_to_me(Some(egui::Align::Min));
                        }

                        let projects = ui.scope(|ui| ui::render_projects(ui));
                        if self.state.scroll.take_jump(SectionId::Projects) {
                            projects.response.scroll_to_me(Some(egui::Align::Min));
                        }

                        ui::render_map_section(ui, &self.map);
                        ui::render_stories(ui);

                        let news = ui.scope(|ui| ui::render_news(ui));
                        if self.state.scroll.take_jump(SectionId::News) {
                            news.response.scroll_to_me(Some(egui::Align::Min));
                        }

                        ui::render_goal(ui);

                        let footer = ui.scope(|ui| ui::render_footer(ui));
                        if self.state.scroll.take_jump(SectionId::Contact) {
                            footer.response.scroll_to_me(Some(egui::Align::Min));
                        }
                    });

                self.state.scroll.offset = output.state.offset.y;
            });

        // Keep frames coming while anything is mid-animation.
        if self.state.impact.is_animating(now) || self.map.phase().is_loading() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.map.unmount();
    }
}
