//! Coverage map lifecycle and phase machine.
//!
//! `MapView` owns the map's state from mount to teardown: it validates
//! the fixed projection, kicks off the background load, folds results
//! into renderable paths, and exposes the current phase for the UI to
//! draw. The country outline becomes visible as soon as it lands; the
//! states overlay fills in afterwards without blocking it.

use eframe::egui;
use geo_types::Coord;
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::geo::{project_all, MercatorProjection, RenderablePath};
use crate::map::loader::{LoadEvent, LoaderChannel};
use crate::map::source::BoundarySources;
use crate::map::MapError;

/// Fixed projection parameters for the Nigeria coverage map.
pub const MAP_CENTER_LON: f64 = 8.0;
pub const MAP_CENTER_LAT: f64 = 9.0;
pub const MAP_SCALE: f64 = 2800.0;
pub const MAP_VIEWPORT: (f64, f64) = (600.0, 500.0);

/// Phase of the coverage map's load lifecycle.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MapPhase {
    /// Not mounted yet.
    #[default]
    Idle,
    /// Waiting on the required country outline.
    LoadingCountry,
    /// Country visible; waiting on the optional states overlay.
    LoadingStates,
    /// The country outline could not be produced; terminal.
    Unavailable,
    /// Load finished, possibly without a states overlay.
    Ready,
}

impl MapPhase {
    /// Human-readable label for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            MapPhase::Idle => "Idle",
            MapPhase::LoadingCountry => "Loading map...",
            MapPhase::LoadingStates => "Loading states...",
            MapPhase::Unavailable => "Map unavailable",
            MapPhase::Ready => "Ready",
        }
    }

    /// True while a load is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, MapPhase::LoadingCountry | MapPhase::LoadingStates)
    }
}

/// State for one mounted coverage map.
pub struct MapView {
    phase: MapPhase,
    generation: u64,
    cancelled: Arc<AtomicBool>,
    loader: LoaderChannel,
    projection: Option<MercatorProjection>,
    country: Vec<RenderablePath>,
    states: Vec<RenderablePath>,
    failure: Option<MapError>,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView {
    pub fn new() -> Self {
        Self {
            phase: MapPhase::Idle,
            generation: 0,
            cancelled: Arc::new(AtomicBool::new(false)),
            loader: LoaderChannel::new(),
            projection: None,
            country: Vec::new(),
            states: Vec::new(),
            failure: None,
        }
    }

    /// Starts the map lifecycle: validates the projection and spawns
    /// the background load. Does nothing if already mounted.
    pub fn mount(&mut self, ctx: &egui::Context, sources: BoundarySources) {
        if self.phase != MapPhase::Idle {
            return;
        }
        if !self.begin() {
            return;
        }
        self.loader
            .spawn(ctx.clone(), self.generation, self.cancelled.clone(), sources);
    }

    /// Tears the map down. In-flight results for the old mount are
    /// cancelled where possible and discarded otherwise.
    pub fn unmount(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.generation += 1;
        self.phase = MapPhase::Idle;
        self.projection = None;
        self.country.clear();
        self.states.clear();
        self.failure = None;
    }

    /// Folds any completed load results into the view. Call once per
    /// frame before drawing.
    pub fn poll(&mut self) {
        while let Some(event) = self.loader.try_recv(self.generation) {
            self.apply(event);
        }
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    /// True once the country outline is drawable, even while the states
    /// overlay is still loading.
    pub fn has_map(&self) -> bool {
        matches!(self.phase, MapPhase::LoadingStates | MapPhase::Ready)
    }

    pub fn country_paths(&self) -> &[RenderablePath] {
        &self.country
    }

    pub fn state_paths(&self) -> &[RenderablePath] {
        &self.states
    }

    pub fn failure(&self) -> Option<&MapError> {
        self.failure.as_ref()
    }

    fn begin(&mut self) -> bool {
        self.cancelled = Arc::new(AtomicBool::new(false));
        let center = Coord {
            x: MAP_CENTER_LON,
            y: MAP_CENTER_LAT,
        };
        match MercatorProjection::new(center, MAP_SCALE, MAP_VIEWPORT) {
            Ok(projection) => {
                self.projection = Some(projection);
                self.phase = MapPhase::LoadingCountry;
                true
            }
            Err(error) => {
                error!("Coverage map projection rejected: {}", error);
                self.failure = Some(MapError::Projection(error));
                self.phase = MapPhase::Unavailable;
                false
            }
        }
    }

    fn apply(&mut self, event: LoadEvent) {
        match (self.phase, event) {
            (MapPhase::LoadingCountry, LoadEvent::Country(Ok(dataset))) => {
                let paths = match &self.projection {
                    Some(projection) => project_all(&dataset, projection),
                    None => Vec::new(),
                };
                if paths.is_empty() {
                    error!("Country dataset produced no renderable paths");
                    self.failure = Some(MapError::NoRenderableFeatures);
                    self.phase = MapPhase::Unavailable;
                } else {
                    self.country = paths;
                    self.phase = MapPhase::LoadingStates;
                }
            }
            (MapPhase::LoadingCountry, LoadEvent::Country(Err(error))) => {
                error!("Country boundaries failed to load: {}", error);
                self.failure = Some(error);
                self.phase = MapPhase::Unavailable;
            }
            (MapPhase::LoadingStates, LoadEvent::States(dataset)) => {
                if let (Some(projection), Some(dataset)) = (&self.projection, dataset) {
                    self.states = project_all(&dataset, projection);
                }
                info!(
                    "Coverage map ready ({} country paths, {} state paths)",
                    self.country.len(),
                    self.states.len()
                );
                self.phase = MapPhase::Ready;
            }
            (phase, _) => {
                debug!("Ignoring loader event in {:?} phase", phase);
            }
        }
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::BoundaryDataset;
    use crate::map::source::FetchError;

    fn country_dataset() -> BoundaryDataset {
        BoundaryDataset::from_geojson(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"Nigeria"},"geometry":{"type":"Polygon",
                 "coordinates":[[[3.0,5.0],[14.0,5.0],[14.0,13.0],[3.0,13.0],[3.0,5.0]]]}}]}"#,
        )
        .unwrap()
    }

    fn states_dataset() -> BoundaryDataset {
        BoundaryDataset::from_geojson(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"Lagos"},"geometry":{"type":"Polygon",
                 "coordinates":[[[3.1,6.4],[3.6,6.4],[3.6,6.7],[3.1,6.7],[3.1,6.4]]]}},
                {"type":"Feature","properties":{"name":"Kano"},"geometry":{"type":"Polygon",
                 "coordinates":[[[8.3,11.7],[8.8,11.7],[8.8,12.2],[8.3,12.2],[8.3,11.7]]]}}]}"#,
        )
        .unwrap()
    }

    fn mounted_view() -> MapView {
        let mut view = MapView::new();
        assert!(view.begin());
        view
    }

    #[test]
    fn test_begin_enters_loading_phase() {
        let view = mounted_view();
        assert_eq!(view.phase(), MapPhase::LoadingCountry);
        assert!(view.phase().is_loading());
    }

    #[test]
    fn test_country_success_is_renderable_before_states() {
        let mut view = mounted_view();
        view.apply(LoadEvent::Country(Ok(country_dataset())));

        assert_eq!(view.phase(), MapPhase::LoadingStates);
        assert!(view.has_map());
        assert_eq!(view.country_paths().len(), 1);
        assert!(view.state_paths().is_empty());
    }

    #[test]
    fn test_country_failure_is_terminal() {
        let mut view = mounted_view();
        view.apply(LoadEvent::Country(Err(MapError::Fetch(FetchError::new(
            "ng.json",
            "not found",
        )))));

        assert_eq!(view.phase(), MapPhase::Unavailable);
        assert!(!view.has_map());
        assert!(view.country_paths().is_empty());
        assert!(view.failure().is_some());
    }

    #[test]
    fn test_empty_country_dataset_is_unavailable() {
        let mut view = mounted_view();
        view.apply(LoadEvent::Country(Ok(BoundaryDataset::default())));

        assert_eq!(view.phase(), MapPhase::Unavailable);
        assert!(matches!(
            view.failure(),
            Some(MapError::NoRenderableFeatures)
        ));
    }

    #[test]
    fn test_states_success_completes_map() {
        let mut view = mounted_view();
        view.apply(LoadEvent::Country(Ok(country_dataset())));
        view.apply(LoadEvent::States(Some(states_dataset())));

        assert_eq!(view.phase(), MapPhase::Ready);
        assert_eq!(view.country_paths().len(), 1);
        assert_eq!(view.state_paths().len(), 2);
    }

    #[test]
    fn test_states_degradation_still_ready() {
        let mut view = mounted_view();
        view.apply(LoadEvent::Country(Ok(country_dataset())));
        view.apply(LoadEvent::States(None));

        assert_eq!(view.phase(), MapPhase::Ready);
        assert!(view.has_map());
        assert_eq!(view.country_paths().len(), 1);
        assert!(view.state_paths().is_empty());
        assert!(view.failure().is_none());
    }

    #[test]
    fn test_states_event_ignored_after_failure() {
        let mut view = mounted_view();
        view.apply(LoadEvent::Country(Err(MapError::Fetch(FetchError::new(
            "ng.json",
            "not found",
        )))));
        view.apply(LoadEvent::States(Some(states_dataset())));

        assert_eq!(view.phase(), MapPhase::Unavailable);
        assert!(view.state_paths().is_empty());
    }

    #[test]
    fn test_unmount_resets_and_cancels() {
        let mut view = mounted_view();
        let old_flag = view.cancelled.clone();
        let old_generation = view.generation;
        view.apply(LoadEvent::Country(Ok(country_dataset())));

        view.unmount();

        assert_eq!(view.phase(), MapPhase::Idle);
        assert!(view.country_paths().is_empty());
        assert!(old_flag.load(Ordering::Relaxed));
        assert!(view.generation > old_generation);
    }

    #[test]
    fn test_event_after_unmount_is_ignored() {
        let mut view = mounted_view();
        view.unmount();
        view.apply(LoadEvent::Country(Ok(country_dataset())));

        assert_eq!(view.phase(), MapPhase::Idle);
        assert!(view.country_paths().is_empty());
    }

    #[test]
    fn test_remount_uses_fresh_cancel_flag() {
        let mut view = mounted_view();
        view.unmount();
        assert!(view.begin());

        assert!(!view.cancelled.load(Ordering::Relaxed));
        assert_eq!(view.phase(), MapPhase::LoadingCountry);
    }
}
