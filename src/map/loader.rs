//! Background loading for boundary datasets.
//!
//! Fetching and parsing happen off the UI thread (a worker thread on
//! native, a spawned future on WASM) and results come back through a
//! channel polled from egui's synchronous update loop. Every message
//! carries the generation it was spawned under so results from a
//! superseded load are discarded instead of applied.

use eframe::egui;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::geo::BoundaryDataset;
use crate::map::source::{BoundarySources, FallbackSource, FetchError, Fetcher, SourceSpec};
use crate::map::MapError;

/// A completed load step.
#[derive(Debug)]
pub enum LoadEvent {
    /// The required country outline finished loading.
    Country(Result<BoundaryDataset, MapError>),
    /// The optional states overlay finished; `None` means it degraded.
    States(Option<BoundaryDataset>),
}

struct Envelope {
    generation: u64,
    event: LoadEvent,
}

/// Channel bridging the background loader to the UI thread.
///
/// Loads run in the background but egui's update() is synchronous, so
/// results queue here until the next frame polls them off.
pub struct LoaderChannel {
    sender: Sender<Envelope>,
    receiver: Receiver<Envelope>,
}

impl Default for LoaderChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Non-blocking check for the next load result in the active
    /// generation. Results from older generations are dropped.
    pub fn try_recv(&self, active_generation: u64) -> Option<LoadEvent> {
        while let Ok(envelope) = self.receiver.try_recv() {
            if envelope.generation == active_generation {
                return Some(envelope.event);
            }
            debug!(
                "Discarding loader result from superseded generation {}",
                envelope.generation
            );
        }
        None
    }

    /// Spawns the two-step load: country outline first, then the states
    /// overlay. The states step is skipped when the country fails or
    /// the view was torn down in the meantime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(
        &self,
        ctx: egui::Context,
        generation: u64,
        cancelled: Arc<AtomicBool>,
        sources: BoundarySources,
    ) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let fetcher = crate::map::source::AssetFetcher;

            let country = load_country(&fetcher, &sources.country);
            let country_ok = country.is_ok();
            let _ = sender.send(Envelope {
                generation,
                event: LoadEvent::Country(country),
            });
            ctx.request_repaint();

            if !country_ok || cancelled.load(Ordering::Relaxed) {
                return;
            }

            let states = load_states(&fetcher, &sources.states);
            let _ = sender.send(Envelope {
                generation,
                event: LoadEvent::States(states),
            });
            ctx.request_repaint();
        });
    }

    /// Browser variant of the two-step load, driven by the page's
    /// fetch API instead of a worker thread.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn(
        &self,
        ctx: egui::Context,
        generation: u64,
        cancelled: Arc<AtomicBool>,
        sources: BoundarySources,
    ) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let country = country_from_text(fetch_text(&sources.country).await);
            let country_ok = country.is_ok();
            let _ = sender.send(Envelope {
                generation,
                event: LoadEvent::Country(country),
            });
            ctx.request_repaint();

            if !country_ok || cancelled.load(Ordering::Relaxed) {
                return;
            }

            let text = match fetch_text(&sources.states.primary).await {
                Ok(text) => Ok(text),
                Err(primary_miss) => {
                    warn!("{}, trying fallback", primary_miss);
                    fetch_text(&sources.states.fallback).await
                }
            };
            let states = states_from_text(text);
            let _ = sender.send(Envelope {
                generation,
                event: LoadEvent::States(states),
            });
            ctx.request_repaint();
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(source: &SourceSpec) -> Result<String, FetchError> {
    let response = gloo_net::http::Request::get(source.location())
        .send()
        .await
        .map_err(|e| FetchError::new(source.location(), e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::new(
            source.location(),
            format!("HTTP status {}", response.status()),
        ));
    }
    response
        .text()
        .await
        .map_err(|e| FetchError::new(source.location(), e.to_string()))
}

/// Loads and parses the country outline through a fetcher.
pub fn load_country(
    fetcher: &dyn Fetcher,
    source: &SourceSpec,
) -> Result<BoundaryDataset, MapError> {
    country_from_text(fetcher.fetch(source))
}

/// Loads and parses the states overlay through a fetcher, trying the
/// fallback source when the primary misses.
pub fn load_states(fetcher: &dyn Fetcher, source: &FallbackSource) -> Option<BoundaryDataset> {
    states_from_text(source.resolve(fetcher))
}

fn country_from_text(text: Result<String, FetchError>) -> Result<BoundaryDataset, MapError> {
    let text = text.map_err(MapError::Fetch)?;
    BoundaryDataset::from_geojson(&text).map_err(MapError::Parse)
}

fn states_from_text(text: Result<String, FetchError>) -> Option<BoundaryDataset> {
    let text = match text {
        Ok(text) => text,
        Err(miss) => {
            warn!("State boundaries unavailable: {}", miss);
            return None;
        }
    };
    match BoundaryDataset::from_geojson(&text) {
        Ok(dataset) => Some(dataset),
        Err(error) => {
            warn!("State boundaries unreadable: {}", error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const COUNTRY_DOC: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Nigeria"},"geometry":{"type":"Polygon",
         "coordinates":[[[3.0,5.0],[14.0,5.0],[14.0,13.0],[3.0,13.0],[3.0,5.0]]]}}]}"#;

    const STATES_DOC: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Lagos"},"geometry":{"type":"Polygon",
         "coordinates":[[[3.1,6.4],[3.6,6.4],[3.6,6.7],[3.1,6.7],[3.1,6.4]]]}},
        {"type":"Feature","properties":{"name":"Kano"},"geometry":{"type":"Polygon",
         "coordinates":[[[8.3,11.7],[8.8,11.7],[8.8,12.2],[8.3,12.2],[8.3,11.7]]]}}]}"#;

    struct StubFetcher {
        responses: HashMap<&'static str, Result<&'static str, &'static str>>,
    }

    impl StubFetcher {
        fn new(responses: &[(&'static str, Result<&'static str, &'static str>)]) -> Self {
            Self {
                responses: responses.iter().copied().collect(),
            }
        }
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, source: &SourceSpec) -> Result<String, FetchError> {
            match self.responses.get(source.location()) {
                Some(Ok(text)) => Ok(text.to_string()),
                Some(Err(detail)) => Err(FetchError::new(source.location(), *detail)),
                None => Err(FetchError::new(source.location(), "no response scripted")),
            }
        }
    }

    fn states_source() -> FallbackSource {
        FallbackSource {
            primary: SourceSpec::Asset("states-local.json"),
            fallback: SourceSpec::Remote("https://example.com/states.json"),
        }
    }

    #[test]
    fn test_load_country_success() {
        let fetcher = StubFetcher::new(&[("ng.json", Ok(COUNTRY_DOC))]);
        let dataset = load_country(&fetcher, &SourceSpec::Asset("ng.json")).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.features[0].name.as_deref(), Some("Nigeria"));
    }

    #[test]
    fn test_load_country_fetch_failure() {
        let fetcher = StubFetcher::new(&[("ng.json", Err("not found"))]);
        let error = load_country(&fetcher, &SourceSpec::Asset("ng.json")).unwrap_err();

        assert!(matches!(error, MapError::Fetch(_)));
    }

    #[test]
    fn test_load_country_parse_failure() {
        let fetcher = StubFetcher::new(&[("ng.json", Ok("<html>not json</html>"))]);
        let error = load_country(&fetcher, &SourceSpec::Asset("ng.json")).unwrap_err();

        assert!(matches!(error, MapError::Parse(_)));
    }

    #[test]
    fn test_load_states_from_primary() {
        let fetcher = StubFetcher::new(&[("states-local.json", Ok(STATES_DOC))]);
        let dataset = load_states(&fetcher, &states_source()).unwrap();

        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_load_states_from_fallback() {
        let fetcher = StubFetcher::new(&[
            ("states-local.json", Err("not found")),
            ("https://example.com/states.json", Ok(STATES_DOC)),
        ]);
        let dataset = load_states(&fetcher, &states_source()).unwrap();

        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_load_states_total_failure_degrades_to_none() {
        let fetcher = StubFetcher::new(&[
            ("states-local.json", Err("not found")),
            ("https://example.com/states.json", Err("timeout")),
        ]);

        assert!(load_states(&fetcher, &states_source()).is_none());
    }

    #[test]
    fn test_load_states_unparseable_degrades_to_none() {
        let fetcher = StubFetcher::new(&[("states-local.json", Ok("{\"bad\":1}"))]);

        assert!(load_states(&fetcher, &states_source()).is_none());
    }

    #[test]
    fn test_channel_delivers_active_generation() {
        let channel = LoaderChannel::new();
        let _ = channel.sender.send(Envelope {
            generation: 3,
            event: LoadEvent::States(None),
        });

        assert!(matches!(
            channel.try_recv(3),
            Some(LoadEvent::States(None))
        ));
    }

    #[test]
    fn test_channel_discards_superseded_generation() {
        let channel = LoaderChannel::new();
        let _ = channel.sender.send(Envelope {
            generation: 1,
            event: LoadEvent::States(None),
        });
        let _ = channel.sender.send(Envelope {
            generation: 2,
            event: LoadEvent::States(Some(BoundaryDataset::default())),
        });

        // The stale generation-1 result is skipped over, not surfaced.
        assert!(matches!(
            channel.try_recv(2),
            Some(LoadEvent::States(Some(_)))
        ));
        assert!(channel.try_recv(2).is_none());
    }

    #[test]
    fn test_channel_empty_returns_none() {
        let channel = LoaderChannel::new();
        assert!(channel.try_recv(0).is_none());
    }
}
