//! Boundary data sources and fetching.
//!
//! The map draws from two datasets: the country outline (required) and
//! the state boundaries (optional, loaded with a local-then-remote
//! fallback). Fetching goes through the `Fetcher` trait so the load
//! pipeline can be driven without touching disk or network.

use log::warn;

/// Where a boundary document lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSpec {
    /// Bundled asset, read relative to the app's serving root.
    Asset(&'static str),
    /// Absolute URL fetched over the network.
    Remote(&'static str),
}

impl SourceSpec {
    /// Path or URL identifying the document.
    pub fn location(&self) -> &'static str {
        match self {
            SourceSpec::Asset(path) => path,
            SourceSpec::Remote(url) => url,
        }
    }
}

impl std::fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceSpec::Asset(path) => write!(f, "asset {}", path),
            SourceSpec::Remote(url) => write!(f, "remote {}", url),
        }
    }
}

/// A primary source with a fallback tried only when the primary fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSource {
    pub primary: SourceSpec,
    pub fallback: SourceSpec,
}

impl FallbackSource {
    /// Fetches the document, first from the primary source and then
    /// from the fallback. The first success wins; the fallback is never
    /// consulted after a primary hit.
    pub fn resolve(&self, fetcher: &dyn Fetcher) -> Result<String, FetchError> {
        match fetcher.fetch(&self.primary) {
            Ok(text) => Ok(text),
            Err(primary_miss) => {
                warn!("{}, trying fallback", primary_miss);
                fetcher.fetch(&self.fallback)
            }
        }
    }
}

/// The full source configuration for the coverage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundarySources {
    /// Country outline, required for the map to render at all.
    pub country: SourceSpec,
    /// State boundaries, optional detail overlay.
    pub states: FallbackSource,
}

impl BoundarySources {
    /// Sources for the bundled Nigeria coverage map.
    pub fn bundled() -> Self {
        Self {
            country: SourceSpec::Asset("assets/ng.json"),
            states: FallbackSource {
                primary: SourceSpec::Asset("assets/ng-states.json"),
                fallback: SourceSpec::Remote(
                    "https://raw.githubusercontent.com/temikeezy/nigeria-geojson-data/main/geojson/states.geojson",
                ),
            },
        }
    }
}

/// Error describing a failed fetch from one source.
#[derive(Debug, Clone)]
pub struct FetchError {
    source: String,
    detail: String,
}

impl FetchError {
    pub fn new(location: &str, detail: impl Into<String>) -> Self {
        Self {
            source: location.to_string(),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to fetch {}: {}", self.source, self.detail)
    }
}

impl std::error::Error for FetchError {}

/// Fetches boundary documents as text.
pub trait Fetcher {
    fn fetch(&self, source: &SourceSpec) -> Result<String, FetchError>;
}

/// Production fetcher: bundled assets from disk, remote sources over
/// HTTP. The WASM build fetches through the browser instead and never
/// constructs this.
#[cfg(not(target_arch = "wasm32"))]
pub struct AssetFetcher;

#[cfg(not(target_arch = "wasm32"))]
impl Fetcher for AssetFetcher {
    fn fetch(&self, source: &SourceSpec) -> Result<String, FetchError> {
        match source {
            SourceSpec::Asset(path) => std::fs::read_to_string(path)
                .map_err(|e| FetchError::new(path, e.to_string())),
            SourceSpec::Remote(url) => {
                let client = reqwest::blocking::Client::builder()
                    .timeout(std::time::Duration::from_secs(20))
                    .build()
                    .map_err(|e| FetchError::new(url, e.to_string()))?;
                let response = client
                    .get(*url)
                    .send()
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| FetchError::new(url, e.to_string()))?;
                response.text().map_err(|e| FetchError::new(url, e.to_string()))
            }
        }
    }
}
