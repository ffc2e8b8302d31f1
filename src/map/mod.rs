//! Coverage map loading and lifecycle.
//!
//! Owns everything between "the app wants a map" and "here are paths to
//! draw": source configuration, background fetching, parse/projection
//! error policy, and the phase machine the UI renders from.

mod loader;
mod source;
mod view;

pub use loader::{LoadEvent, LoaderChannel};
pub use source::{BoundarySources, FallbackSource, FetchError, Fetcher, SourceSpec};
pub use view::{MapPhase, MapView, MAP_VIEWPORT};

#[cfg(not(target_arch = "wasm32"))]
pub use source::AssetFetcher;

use crate::geo::{ParseError, ProjectionError};

/// Errors that can take down the coverage map.
///
/// Only the country dataset surfaces these; a failed states dataset
/// degrades silently to a country-only map.
#[derive(Debug, Clone)]
pub enum MapError {
    /// No configured source produced the document.
    Fetch(FetchError),
    /// The document was fetched but could not be parsed.
    Parse(ParseError),
    /// The fixed projection could not be constructed.
    Projection(ProjectionError),
    /// The document parsed but nothing in it could be drawn.
    NoRenderableFeatures,
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Fetch(e) => write!(f, "Boundary data unavailable: {}", e),
            MapError::Parse(e) => write!(f, "Boundary data unreadable: {}", e),
            MapError::Projection(e) => write!(f, "{}", e),
            MapError::NoRenderableFeatures => {
                write!(f, "Boundary data contained no renderable features")
            }
        }
    }
}

impl std::error::Error for MapError {}
