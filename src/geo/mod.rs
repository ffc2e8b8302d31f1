//! Geographic core for the coverage map.
//!
//! This module handles boundary data end to end: parsing GeoJSON into
//! typed features, projecting them through a fixed Mercator projection,
//! and emitting renderable paths for the canvas and the SVG exporter.

mod boundary;
mod path;
mod projection;
pub mod svg;

pub use boundary::{BoundaryDataset, BoundaryFeature, Outline, ParseError};
pub use path::{project_all, project_feature, PathCommand, RenderablePath};
pub use projection::{MercatorProjection, ProjectionError};
