//! Projected path construction.
//!
//! Turns boundary features into flat lists of draw commands in viewport
//! coordinates. This is the hand-off point between the geographic model
//! and whatever paints it (the egui canvas or the SVG exporter).

use log::warn;

use crate::geo::boundary::{BoundaryDataset, BoundaryFeature};
use crate::geo::projection::MercatorProjection;

/// A single path drawing command in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at (x, y).
    MoveTo(f64, f64),
    /// Draw a segment to (x, y).
    LineTo(f64, f64),
    /// Close the current subpath back to its start.
    Close,
}

/// A projected boundary ready for drawing.
///
/// Each source ring becomes one closed subpath. Identity metadata rides
/// along so renderers can key and label shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderablePath {
    pub id: Option<String>,
    pub name: Option<String>,
    pub commands: Vec<PathCommand>,
}

impl RenderablePath {
    /// Reassembles the command list into per-ring point lists.
    ///
    /// Convenient for renderers that want polylines rather than a
    /// command stream.
    pub fn rings(&self) -> Vec<Vec<(f64, f64)>> {
        let mut rings = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(x, y) => {
                    if !current.is_empty() {
                        rings.push(std::mem::take(&mut current));
                    }
                    current.push((*x, *y));
                }
                PathCommand::LineTo(x, y) => current.push((*x, *y)),
                PathCommand::Close => {
                    if !current.is_empty() {
                        rings.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            rings.push(current);
        }
        rings
    }

    /// Serializes the commands as an SVG path `d` attribute.
    pub fn svg_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(x, y) => {
                    data.push_str(&format!("M{:.2},{:.2}", x, y));
                }
                PathCommand::LineTo(x, y) => {
                    data.push_str(&format!("L{:.2},{:.2}", x, y));
                }
                PathCommand::Close => data.push('Z'),
            }
        }
        data
    }
}

/// Projects a single boundary feature into a renderable path.
///
/// Returns `None` when the feature has no drawable ring or any of its
/// coordinates projects to a non-finite position; the caller logs and
/// moves on so one malformed feature cannot sink the dataset.
pub fn project_feature(
    feature: &BoundaryFeature,
    projection: &MercatorProjection,
) -> Option<RenderablePath> {
    let mut commands = Vec::new();

    for ring in feature.outline.rings() {
        // Degenerate rings (fewer than 2 points) draw nothing; skip them
        // without failing the feature.
        if ring.len() < 2 {
            continue;
        }
        for (index, coord) in ring.iter().enumerate() {
            let (x, y) = projection.project(*coord);
            if !x.is_finite() || !y.is_finite() {
                return None;
            }
            if index == 0 {
                commands.push(PathCommand::MoveTo(x, y));
            } else {
                commands.push(PathCommand::LineTo(x, y));
            }
        }
        commands.push(PathCommand::Close);
    }

    if commands.is_empty() {
        return None;
    }

    Some(RenderablePath {
        id: feature.id.clone(),
        name: feature.name.clone(),
        commands,
    })
}

/// Projects every feature in a dataset, preserving document order.
///
/// Features that cannot be projected are dropped with a warning; the
/// output order of the survivors matches their input order, which fixes
/// the draw stacking.
pub fn project_all(
    dataset: &BoundaryDataset,
    projection: &MercatorProjection,
) -> Vec<RenderablePath> {
    dataset
        .features
        .iter()
        .filter_map(|feature| {
            let path = project_feature(feature, projection);
            if path.is_none() {
                warn!(
                    "Dropping unprojectable boundary feature {:?}",
                    feature.name.as_deref().unwrap_or("<unnamed>")
                );
            }
            path
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::boundary::Outline;
    use geo_types::Coord;

    fn test_projection() -> MercatorProjection {
        MercatorProjection::new(Coord { x: 8.0, y: 9.0 }, 2800.0, (600.0, 500.0)).unwrap()
    }

    fn square_ring(lon: f64, lat: f64) -> Vec<Coord<f64>> {
        vec![
            Coord { x: lon, y: lat },
            Coord {
                x: lon + 0.5,
                y: lat,
            },
            Coord {
                x: lon + 0.5,
                y: lat + 0.5,
            },
            Coord {
                x: lon,
                y: lat + 0.5,
            },
            Coord { x: lon, y: lat },
        ]
    }

    fn named_feature(name: &str, ring: Vec<Coord<f64>>) -> BoundaryFeature {
        BoundaryFeature {
            id: None,
            name: Some(name.to_string()),
            outline: Outline::Polygon(vec![ring]),
        }
    }

    #[test]
    fn test_feature_projects_to_closed_path() {
        let feature = named_feature("Lagos", square_ring(7.0, 8.0));
        let path = project_feature(&feature, &test_projection()).unwrap();

        assert_eq!(path.name.as_deref(), Some("Lagos"));
        assert!(matches!(path.commands[0], PathCommand::MoveTo(_, _)));
        assert_eq!(*path.commands.last().unwrap(), PathCommand::Close);
        // 5 points: one MoveTo, four LineTo, one Close
        assert_eq!(path.commands.len(), 6);
    }

    #[test]
    fn test_multi_polygon_produces_one_subpath_per_ring() {
        let feature = BoundaryFeature {
            id: None,
            name: Some("Rivers".to_string()),
            outline: Outline::MultiPolygon(vec![
                vec![square_ring(6.0, 5.0)],
                vec![square_ring(7.0, 5.0)],
            ]),
        };
        let path = project_feature(&feature, &test_projection()).unwrap();

        let move_count = path
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_, _)))
            .count();
        let close_count = path
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count();
        assert_eq!(move_count, 2);
        assert_eq!(close_count, 2);
        assert_eq!(path.rings().len(), 2);
    }

    #[test]
    fn test_unprojectable_feature_returns_none() {
        let mut ring = square_ring(7.0, 8.0);
        ring[2] = Coord { x: 7.5, y: 135.0 };
        let feature = named_feature("Broken", ring);

        assert!(project_feature(&feature, &test_projection()).is_none());
    }

    #[test]
    fn test_degenerate_ring_is_skipped_not_fatal() {
        let feature = BoundaryFeature {
            id: None,
            name: Some("Speck".to_string()),
            outline: Outline::Polygon(vec![
                vec![Coord { x: 8.0, y: 9.0 }],
                square_ring(7.0, 8.0),
            ]),
        };
        let path = project_feature(&feature, &test_projection()).unwrap();

        assert_eq!(path.rings().len(), 1);
    }

    #[test]
    fn test_feature_with_only_degenerate_rings_returns_none() {
        let feature = BoundaryFeature {
            id: None,
            name: None,
            outline: Outline::Polygon(vec![vec![Coord { x: 8.0, y: 9.0 }]]),
        };

        assert!(project_feature(&feature, &test_projection()).is_none());
    }

    #[test]
    fn test_project_all_counts_drops() {
        let mut broken_ring = square_ring(6.0, 6.0);
        broken_ring[1] = Coord { x: 6.5, y: 120.0 };
        let dataset = BoundaryDataset {
            features: vec![
                named_feature("Abia", square_ring(7.0, 5.0)),
                named_feature("Broken", broken_ring),
                named_feature("Borno", square_ring(13.0, 11.0)),
            ],
        };
        let paths = project_all(&dataset, &test_projection());

        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_project_all_preserves_input_order() {
        let names = ["Adamawa", "Bayelsa", "Ekiti", "Gombe"];
        let dataset = BoundaryDataset {
            features: names
                .iter()
                .enumerate()
                .map(|(i, name)| named_feature(name, square_ring(5.0 + i as f64, 6.0)))
                .collect(),
        };
        let paths = project_all(&dataset, &test_projection());

        let projected: Vec<&str> = paths.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(projected, names);
    }

    #[test]
    fn test_empty_dataset_projects_to_empty_set() {
        let dataset = BoundaryDataset::default();
        assert!(project_all(&dataset, &test_projection()).is_empty());
    }

    #[test]
    fn test_svg_data_shape() {
        let feature = named_feature("Lagos", square_ring(7.0, 8.0));
        let path = project_feature(&feature, &test_projection()).unwrap();
        let data = path.svg_data();

        assert!(data.starts_with('M'));
        assert!(data.ends_with('Z'));
        assert_eq!(data.matches('L').count(), 4);
    }
}
