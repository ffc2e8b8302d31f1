//! Spherical Mercator projection.
//!
//! Converts geographic coordinates (lon/lat degrees) into viewport
//! coordinates for rendering. The projection is fixed at construction:
//! a reference point maps to the viewport center and everything else is
//! scaled around it, matching the mapping conventions of web map
//! libraries (x grows east, y grows south).

use geo_types::Coord;
use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// A validated Mercator projection over a fixed viewport.
#[derive(Debug, Clone)]
pub struct MercatorProjection {
    /// Reference point (lon, lat) that maps to the viewport center.
    center: Coord<f64>,
    /// Scale factor applied to angular distance in radians.
    scale: f64,
    /// Pixel offset of the projected reference point.
    translate: (f64, f64),
    /// Viewport size in pixels (width, height).
    viewport: (f64, f64),
    /// Precomputed Mercator latitude of the reference point.
    center_psi: f64,
}

/// Error produced when a projection cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// The reference point itself projects to a non-finite position.
    NonFinite { lon: f64, lat: f64 },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::NonFinite { lon, lat } => write!(
                f,
                "Projection produced a non-finite result for its reference point ({}, {})",
                lon, lat
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

impl MercatorProjection {
    /// Creates a projection centered on `center` over the given viewport.
    ///
    /// The reference point maps to the viewport center. Construction
    /// fails if the reference point itself cannot be projected to finite
    /// coordinates, so a successfully built projection is always usable.
    pub fn new(
        center: Coord<f64>,
        scale: f64,
        viewport: (f64, f64),
    ) -> Result<Self, ProjectionError> {
        let projection = Self {
            center,
            scale,
            translate: (viewport.0 / 2.0, viewport.1 / 2.0),
            viewport,
            center_psi: mercator_latitude(center.y.to_radians()),
        };

        let (x, y) = projection.project(center);
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NonFinite {
                lon: center.x,
                lat: center.y,
            });
        }

        Ok(projection)
    }

    /// Projects a geographic coordinate (lon, lat) to viewport pixels.
    ///
    /// The result may be non-finite for degenerate inputs (latitudes
    /// beyond the poles, NaN coordinates); callers decide whether to
    /// drop or fail on those.
    pub fn project(&self, coord: Coord<f64>) -> (f64, f64) {
        let delta_lon = wrap_longitude((coord.x - self.center.x).to_radians());
        let psi = mercator_latitude(coord.y.to_radians());

        let x = self.translate.0 + self.scale * delta_lon;
        let y = self.translate.1 + self.scale * (self.center_psi - psi);
        (x, y)
    }

    /// Viewport size in pixels (width, height).
    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    /// True when a projected point lies inside the viewport.
    pub fn contains(&self, point: (f64, f64)) -> bool {
        point.0 >= 0.0
            && point.0 <= self.viewport.0
            && point.1 >= 0.0
            && point.1 <= self.viewport.1
    }
}

/// Mercator latitude: ln(tan(pi/4 + phi/2)) for phi in radians.
///
/// Returns NaN for latitudes beyond the poles, which the projection
/// propagates so callers can reject the coordinate.
fn mercator_latitude(phi: f64) -> f64 {
    (FRAC_PI_4 + phi / 2.0).tan().ln()
}

/// Wraps an angular longitude difference into [-pi, pi].
///
/// Keeps features adjacent across the antimeridian instead of smearing
/// them the long way around the globe.
fn wrap_longitude(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn nigeria_projection() -> MercatorProjection {
        MercatorProjection::new(Coord { x: 8.0, y: 9.0 }, 2800.0, (600.0, 500.0)).unwrap()
    }

    #[test]
    fn test_reference_point_maps_to_viewport_center() {
        let projection = nigeria_projection();
        let (x, y) = projection.project(Coord { x: 8.0, y: 9.0 });

        assert_relative_eq!(x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(y, 250.0, epsilon = 1e-9);
        assert!(projection.contains((x, y)));
    }

    #[test]
    fn test_one_degree_east_offset() {
        let projection = nigeria_projection();
        let (x, _) = projection.project(Coord { x: 9.0, y: 9.0 });

        // scale * 1 degree in radians = 2800 * pi / 180
        assert_relative_eq!(x, 348.86921905584123, epsilon = 1e-9);
    }

    #[test]
    fn test_longitudes_symmetric_about_center() {
        let projection = nigeria_projection();
        let (west_x, _) = projection.project(Coord { x: 7.0, y: 9.0 });
        let (east_x, _) = projection.project(Coord { x: 9.0, y: 9.0 });

        assert_relative_eq!(west_x + east_x, 600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_north_is_up() {
        let projection = nigeria_projection();
        let (_, north_y) = projection.project(Coord { x: 8.0, y: 10.0 });
        let (_, south_y) = projection.project(Coord { x: 8.0, y: 8.0 });

        assert!(north_y < 250.0);
        assert!(south_y > 250.0);
    }

    #[test]
    fn test_mercator_square_latitude() {
        // At ~85.0511 degrees the Mercator latitude equals pi, the
        // classic square-world bound used by web map tiles.
        let projection =
            MercatorProjection::new(Coord { x: 0.0, y: 0.0 }, 100.0, (600.0, 500.0)).unwrap();
        let (_, y) = projection.project(Coord {
            x: 0.0,
            y: 85.05112878,
        });

        assert_relative_eq!(y, 250.0 - 100.0 * PI, epsilon = 1e-3);
    }

    #[test]
    fn test_antimeridian_wrap() {
        let projection =
            MercatorProjection::new(Coord { x: 170.0, y: 0.0 }, 100.0, (600.0, 500.0)).unwrap();
        let (x, _) = projection.project(Coord { x: -170.0, y: 0.0 });

        // 20 degrees east of center, not 340 degrees west
        assert_relative_eq!(x, 300.0 + 100.0 * 20.0_f64.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let projection = nigeria_projection();
        let coord = Coord { x: 6.45, y: 7.52 };

        assert_eq!(projection.project(coord), projection.project(coord));
    }

    #[test]
    fn test_beyond_pole_latitude_is_non_finite() {
        let projection = nigeria_projection();
        let (_, y) = projection.project(Coord { x: 8.0, y: 135.0 });

        assert!(!y.is_finite());
    }

    #[test]
    fn test_invalid_reference_point_rejected() {
        let result = MercatorProjection::new(Coord { x: 8.0, y: 98.0 }, 2800.0, (600.0, 500.0));

        assert!(matches!(result, Err(ProjectionError::NonFinite { .. })));
    }

    #[test]
    fn test_nan_center_rejected() {
        let result =
            MercatorProjection::new(Coord { x: f64::NAN, y: 9.0 }, 2800.0, (600.0, 500.0));

        assert!(matches!(result, Err(ProjectionError::NonFinite { .. })));
    }

    #[test]
    fn test_nigeria_extent_fits_vertically() {
        // Nigeria spans roughly 4.3 to 13.9 degrees latitude; the fixed
        // kiosk projection keeps that whole span inside the viewport.
        let projection = nigeria_projection();
        let (_, south_y) = projection.project(Coord { x: 8.0, y: 4.27 });
        let (_, north_y) = projection.project(Coord { x: 8.0, y: 13.89 });

        assert!(projection.contains((300.0, south_y)));
        assert!(projection.contains((300.0, north_y)));
        assert!(north_y < south_y);
    }
}
