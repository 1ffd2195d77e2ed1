use crate::cell::GeohashCell;
use crate::coord::Coordinate;
use crate::error::GeohashError;
use crate::geom::geometry_extent;
use crate::index::{DEFAULT_PRECISION, Direction, decode, decode_bbox, encode, neighbour};
use geo_types::{Geometry, Polygon, Rect};
use rayon::prelude::*;

/// Southwest hash plus the number of cell steps to the northeast corner.
struct GridSpan {
    south_west: String,
    lat_steps: i64,
    lon_steps: i64,
    cell_count: usize,
}

/// Whole cells between two cell edges, or an error once the cell size has
/// collapsed below what `f64` can step through.
fn step_count(distance: f64, cell_size: f64, precision: usize) -> Result<i64, GeohashError> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    let steps = (distance / cell_size).round();
    if !steps.is_finite() || steps < 0.0 || steps >= i64::MAX as f64 {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(steps as i64)
}

fn grid_span(
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
    precision: usize,
) -> Result<GridSpan, GeohashError> {
    if precision == 0 {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    if min_lat > max_lat || min_lon > max_lon {
        return Err(GeohashError::InvalidBoundingBox(format!(
            "min ({}, {}) exceeds max ({}, {})",
            min_lat, min_lon, max_lat, max_lon
        )));
    }

    let south_west = encode(min_lat, min_lon, precision)?;
    let north_east = encode(max_lat, max_lon, precision)?;

    let cell = decode(&south_west)?;
    let cell_height = cell.error.latitude * 2.0;
    let cell_width = cell.error.longitude * 2.0;

    let sw_box = decode_bbox(&south_west)?;
    let ne_box = decode_bbox(&north_east)?;

    let lat_steps = step_count(ne_box.min_lat - sw_box.min_lat, cell_height, precision)?;
    let lon_steps = step_count(ne_box.min_lon - sw_box.min_lon, cell_width, precision)?;

    let cell_count = (lat_steps + 1)
        .checked_mul(lon_steps + 1)
        .and_then(|count| usize::try_from(count).ok())
        .ok_or(GeohashError::InvalidPrecision(precision))?;

    Ok(GridSpan {
        south_west,
        lat_steps,
        lon_steps,
        cell_count,
    })
}

/// Lists every geohash of `precision` characters needed to tile a rectangle.
///
/// Cells are walked from the southwest corner, rows of increasing latitude
/// outside and increasing longitude inside. The result holds exactly
/// `(lat_steps + 1) * (lon_steps + 1)` hashes; rounding near cell edges can
/// repeat a hash and the repeat is kept.
///
/// # Example
/// ```
/// use geohash_rs::bounding_boxes;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let hashes = bounding_boxes(-90.0, -180.0, 90.0, 180.0, 1)?;
/// assert_eq!(hashes.len(), 32);
/// assert_eq!(hashes[0], "0");
/// assert_eq!(hashes[31], "z");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - `precision` is zero, or so high
///   that the cells cannot be counted or allocated
/// - [`GeohashError::InvalidBoundingBox`] - a minimum exceeds its maximum
/// - [`GeohashError::OutOfRangeCoordinate`] - a corner lies outside the globe
pub fn bounding_boxes(
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
    precision: usize,
) -> Result<Vec<String>, GeohashError> {
    let span = grid_span(min_lat, min_lon, max_lat, max_lon, precision)?;
    log::debug!(
        "Tiling from {} with {}x{} lat/lon steps",
        span.south_west,
        span.lat_steps,
        span.lon_steps
    );

    let mut hashes = Vec::new();
    hashes
        .try_reserve_exact(span.cell_count)
        .map_err(|_| GeohashError::InvalidPrecision(precision))?;
    for lat in 0..=span.lat_steps {
        for lon in 0..=span.lon_steps {
            hashes.push(neighbour(&span.south_west, Direction::new(lat, lon))?);
        }
    }

    Ok(hashes)
}

/// Same as [`bounding_boxes`] using [`DEFAULT_PRECISION`].
pub fn bounding_boxes_default(
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
) -> Result<Vec<String>, GeohashError> {
    bounding_boxes(min_lat, min_lon, max_lat, max_lon, DEFAULT_PRECISION)
}

/// An ordered set of geohash cells tiling a rectangular extent.
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashGrid;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let grid = GeohashGrid::builder()
///     .precision(5)
///     .extent(52.30, 4.80, 52.40, 4.95)
///     .build()?;
///
/// if let Some(cell) = grid.get_cell_at(&(4.8952, 52.3702)) {
///     println!("{}", cell.hash);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeohashGrid {
    cells: Vec<GeohashCell>,
    precision: usize,
}

impl GeohashGrid {
    pub fn builder() -> GeohashGridBuilder {
        GeohashGridBuilder::new()
    }

    pub fn from_extent(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
        precision: usize,
    ) -> Result<Self, GeohashError> {
        let hashes = bounding_boxes(min_lat, min_lon, max_lat, max_lon, precision)?;
        let cells = hashes
            .par_iter()
            .map(|hash| GeohashCell::from_hash(hash))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Built grid of {} cells at precision {}", cells.len(), precision);
        Ok(Self { cells, precision })
    }

    /// Rect axes are x = longitude, y = latitude.
    pub fn from_rect(rect: &Rect<f64>, precision: usize) -> Result<Self, GeohashError> {
        Self::from_extent(
            rect.min().y,
            rect.min().x,
            rect.max().y,
            rect.max().x,
            precision,
        )
    }

    /// Tiles the bounding rectangle of any geometry.
    pub fn covering(geometry: &Geometry<f64>, precision: usize) -> Result<Self, GeohashError> {
        let extent = geometry_extent(geometry)?;
        Self::from_extent(
            extent.min_lat,
            extent.min_lon,
            extent.max_lat,
            extent.max_lon,
            precision,
        )
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GeohashCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeohashCell> {
        self.cells.iter()
    }

    pub fn hashes(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.hash.as_str()).collect()
    }

    pub fn get_cell_at(&self, coord: &impl Coordinate) -> Option<&GeohashCell> {
        let hash = encode(coord.y(), coord.x(), self.precision).ok()?;
        self.cells.iter().find(|cell| cell.hash == hash)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GeohashCell>
    where
        F: Fn(&GeohashCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct GeohashGridBuilder {
    precision: Option<usize>,
    min_lat: Option<f64>,
    min_lon: Option<f64>,
    max_lat: Option<f64>,
    max_lon: Option<f64>,
}

impl GeohashGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to [`DEFAULT_PRECISION`] when not set.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn extent(mut self, min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        self.min_lat = Some(min_lat);
        self.min_lon = Some(min_lon);
        self.max_lat = Some(max_lat);
        self.max_lon = Some(max_lon);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lat = Some(rect.min().y);
        self.min_lon = Some(rect.min().x);
        self.max_lat = Some(rect.max().y);
        self.max_lon = Some(rect.max().x);
        self
    }

    pub fn build(self) -> Result<GeohashGrid, GeohashError> {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        let (Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)) =
            (self.min_lat, self.min_lon, self.max_lat, self.max_lon)
        else {
            return Err(GeohashError::IncompleteBuilder("extent"));
        };

        GeohashGrid::from_extent(min_lat, min_lon, max_lat, max_lon, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, polygon};

    const GLOBE_ORDER: [&str; 32] = [
        "0", "1", "4", "5", "h", "j", "n", "p", "2", "3", "6", "7", "k", "m", "q", "r", "8", "9",
        "d", "e", "s", "t", "w", "x", "b", "c", "f", "g", "u", "v", "y", "z",
    ];

    #[test]
    fn test_bounding_boxes_whole_globe() -> Result<(), GeohashError> {
        let hashes = bounding_boxes(-90.0, -180.0, 90.0, 180.0, 1)?;
        assert_eq!(hashes, GLOBE_ORDER);
        Ok(())
    }

    #[test]
    fn test_bounding_boxes_count_matches_span() -> Result<(), GeohashError> {
        let extents = [
            (52.0, 4.0, 52.5, 5.0, 4),
            (-34.0, 150.5, -33.5, 151.5, 5),
            (10.0, 10.0, 10.0, 10.0, 6),
            (-10.0, -20.0, 30.0, 40.0, 2),
        ];
        for (min_lat, min_lon, max_lat, max_lon, precision) in extents {
            let span = grid_span(min_lat, min_lon, max_lat, max_lon, precision)?;
            let hashes = bounding_boxes(min_lat, min_lon, max_lat, max_lon, precision)?;
            assert_eq!(
                hashes.len() as i64,
                (span.lat_steps + 1) * (span.lon_steps + 1)
            );
            assert_eq!(hashes.len(), span.cell_count);
            assert!(hashes.iter().all(|h| h.len() == precision));
        }
        Ok(())
    }

    #[test]
    fn test_bounding_boxes_starts_and_ends_at_corners() -> Result<(), GeohashError> {
        let hashes = bounding_boxes(52.0, 4.0, 52.5, 5.0, 4)?;
        assert_eq!(hashes.first(), Some(&encode(52.0, 4.0, 4)?));
        assert_eq!(hashes.last(), Some(&encode(52.5, 5.0, 4)?));
        Ok(())
    }

    #[test]
    fn test_bounding_boxes_single_point() -> Result<(), GeohashError> {
        let hashes = bounding_boxes(52.3702, 4.8952, 52.3702, 4.8952, 9)?;
        assert_eq!(hashes, vec!["u173zmswd"]);
        Ok(())
    }

    #[test]
    fn test_bounding_boxes_default_precision() -> Result<(), GeohashError> {
        let hashes = bounding_boxes_default(52.3702, 4.8952, 52.3702, 4.8952)?;
        assert_eq!(hashes, vec!["u173zmswd"]);
        assert_eq!(
            hashes,
            bounding_boxes(52.3702, 4.8952, 52.3702, 4.8952, DEFAULT_PRECISION)?
        );
        Ok(())
    }

    #[test]
    fn test_bounding_boxes_rejects_uncountable_precision() {
        // Cells this small leave more steps than fit in an i64
        assert_eq!(
            bounding_boxes(0.0, 0.0, 1.0, 1.0, 40),
            Err(GeohashError::InvalidPrecision(40))
        );
        assert_eq!(
            bounding_boxes(-10.0, -10.0, 10.0, 10.0, 120),
            Err(GeohashError::InvalidPrecision(120))
        );
        assert!(matches!(
            GeohashGrid::from_extent(0.0, 0.0, 1.0, 1.0, 40),
            Err(GeohashError::InvalidPrecision(40))
        ));
    }

    #[test]
    fn test_step_count_rejects_collapsed_cells() {
        assert_eq!(step_count(1.0, 0.0, 30), Err(GeohashError::InvalidPrecision(30)));
        assert_eq!(
            step_count(1.0, f64::NAN, 30),
            Err(GeohashError::InvalidPrecision(30))
        );
        assert_eq!(step_count(1.0, 0.25, 3), Ok(4));
        assert_eq!(step_count(0.0, 0.25, 3), Ok(0));
    }

    #[test]
    fn test_bounding_boxes_errors() {
        assert_eq!(
            bounding_boxes(0.0, 0.0, 1.0, 1.0, 0),
            Err(GeohashError::InvalidPrecision(0))
        );
        assert!(matches!(
            bounding_boxes(1.0, 0.0, 0.0, 1.0, 3),
            Err(GeohashError::InvalidBoundingBox(_))
        ));
        assert!(matches!(
            bounding_boxes(0.0, 0.0, 91.0, 1.0, 3),
            Err(GeohashError::OutOfRangeCoordinate { .. })
        ));
    }

    #[test]
    fn test_grid_from_extent() -> Result<(), GeohashError> {
        let grid = GeohashGrid::from_extent(52.30, 4.80, 52.40, 4.95, 5)?;
        assert!(!grid.is_empty());
        assert_eq!(grid.precision(), 5);

        for cell in grid.iter() {
            assert_eq!(cell.precision, 5);
        }
        assert_eq!(
            grid.hashes(),
            bounding_boxes(52.30, 4.80, 52.40, 4.95, 5)?
        );
        Ok(())
    }

    #[test]
    fn test_grid_from_rect() -> Result<(), GeohashError> {
        let rect = Rect::new(coord! { x: 4.80, y: 52.30 }, coord! { x: 4.95, y: 52.40 });
        let grid = GeohashGrid::from_rect(&rect, 5)?;
        let direct = GeohashGrid::from_extent(52.30, 4.80, 52.40, 4.95, 5)?;
        assert_eq!(grid.hashes(), direct.hashes());
        Ok(())
    }

    #[test]
    fn test_grid_covering_polygon() -> Result<(), GeohashError> {
        let poly: Geometry<f64> = polygon![
            (x: 4.80, y: 52.30),
            (x: 4.95, y: 52.30),
            (x: 4.95, y: 52.40),
            (x: 4.80, y: 52.30)
        ]
        .into();
        let grid = GeohashGrid::covering(&poly, 5)?;
        let direct = GeohashGrid::from_extent(52.30, 4.80, 52.40, 4.95, 5)?;
        assert_eq!(grid.hashes(), direct.hashes());
        Ok(())
    }

    #[test]
    fn test_grid_builder() -> Result<(), GeohashError> {
        let grid = GeohashGrid::builder()
            .precision(5)
            .extent(52.30, 4.80, 52.40, 4.95)
            .build()?;
        assert!(!grid.is_empty());
        assert_eq!(grid.precision(), 5);

        let rect = Rect::new(coord! { x: 4.80, y: 52.30 }, coord! { x: 4.95, y: 52.40 });
        let from_rect = GeohashGrid::builder().precision(5).rect(&rect).build()?;
        assert_eq!(grid.hashes(), from_rect.hashes());
        Ok(())
    }

    #[test]
    fn test_grid_builder_missing_extent() {
        let result = GeohashGrid::builder().precision(5).build();
        assert!(matches!(result, Err(GeohashError::IncompleteBuilder("extent"))));
    }

    #[test]
    fn test_get_cell_at() -> Result<(), GeohashError> {
        let grid = GeohashGrid::from_extent(52.30, 4.80, 52.40, 4.95, 5)?;
        let cell = grid.get_cell_at(&(4.8952, 52.3702));
        assert_eq!(cell.map(|c| c.hash.as_str()), Some("u173z"));

        assert!(grid.get_cell_at(&(0.0, 0.0)).is_none());
        Ok(())
    }

    #[test]
    fn test_filter_and_polygons() -> Result<(), GeohashError> {
        let grid = GeohashGrid::from_extent(52.30, 4.80, 52.40, 4.95, 5)?;

        let eastern = grid.filter(|cell| cell.longitude() > 4.9);
        assert!(!eastern.is_empty());
        assert!(eastern.len() < grid.len());

        assert_eq!(grid.to_polygons().len(), grid.len());
        Ok(())
    }
}
