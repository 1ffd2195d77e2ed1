mod parse;

pub use parse::{parse_geojson, parse_geometry, parse_wkt};

use crate::error::GeohashError;
use crate::index::BoundingBox;
use geo::BoundingRect;
use geo_types::Geometry;

/// The lat/lon extent of a geometry (x = longitude, y = latitude).
pub fn geometry_extent(geometry: &Geometry<f64>) -> Result<BoundingBox, GeohashError> {
    let rect = geometry
        .bounding_rect()
        .ok_or_else(|| GeohashError::InvalidBoundingBox("geometry is empty".to_string()))?;

    Ok(BoundingBox::new(
        rect.min().y,
        rect.min().x,
        rect.max().y,
        rect.max().x,
    ))
}
