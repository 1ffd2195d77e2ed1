use crate::error::GeohashError;
use crate::index::{LATITUDE_RANGE, LONGITUDE_RANGE};
use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// This allows functions to accept either type. For geohashes `x` is
/// longitude and `y` is latitude, matching GeoJSON axis order.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Rejects coordinates outside the globe. NaN never passes.
pub fn validate_lat_lon(latitude: f64, longitude: f64) -> Result<(), GeohashError> {
    let lat_ok = (LATITUDE_RANGE[0]..=LATITUDE_RANGE[1]).contains(&latitude);
    let lon_ok = (LONGITUDE_RANGE[0]..=LONGITUDE_RANGE[1]).contains(&longitude);

    if lat_ok && lon_ok {
        Ok(())
    } else {
        log::warn!(
            "Rejecting coordinate outside the globe: lat={}, lon={}",
            latitude,
            longitude
        );
        Err(GeohashError::OutOfRangeCoordinate {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (4.8952, 52.3702);
        assert_eq!(tuple.x(), 4.8952);
        assert_eq!(tuple.y(), 52.3702);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(4.8952, 52.3702);
        assert_eq!(point.x(), 4.8952);
        assert_eq!(point.y(), 52.3702);
    }

    #[test]
    fn test_validate_lat_lon() {
        assert!(validate_lat_lon(90.0, 180.0).is_ok());
        assert!(validate_lat_lon(-90.0, -180.0).is_ok());
        assert!(validate_lat_lon(90.0001, 0.0).is_err());
        assert!(validate_lat_lon(0.0, 180.0001).is_err());
        assert!(validate_lat_lon(0.0, f64::NAN).is_err());
        assert!(validate_lat_lon(f64::INFINITY, 0.0).is_err());
    }
}
