use crate::error::GeohashError;
use crate::index::codec::decode_bbox;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangular cell a geohash denotes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Height of the box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Width of the box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Inclusive on every edge.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.min_lat <= other.min_lat
            && self.min_lon <= other.min_lon
            && self.max_lat >= other.max_lat
            && self.max_lon >= other.max_lon
    }

    /// Centre of the box as a `Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Converts to a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

/// Half the extent of a cell along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorMargin {
    pub latitude: f64,
    pub longitude: f64,
}

/// Centre of a geohash cell together with its error margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedHash {
    pub latitude: f64,
    pub longitude: f64,
    pub error: ErrorMargin,
}

impl DecodedHash {
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<BoundingBox> for DecodedHash {
    fn from(bbox: BoundingBox) -> Self {
        let latitude = (bbox.min_lat + bbox.max_lat) / 2.0;
        let longitude = (bbox.min_lon + bbox.max_lon) / 2.0;

        Self {
            latitude,
            longitude,
            error: ErrorMargin {
                latitude: bbox.max_lat - latitude,
                longitude: bbox.max_lon - longitude,
            },
        }
    }
}

/// Decodes a geohash into the centre of its cell and the cell's error margin.
///
/// The margins are half the cell height and width, so stepping by twice the
/// margin moves exactly one cell.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let decoded = decode("u173zmswd")?;
/// assert_eq!(decoded.latitude, 52.370216846466064);
/// assert_eq!(decoded.longitude, 4.895203113555908);
/// assert_eq!(decoded.error.latitude, 0.000021457672119140625);
/// # Ok(())
/// # }
/// ```
pub fn decode(hash: &str) -> Result<DecodedHash, GeohashError> {
    decode_bbox(hash).map(DecodedHash::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reference() -> Result<(), GeohashError> {
        let decoded = decode("u173zmswd")?;
        assert_eq!(
            decoded,
            DecodedHash {
                latitude: 52.370216846466064,
                longitude: 4.895203113555908,
                error: ErrorMargin {
                    latitude: 0.000021457672119140625,
                    longitude: 0.000021457672119140625,
                },
            }
        );
        Ok(())
    }

    #[test]
    fn test_decode_margins_are_half_extent() -> Result<(), GeohashError> {
        for hash in ["0", "u1", "9q8yy", "gcpvj0", "s0000000000"] {
            let bbox = decode_bbox(hash)?;
            let decoded = decode(hash)?;
            assert!(decoded.error.latitude >= 0.0);
            assert!(decoded.error.longitude >= 0.0);
            assert!((decoded.error.latitude * 2.0 - bbox.height()).abs() < 1e-12);
            assert!((decoded.error.longitude * 2.0 - bbox.width()).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_decode_propagates_errors() {
        assert_eq!(decode(""), Err(GeohashError::EmptyHash));
        assert_eq!(decode("abc"), Err(GeohashError::InvalidCharacter('a')));
    }

    #[test]
    fn test_bbox_contains_is_inclusive() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 2.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(1.0, 2.0));
        assert!(!bbox.contains(1.0000001, 1.0));
        assert!(!bbox.contains(0.5, -0.0000001));
    }

    #[test]
    fn test_bbox_to_polygon() -> Result<(), GeohashError> {
        let polygon = decode_bbox("u1")?.to_polygon();
        // 4 corners + 1 to close
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_bbox_center_matches_decode() -> Result<(), GeohashError> {
        let bbox = decode_bbox("u173zmswd")?;
        let decoded = decode("u173zmswd")?;
        assert_eq!(bbox.center(), decoded.to_point());
        Ok(())
    }

    #[test]
    fn test_serde_roundtrip_shape() -> Result<(), serde_json::Error> {
        let decoded = DecodedHash {
            latitude: 1.5,
            longitude: -2.5,
            error: ErrorMargin {
                latitude: 0.5,
                longitude: 0.25,
            },
        };
        let json = serde_json::to_value(decoded)?;
        assert_eq!(json["error"]["longitude"], 0.25);
        Ok(())
    }
}
