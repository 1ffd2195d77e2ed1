use crate::coord::Coordinate;
use crate::error::GeohashError;
use crate::index::{
    BASE32_ALPHABET, BoundingBox, DecodedHash, Direction, ErrorMargin, decode_bbox, encode,
    neighbour, neighbours, normalize_hash,
};
use geo_types::{Point, Polygon, Rect};

/// A single geohash cell.
///
/// Each `GeohashCell` holds its (lowercase) hash together with the exact
/// bounding box it denotes and the centre of that box.
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// // From a (lon, lat) tuple
/// let cell = GeohashCell::from_coord(&(4.8952, 52.3702), 9)?;
/// assert_eq!(cell.hash, "u173zmswd");
/// println!("Center: ({}, {})", cell.latitude(), cell.longitude());
///
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeohashCell {
    /// Lowercase geohash string
    pub hash: String,
    /// Exact extent of the cell
    pub bbox: BoundingBox,
    /// Centre of the cell (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// Number of characters in the hash
    pub precision: usize,
}

impl GeohashCell {
    /// Create a GeohashCell from a hash string. Upper case is accepted.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_hash("U173ZMSWD")?;
    /// assert_eq!(cell.hash, "u173zmswd");
    /// assert_eq!(cell.precision, 9);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, GeohashError> {
        let hash = normalize_hash(hash)?;
        let bbox = decode_bbox(&hash)?;
        let precision = hash.len();

        Ok(Self {
            hash,
            center: bbox.center(),
            bbox,
            precision,
        })
    }

    /// Create the cell containing a latitude/longitude pair.
    pub fn from_lat_lon(
        latitude: f64,
        longitude: f64,
        precision: usize,
    ) -> Result<Self, GeohashError> {
        let hash = encode(latitude, longitude, precision)?;
        Self::from_hash(&hash)
    }

    /// Create the cell containing a coordinate (x = longitude, y = latitude).
    ///
    /// Accepts `(f64, f64)` tuples and `geo_types::Point<f64>`.
    pub fn from_coord(coord: &impl Coordinate, precision: usize) -> Result<Self, GeohashError> {
        Self::from_lat_lon(coord.y(), coord.x(), precision)
    }

    /// Latitude of the cell centre.
    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    /// Longitude of the cell centre.
    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Half the cell height and width.
    pub fn error(&self) -> ErrorMargin {
        DecodedHash::from(self.bbox).error
    }

    pub fn to_rect(&self) -> Rect<f64> {
        self.bbox.to_rect()
    }

    /// Converts this cell to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bbox.to_polygon()
    }

    /// Whether the coordinate lies in the cell, edges included.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bbox.contains(coord.y(), coord.x())
    }

    /// The cell `direction` steps away at the same precision.
    pub fn neighbour(&self, direction: Direction) -> Result<Self, GeohashError> {
        Self::from_hash(&neighbour(&self.hash, direction)?)
    }

    /// The eight surrounding cells, clockwise from north.
    pub fn neighbours(&self) -> Result<Vec<Self>, GeohashError> {
        neighbours(&self.hash)?
            .iter()
            .map(|hash| Self::from_hash(hash))
            .collect()
    }

    /// The enclosing cell one character shorter, or `None` for a single character.
    pub fn parent(&self) -> Option<Self> {
        if self.precision <= 1 {
            return None;
        }
        Self::from_hash(&self.hash[..self.precision - 1]).ok()
    }

    /// The 32 cells one character longer, in alphabet order.
    pub fn children(&self) -> Result<Vec<Self>, GeohashError> {
        BASE32_ALPHABET
            .iter()
            .map(|&symbol| {
                let mut hash = String::with_capacity(self.precision + 1);
                hash.push_str(&self.hash);
                hash.push(symbol as char);
                Self::from_hash(&hash)
            })
            .collect()
    }
}
