/// Error type for geohash-rs operations.
#[derive(Debug, PartialEq)]
pub enum GeohashError {
    /// The hash contains a character outside the base32 alphabet.
    InvalidCharacter(char),
    /// The requested precision is zero.
    InvalidPrecision(usize),
    /// An empty string was passed where a geohash was expected.
    EmptyHash,
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or NaN.
    OutOfRangeCoordinate { latitude: f64, longitude: f64 },
    /// An extent whose minimum exceeds its maximum on some axis.
    InvalidBoundingBox(String),
    /// A grid builder was finished without a required field.
    IncompleteBuilder(&'static str),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O or serialization error.
    IoError(String),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidCharacter(c) => write!(f, "Invalid geohash character: {:?}", c),
            GeohashError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            GeohashError::EmptyHash => write!(f, "Empty geohash"),
            GeohashError::OutOfRangeCoordinate {
                latitude,
                longitude,
            } => write!(
                f,
                "Coordinate out of range: latitude {}, longitude {}",
                latitude, longitude
            ),
            GeohashError::InvalidBoundingBox(msg) => write!(f, "Invalid bounding box: {}", msg),
            GeohashError::IncompleteBuilder(field) => {
                write!(f, "Grid builder is missing {}", field)
            }
            GeohashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            GeohashError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {}

impl From<std::io::Error> for GeohashError {
    fn from(e: std::io::Error) -> Self {
        GeohashError::IoError(e.to_string())
    }
}
