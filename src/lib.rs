//! # geohash-rs
//!
//! Encode latitude/longitude into geohash strings, decode them back into
//! cells, step to neighbouring cells and tile rectangles with cells.
//!
//! ### 1. Free functions
//!
//! ```
//! use geohash_rs::{Direction, decode, encode, neighbour};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hash = encode(52.3702, 4.8952, 9)?;
//! assert_eq!(hash, "u173zmswd");
//!
//! let decoded = decode(&hash)?;
//! println!("{} ± {}", decoded.latitude, decoded.error.latitude);
//!
//! assert_eq!(neighbour(&hash, Direction::NORTH)?, "u173zmswf");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeohashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::GeohashCell;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_coord(&(4.8952, 52.3702), 7)?;
//! println!("{}", cell.hash);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeohashGrid` - Collections of Cells
//!
//! ```
//! use geohash_rs::{CellsToGeoJson, GeohashGrid};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let grid = GeohashGrid::builder()
//!     .precision(5)
//!     .extent(52.30, 4.80, 52.40, 4.95)
//!     .build()?;
//!
//! let json = grid.cells().to_geojson_string()?;
//! assert!(json.contains("FeatureCollection"));
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
pub mod io;

pub use cell::GeohashCell;
pub use coord::{Coordinate, validate_lat_lon};
pub use error::GeohashError;
pub use geom::{geometry_extent, parse_geojson, parse_geometry, parse_wkt};
pub use grid::{GeohashGrid, GeohashGridBuilder, bounding_boxes, bounding_boxes_default};
pub use index::{
    BASE32_ALPHABET, BoundingBox, DEFAULT_PRECISION, DecodedHash, Direction, ErrorMargin,
    LATITUDE_RANGE, LONGITUDE_RANGE, decode, decode_bbox, encode, encode_default, neighbour,
    neighbours, normalize_hash,
};
pub use io::{CellsToGeoJson, cell_to_feature};

pub use geo_types;
pub use geojson;
