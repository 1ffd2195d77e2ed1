use crate::error::GeohashError;
use crate::index::bbox::decode;
use crate::index::codec::encode_unchecked;
use serde::{Deserialize, Serialize};

/// A step vector on the geohash grid, counted in whole cells.
///
/// Positive `lat_step` moves north, positive `lon_step` moves east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub lat_step: i64,
    pub lon_step: i64,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(1, 0);
    pub const NORTHEAST: Direction = Direction::new(1, 1);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const SOUTHEAST: Direction = Direction::new(-1, 1);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const SOUTHWEST: Direction = Direction::new(-1, -1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTHWEST: Direction = Direction::new(1, -1);

    /// The eight compass directions, clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTHEAST,
        Direction::EAST,
        Direction::SOUTHEAST,
        Direction::SOUTH,
        Direction::SOUTHWEST,
        Direction::WEST,
        Direction::NORTHWEST,
    ];

    pub const fn new(lat_step: i64, lon_step: i64) -> Self {
        Self { lat_step, lon_step }
    }
}

impl From<(i64, i64)> for Direction {
    fn from((lat_step, lon_step): (i64, i64)) -> Self {
        Self::new(lat_step, lon_step)
    }
}

/// Finds the geohash `direction` cells away from `hash`, at the same precision.
///
/// The centre of `hash` is shifted by whole cell sizes and encoded again.
/// Nothing wraps around: stepping past a pole or the antimeridian yields the
/// outermost cell on that edge.
///
/// # Example
/// ```
/// use geohash_rs::{Direction, neighbour};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(neighbour("u173zmswd", Direction::NORTH)?, "u173zmswf");
/// assert_eq!(neighbour("u173zmswd", Direction::SOUTHWEST)?, "u173zmsw3");
/// # Ok(())
/// # }
/// ```
pub fn neighbour(hash: &str, direction: Direction) -> Result<String, GeohashError> {
    let decoded = decode(hash)?;
    let latitude =
        decoded.latitude + direction.lat_step as f64 * decoded.error.latitude * 2.0;
    let longitude =
        decoded.longitude + direction.lon_step as f64 * decoded.error.longitude * 2.0;

    Ok(encode_unchecked(latitude, longitude, hash.chars().count()))
}

/// All eight neighbours of `hash`, in [`Direction::COMPASS`] order.
pub fn neighbours(hash: &str) -> Result<[String; 8], GeohashError> {
    let mut found: [String; 8] = Default::default();
    for (slot, &direction) in found.iter_mut().zip(Direction::COMPASS.iter()) {
        *slot = neighbour(hash, direction)?;
    }
    Ok(found)
}
