use crate::coord::validate_lat_lon;
use crate::error::GeohashError;
use crate::index::bbox::BoundingBox;
use crate::index::constants::{
    BASE32_ALPHABET, BITS_PER_CHAR, DECODE_TABLE, DEFAULT_PRECISION, INVALID_SYMBOL, LATITUDE_RANGE,
    LONGITUDE_RANGE,
};

/// Which axis the next bisection bit belongs to.
///
/// Bits alternate starting with longitude, and the alternation runs across
/// character boundaries for the whole hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    fn toggle(self) -> Self {
        match self {
            Axis::Longitude => Axis::Latitude,
            Axis::Latitude => Axis::Longitude,
        }
    }
}

/// A closed coordinate range that is halved once per bit.
#[derive(Debug, Clone, Copy)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    fn new(range: [f64; 2]) -> Self {
        Self {
            min: range[0],
            max: range[1],
        }
    }

    fn mid(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    /// Keeps the half containing `value` and returns the emitted bit.
    /// A value sitting exactly on the midpoint goes to the lower half.
    fn narrow_towards(&mut self, value: f64) -> bool {
        let bit = value > self.mid();
        self.narrow(bit);
        bit
    }

    fn narrow(&mut self, bit: bool) {
        let mid = self.mid();
        if bit {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }
}

/// Encodes a latitude/longitude pair into a geohash of `precision` characters.
///
/// Each character packs five bisection steps, taken alternately on longitude
/// and latitude (longitude first), most significant bit first.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(encode(52.3702, 4.8952, 9)?, "u173zmswd");
/// assert_eq!(encode(52.1326, 5.2913, 2)?, "u1");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] - `precision` is zero
/// - [`GeohashError::OutOfRangeCoordinate`] - latitude or longitude is outside
///   the globe, or NaN
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String, GeohashError> {
    if precision == 0 {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    validate_lat_lon(latitude, longitude)?;

    Ok(encode_unchecked(latitude, longitude, precision))
}

/// Same as [`encode`] using [`DEFAULT_PRECISION`](crate::DEFAULT_PRECISION).
pub fn encode_default(latitude: f64, longitude: f64) -> Result<String, GeohashError> {
    encode(latitude, longitude, DEFAULT_PRECISION)
}

/// Bisection without range checks.
///
/// Values beyond the globe keep picking the outer half, so they land in the
/// edge cell on that side. Neighbour lookups rely on this near the poles.
pub(crate) fn encode_unchecked(latitude: f64, longitude: f64, precision: usize) -> String {
    let mut lat_range = Interval::new(LATITUDE_RANGE);
    let mut lon_range = Interval::new(LONGITUDE_RANGE);
    let mut axis = Axis::Longitude;

    let mut hash = String::with_capacity(precision);
    for _ in 0..precision {
        let mut value: u8 = 0;
        for _ in 0..BITS_PER_CHAR {
            let bit = match axis {
                Axis::Longitude => lon_range.narrow_towards(longitude),
                Axis::Latitude => lat_range.narrow_towards(latitude),
            };
            value = (value << 1) | bit as u8;
            axis = axis.toggle();
        }
        hash.push(BASE32_ALPHABET[value as usize] as char);
    }
    hash
}

/// Looks up the 5-bit value of a hash character, case-insensitively.
pub(crate) fn symbol_value(c: char) -> Result<u8, GeohashError> {
    if !c.is_ascii() {
        return Err(GeohashError::InvalidCharacter(c));
    }
    match DECODE_TABLE[c as usize] {
        INVALID_SYMBOL => Err(GeohashError::InvalidCharacter(c)),
        value => Ok(value),
    }
}

/// Decodes a geohash into the exact cell it denotes.
///
/// Upper and lower case characters are treated the same.
///
/// # Example
/// ```
/// use geohash_rs::decode_bbox;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let bbox = decode_bbox("u173zmswd")?;
/// assert_eq!(bbox.min_lat, 52.370195388793945);
/// assert_eq!(bbox.max_lon, 4.895224571228027);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::EmptyHash`] - `hash` is empty
/// - [`GeohashError::InvalidCharacter`] - a character is not in the alphabet
pub fn decode_bbox(hash: &str) -> Result<BoundingBox, GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::EmptyHash);
    }

    let mut lat_range = Interval::new(LATITUDE_RANGE);
    let mut lon_range = Interval::new(LONGITUDE_RANGE);
    let mut axis = Axis::Longitude;

    for c in hash.chars() {
        let value = symbol_value(c)?;
        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (value >> shift) & 1 == 1;
            match axis {
                Axis::Longitude => lon_range.narrow(bit),
                Axis::Latitude => lat_range.narrow(bit),
            }
            axis = axis.toggle();
        }
    }

    Ok(BoundingBox::new(
        lat_range.min,
        lon_range.min,
        lat_range.max,
        lon_range.max,
    ))
}

/// Checks that `hash` is a non-empty geohash and returns it lowercased.
pub fn normalize_hash(hash: &str) -> Result<String, GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::EmptyHash);
    }
    hash.chars()
        .map(|c| symbol_value(c).map(|v| BASE32_ALPHABET[v as usize] as char))
        .collect()
}
