mod bbox;
mod codec;
pub mod constants;
mod neighbour;

pub use bbox::{BoundingBox, DecodedHash, ErrorMargin, decode};
pub use codec::{decode_bbox, encode, encode_default, normalize_hash};
pub use constants::{BASE32_ALPHABET, DEFAULT_PRECISION, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use neighbour::{Direction, neighbour, neighbours};
