/// The 32-symbol geohash alphabet. `a`, `i`, `l` and `o` are left out.
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Precision used when the caller does not pick one
pub const DEFAULT_PRECISION: usize = 9;

/// Bits carried by a single geohash character
pub(crate) const BITS_PER_CHAR: u32 = 5;

/// Latitude range [min, max] of the whole globe
pub const LATITUDE_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude range [min, max] of the whole globe
pub const LONGITUDE_RANGE: [f64; 2] = [-180.0, 180.0];

/// Marks a byte that is not part of the alphabet
pub(crate) const INVALID_SYMBOL: u8 = 0xFF;

/// Maps an ASCII byte to its 5-bit value, accepting both letter cases.
pub(crate) const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID_SYMBOL; 128];
    let mut i = 0;
    while i < BASE32_ALPHABET.len() {
        let symbol = BASE32_ALPHABET[i];
        table[symbol as usize] = i as u8;
        table[symbol.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
}
