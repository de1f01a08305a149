//! Location code handling and the location-derived base price.

/// Base price used when the location code is too short to hash.
pub const DEFAULT_BASE_PRICE: i64 = 350_000;
/// Half-width of the window the location hash may move the base price by.
pub const PRICE_VARIANCE: i64 = 100_000;
pub const MIN_LOCATION_CODE_LEN: usize = 3;
pub const MAX_LOCATION_CODE_LEN: usize = 5;
pub const DEFAULT_LOCATION_CODE: &str = "90210";

/// Keeps ASCII digits only and caps the result at five characters.
pub fn sanitize_location_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_LOCATION_CODE_LEN)
        .collect()
}

/// Multiplicative string hash over UTF-16 code units with 32-bit wraparound.
pub fn location_hash(code: &str) -> i32 {
    code.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Shifts the default price by the hash folded into `[-PRICE_VARIANCE, PRICE_VARIANCE]`.
///
/// Uses a Euclidean remainder so negative hashes stay inside the same window.
/// This deliberately differs from a truncating `%`, which would map them into
/// `[-3 * PRICE_VARIANCE, -PRICE_VARIANCE]`. Sanitised codes never hash negative.
pub fn base_price_for_location(code: &str) -> i64 {
    if code.encode_utf16().count() < MIN_LOCATION_CODE_LEN {
        return DEFAULT_BASE_PRICE;
    }

    let window = 2 * PRICE_VARIANCE + 1;
    let variance = i64::from(location_hash(code)).rem_euclid(window) - PRICE_VARIANCE;
    DEFAULT_BASE_PRICE + variance
}
