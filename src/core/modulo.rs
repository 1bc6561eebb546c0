//! Remainder modulo 97 of decimal strings of any length.

/// Compute `digits mod 97` without materialising the full integer.
///
/// Uses Horner's method: the running remainder is folded one digit at a
/// time, so the intermediate value never exceeds `96 * 10 + 9`.
/// The caller guarantees that `digits` consists of ASCII digits only; an
/// empty string yields 0.
pub fn mod97(digits: &str) -> u32 {
    debug_assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "mod97 input must be decimal digits: {digits:?}"
    );
    digits.bytes().fold(0, |remainder, b| {
        (remainder * 10 + u32::from(b.wrapping_sub(b'0'))) % 97
    })
}
