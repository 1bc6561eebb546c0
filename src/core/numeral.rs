//! Character-to-numeral conversion for the MOD-97-10 checksum.
//!
//! Digits keep their value, letters map to two-digit numerals:
//! `A` → 10, `B` → 11, …, `Z` → 35.

use super::error::NumeralError;

/// Return the checksum numeral of a single character.
///
/// Only ASCII digits and uppercase ASCII letters are convertible.
pub fn numeral_value(c: char) -> Result<u32, NumeralError> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'A'..='Z' => Ok(c as u32 - 'A' as u32 + 10),
        _ => Err(NumeralError::Unconvertible(c)),
    }
}

/// Replace every letter in `s` by its numeral and concatenate the result.
///
/// The output consists of ASCII digits only and is at most twice as long as `s`.
pub fn expand_numerals(s: &str) -> Result<String, NumeralError> {
    let mut digits = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        let value = numeral_value(c)?;
        if value >= 10 {
            digits.push(char::from(b'0' + (value / 10) as u8));
        }
        digits.push(char::from(b'0' + (value % 10) as u8));
    }
    Ok(digits)
}
