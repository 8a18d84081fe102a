//! Letter and digit mapping for the grid code alphabet

use crate::validation::MaidenheadError;

/// Map a grid code character to its cell index.
///
/// Letters are case-insensitive and count from 'a' = 0; ASCII digits map to
/// their numeric value. Anything else is outside the alphabet.
pub fn letter_to_number(character: char) -> Result<u32, MaidenheadError> {
    if let Some(digit) = character.to_digit(10) {
        return Ok(digit);
    }

    let lower = character.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok(lower as u32 - 'a' as u32)
    } else {
        Err(MaidenheadError::InvalidCharacter { character })
    }
}

/// Map a cell index to its lowercase code letter.
///
/// Callers never pass indices past the subsquare alphabet ('x').
pub fn number_to_letter(number: u32) -> char {
    debug_assert!(number < 24, "cell index {} has no code letter", number);
    char::from(b'a' + number as u8)
}
