//! Grid code shape validation

use crate::core::{MAX_PRECISION, MIN_PRECISION};

/// True when `code` is a well-formed grid code.
///
/// Accepted codes alternate pair types: a field letter pair 'A'..='R',
/// then digit pairs and letter pairs 'A'..='X', up to five pairs total.
/// Letters match case-insensitively.
pub fn valid(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() % 2 != 0 {
        return false;
    }

    let pairs = chars.len() / 2;
    if !(MIN_PRECISION as usize..=MAX_PRECISION as usize).contains(&pairs) {
        return false;
    }

    for (index, pair) in chars.chunks(2).enumerate() {
        let ok = if index == 0 {
            pair.iter().all(|c| matches!(c.to_ascii_uppercase(), 'A'..='R'))
        } else if index % 2 == 1 {
            pair.iter().all(|c| c.is_ascii_digit())
        } else {
            pair.iter().all(|c| matches!(c.to_ascii_uppercase(), 'A'..='X'))
        };

        if !ok {
            return false;
        }
    }

    true
}
