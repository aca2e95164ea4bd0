//! Password generator with character-class inclusion guarantees.

use wasm_bindgen::prelude::*;

use crate::random_below;

const LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

/// Requested password policy. Length is clamped to `[4, 128]`; enabling no
/// class at all silently falls back to lowercase-only, which is a policy
/// choice rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl PasswordOptions {
    fn pools(&self) -> Vec<&'static [u8]> {
        let mut pools: Vec<&'static [u8]> = Vec::new();
        if self.lower {
            pools.push(LOWERS.as_bytes());
        }
        if self.upper {
            pools.push(UPPERS.as_bytes());
        }
        if self.digits {
            pools.push(DIGITS.as_bytes());
        }
        if self.symbols {
            pools.push(SYMBOLS.as_bytes());
        }
        if pools.is_empty() {
            pools.push(LOWERS.as_bytes());
        }
        pools
    }

    fn clamped_length(&self) -> usize {
        self.length.clamp(MIN_LENGTH, MAX_LENGTH)
    }
}

fn pick(pool: &[u8]) -> u8 {
    pool[random_below(pool.len())]
}

/// Builds a password of exactly the clamped length containing at least one
/// character from every enabled class: one character per class is seeded
/// up front, the rest is random padding, and the result is shuffled.
pub fn password_from_options(options: &PasswordOptions) -> String {
    let length = options.clamped_length();
    let pools = options.pools();
    let mut chars: Vec<u8> = pools.iter().map(|pool| pick(pool)).collect();
    while chars.len() < length {
        let pool = pools[random_below(pools.len())];
        chars.push(pick(pool));
    }
    // Fisher-Yates so the seeded class characters do not cluster at the front.
    for idx in (1..chars.len()).rev() {
        let swap = random_below(idx + 1);
        chars.swap(idx, swap);
    }
    chars.truncate(length);
    String::from_utf8(chars).expect("password alphabets are ASCII")
}

#[wasm_bindgen]
pub fn generate_password(
    length: usize,
    lower: bool,
    upper: bool,
    digits: bool,
    symbols: bool,
) -> String {
    password_from_options(&PasswordOptions {
        length,
        lower,
        upper,
        digits,
        symbols,
    })
}
