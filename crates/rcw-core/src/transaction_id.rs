//! Transaction identifiers of the form `C-XXXXXXXXXXXX`.
//!
//! The suffix is drawn uniformly with replacement from `A-Z0-9`. There is no
//! collision check; the space is 36^12.

use rand::Rng;

pub const PREFIX: char = 'C';
pub const SUFFIX_LEN: usize = 12;

const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate an id from the thread-local RNG.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(SUFFIX_LEN + 2);
    id.push(PREFIX);
    id.push('-');
    for _ in 0..SUFFIX_LEN {
        id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    id
}

/// True if `id` has the shape produced by [`generate`].
pub fn is_valid(id: &str) -> bool {
    let Some(suffix) = id.strip_prefix("C-") else {
        return false;
    };
    suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
