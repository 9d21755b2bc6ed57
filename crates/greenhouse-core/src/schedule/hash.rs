//! Deterministic caretaker rotation.
//!
//! Auto-assignment must resolve the same task key to the same caretaker in
//! every process and every language that reads the data file, so the hash is
//! spelled out here instead of using [`std::hash`]: start from zero and, for
//! each UTF-16 code unit `c` of the key, compute `acc = acc * 31 + c` modulo
//! 2^32.

use crate::models::Profile;

/// Hashes a task key with the 31-multiplier rolling hash over UTF-16 code
/// units.
///
/// # Examples
///
/// ```rust
/// use greenhouse_core::schedule::round_robin_hash;
///
/// assert_eq!(round_robin_hash(""), 0);
/// assert_eq!(round_robin_hash("ab"), 97 * 31 + 98);
/// ```
pub fn round_robin_hash(key: &str) -> u32 {
    key.encode_utf16().fold(0u32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(u32::from(unit))
    })
}

/// Index into a list of `count` caretakers for the given key, or `None` when
/// there is nobody to pick.
pub fn round_robin_index(key: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(round_robin_hash(key) as usize % count)
}

/// Picks the caretaker responsible for `key` when no explicit assignment
/// exists.
pub fn pick_round_robin<'a>(key: &str, profiles: &'a [Profile]) -> Option<&'a Profile> {
    round_robin_index(key, profiles.len()).and_then(|index| profiles.get(index))
}
