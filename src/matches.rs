//! ASCII case folding.
//!
//! Header names are ASCII tokens, so folding never consults the locale or Unicode tables.

/// Returns `true` if `a` and `b` are equal when ASCII letters are folded to lowercase.
///
/// Non-ASCII bytes must match exactly.
pub const fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }

    true
}

/// FNV-1a over the lowercase-folded bytes.
///
/// Two names that are [`eq_ignore_case`] always produce the same hash.
pub const fn hash_to_lowercase(bytes: &[u8]) -> u64 {
    const INITIAL_STATE: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    let mut hash = INITIAL_STATE;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i].to_ascii_lowercase() as u64;
        hash = hash.wrapping_mul(PRIME);
        i += 1;
    }

    hash
}
