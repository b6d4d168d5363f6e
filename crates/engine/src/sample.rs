use lexicon_catalog::{Catalog, Term};

/// Return `count` terms in randomized order without replacement.
///
/// Each term gets a fresh random u64 comparison key and the whole catalog is
/// sorted by it before taking the first `count`. Asking for more terms than
/// exist returns the entire catalog in shuffled order.
pub fn sample(catalog: &Catalog, count: usize) -> Vec<Term> {
    if count == 0 {
        return Vec::new();
    }

    let mut keyed: Vec<(u64, &Term)> = catalog
        .all_terms()
        .iter()
        .enumerate()
        .map(|(index, term)| (random_key(index), term))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);

    keyed
        .into_iter()
        .take(count)
        .map(|(_, term)| term.clone())
        .collect()
}

/// Fresh random key per term. When the OS RNG is unavailable the key degrades
/// to a mixed index so sampling still returns a full page instead of erroring.
fn random_key(index: usize) -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_be_bytes(bytes),
        Err(err) => {
            log::warn!("getrandom failed, falling back to mixed index key: {err}");
            mix_index(index as u64)
        }
    }
}

// splitmix64 finalizer.
fn mix_index(value: u64) -> u64 {
    let mut x = value.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
