/// Fisher-Yates shuffle driven by a caller-supplied RNG, so seeded runs
/// produce reproducible move sequences.
pub fn shuffle<T>(items: &mut [T], rng: &mut fastrand::Rng) {
    for i in (1..items.len()).rev() {
        items.swap(i, rng.usize(..=i));
    }
}

/// Remove the first occurrence of `target` from the vector, if present.
pub fn remove_first(items: &mut Vec<String>, target: &str) {
    if let Some(idx) = items.iter().position(|item| item == target) {
        items.remove(idx);
    }
}
