// pairs.rs - Canonical pair enumeration order
//
// Every flat list of pairwise values in this crate is ordered as
// (0,1),(0,2),...,(0,N-1),(1,2),...,(N-2,N-1). Producers and consumers
// must go through `pairs` so they can never disagree.

/// Number of unordered pairs among `n` sequences
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Iterate pairs `(i, j)` with `i < j`, outer loop over `i`, inner over `j` ascending
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Pair at position `index` of the enumeration, if any
pub fn pair_at(index: usize, n: usize) -> Option<(usize, usize)> {
    if index >= pair_count(n) {
        return None;
    }
    let mut remaining = index;
    for i in 0..n {
        let row_len = n - i - 1;
        if remaining < row_len {
            return Some((i, i + 1 + remaining));
        }
        remaining -= row_len;
    }
    None
}
