/// Classic Levenshtein distance between two strings
///
/// Minimum number of single-character insertions, deletions, and
/// substitutions needed to turn `a` into `b`. Operates on characters,
/// not bytes, so multi-byte input is measured the way users read it.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Edit count (0 for identical strings, length of the other string when
/// one side is empty)
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    // Two-row dynamic programming: prev holds the distances for the
    // previous character of `a`, curr is filled for the current one.
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (curr[j] + 1)
                .min(prev[j + 1] + 1)
                .min(prev[j] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Normalized similarity between two strings (0.0 to 1.0)
///
/// `1.0` means equal, `0.0` means nothing in common. Defined as
/// `1 - edit_distance / max(len)`, which makes the value symmetric in
/// its arguments. Case is not folded here; callers normalize first.
#[inline]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        // Two empty strings land here as well, which keeps the ratio
        // below from dividing by zero.
        return 1.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    1.0 - edit_distance(a, b) as f64 / longest as f64
}
