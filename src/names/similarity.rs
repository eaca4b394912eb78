//! Normalized string similarity for roster matching.
//!
//! The ratio counts matched contiguous subsequences: the longest common
//! substring is taken, the unmatched text on both sides is matched
//! recursively, and the total matched length M is normalized to
//! 2·M / (len(a) + len(b)). Symmetric, 1.0 for equal strings.

/// Similarity ratio between two strings, in [0, 1]
///
/// Operates on characters, so accented names compare correctly. Two empty
/// strings are considered identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = 2.0 * matched_len(&a, &b) as f64 / total as f64;
    ratio
}

/// Find the best match for `query` among `choices` at or above `cutoff`
///
/// Comparison is case-insensitive. Returns the index and score of the winning
/// choice; equal scores resolve to the earliest choice, matching the top-1
/// result of a closest-match search.
pub fn closest_match(query: &str, choices: &[String], cutoff: f64) -> Option<(usize, f64)> {
    let query = query.to_lowercase();

    let mut best: Option<(usize, f64)> = None;
    for (idx, choice) in choices.iter().enumerate() {
        let score = ratio(&query, &choice.to_lowercase());
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}

/// Total length of matched blocks between `a` and `b`
fn matched_len(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matched_len(&a[..i], &b[..j]) + matched_len(&a[i + size..], &b[j + size..])
}

/// Longest common contiguous block; ties resolve to the earliest start in
/// `a`, then the earliest start in `b`
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    if a.is_empty() || b.is_empty() {
        return best;
    }

    // prev[j + 1] = length of the common suffix ending at a[i - 1], b[j]
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = row;
    }
    best
}
