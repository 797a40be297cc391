//! Normalized edit-distance similarity.

/// Candidates must score strictly above this to be suggested.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Classic Levenshtein distance over Unicode scalar values.
///
/// Insertion, deletion and substitution each cost 1.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

/// Case-insensitive similarity in `[0, 1]`.
///
/// Two empty strings are identical and score 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&a, &b);
    (max_len - distance) as f64 / max_len as f64
}

/// Returns the most similar candidate above [`DEFAULT_SIMILARITY_THRESHOLD`].
#[must_use]
pub fn find_closest<'a, I, S>(target: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    find_closest_with_threshold(target, candidates, DEFAULT_SIMILARITY_THRESHOLD)
}

/// Returns the most similar candidate scoring strictly above `threshold`.
///
/// Ties keep the earliest candidate.
#[must_use]
pub fn find_closest_with_threshold<'a, I, S>(
    target: &str,
    candidates: I,
    threshold: f64,
) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = similarity(target, candidate);
        if score <= threshold {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(name, _)| name)
}
