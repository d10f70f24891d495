use crate::services::vectorizer::{vectorize, VectorizeError};

/// Cosine of the angle between two term-frequency vectors.
///
/// A zero vector has no direction, so its similarity to anything is 0.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0u64, 0u64, 0u64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (u64::from(x), u64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    // Single square root keeps identical vectors at exactly 1.0
    dot as f64 / ((norm_a as f64) * (norm_b as f64)).sqrt()
}

/// Pairwise cosine similarity, `S[i][j] = cos(left[i], right[j])`
pub fn similarity_matrix(left: &[Vec<u32>], right: &[Vec<u32>]) -> Vec<Vec<f64>> {
    left.iter()
        .map(|l| right.iter().map(|r| cosine_similarity(l, r)).collect())
        .collect()
}

/// Scores how well an item's genres cover the query genres.
///
/// Both lists are vectorized over one shared vocabulary built from this pair
/// only. Every query genre contributes its best cosine match among the item
/// genres, so the result lies in `[0, query_genres.len()]`.
pub fn score(query_genres: &[String], item_genres: &[String]) -> Result<f64, VectorizeError> {
    if query_genres.is_empty() || item_genres.is_empty() {
        return Ok(0.0);
    }

    let corpus: Vec<String> = query_genres
        .iter()
        .chain(item_genres)
        .cloned()
        .collect();
    let matrix = vectorize(&corpus)?;
    let (query_vectors, item_vectors) = matrix.split_rows(query_genres.len());

    let total: f64 = similarity_matrix(query_vectors, item_vectors)
        .iter()
        .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .sum();

    Ok(total)
}
