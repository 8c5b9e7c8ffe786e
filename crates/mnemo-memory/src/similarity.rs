//! Cosine similarity over embedding vectors.

/// Cosine similarity of two equal-length vectors: `dot(a,b) / (|a|*|b|)`.
///
/// Returns 0.0 when either vector has zero magnitude (or is empty), so a
/// degenerate embedding never divides by zero and is excluded under any
/// positive threshold.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::cosine_similarity;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.3, -1.2, 4.5];
        let score = cosine_similarity(&v, &v);
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let score = cosine_similarity(&[2.0, 1.0], &[-2.0, -1.0]);
        assert!((score + 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_scores_zero_without_panic() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn scale_invariance() {
        let score_a = cosine_similarity(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        let score_b = cosine_similarity(&[10.0, 20.0, 30.0], &[4.0, 5.0, 6.0]);
        assert!((score_a - score_b).abs() < 1e-6);
    }
}
