use crate::math::matrix::Matrix;

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Fraction of rows whose predicted argmax differs from the label argmax.
/// Returns 0.0 for an empty minibatch.
pub fn classification_error(outputs: &Matrix, labels: &Matrix) -> f64 {
    if outputs.rows == 0 {
        return 0.0;
    }
    let wrong = (0..outputs.rows)
        .filter(|&r| argmax(outputs.row(r)) != argmax(labels.row(r)))
        .count();
    wrong as f64 / outputs.rows as f64
}

/// Fraction of rows classified correctly (argmax match).
pub fn accuracy(outputs: &Matrix, labels: &Matrix) -> f64 {
    1.0 - classification_error(outputs, labels)
}
