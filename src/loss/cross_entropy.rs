use crate::math::matrix::Matrix;

/// Categorical cross-entropy for use with a Softmax output layer.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Mean cross-entropy over a minibatch:
    ///   L = -(1/batch) Σ_rows Σ_i expected[i] · log(predicted[i] + ε)
    ///
    /// `predicted` — softmax probabilities, batch × n_classes
    /// `expected`  — one-hot (or soft) target rows, same shape
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let mut total = 0.0;
        for r in 0..predicted.rows {
            for (p, e) in predicted.row(r).iter().zip(expected.row(r)) {
                total -= e * (p + EPS).ln();
            }
        }
        total / predicted.rows as f64
    }

    /// Gradient of the combined Softmax + cross-entropy w.r.t. the
    /// pre-softmax logits:
    ///   ∂L/∂z = (predicted - expected) / batch
    ///
    /// This is the initial delta the trainer feeds into the backward pass.
    /// The Softmax activation's own derivative is identity (1.0) so the
    /// combined gradient is not applied twice. The 1/batch factor makes
    /// `inputsᵀ·δ` the batch-mean parameter gradient directly.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let inv_batch = 1.0 / predicted.rows as f64;
        (predicted - expected).scale(inv_batch)
    }
}
