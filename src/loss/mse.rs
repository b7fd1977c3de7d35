use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Mean squared error over every element of the minibatch:
    ///   L = (1/(batch·cols)) Σ (predicted - expected)²
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let diff = predicted - expected;
        let n = (predicted.rows * predicted.cols) as f64;
        let mut total = 0.0;
        for r in 0..diff.rows {
            for &d in diff.row(r) {
                total += d * d;
            }
        }
        total / n
    }

    /// Exact gradient of the mean: 2·(predicted - expected) / (batch·cols).
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let n = (predicted.rows * predicted.cols) as f64;
        (predicted - expected).scale(2.0 / n)
    }
}
