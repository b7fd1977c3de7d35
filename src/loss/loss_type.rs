use serde::{Deserialize, Serialize};

use crate::math::matrix::Matrix;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::mse::MseLoss;

/// Selects which loss function the trainer uses.
///
/// - `CrossEntropy` — categorical cross-entropy; pair with a Softmax output.
///   The gradient is the combined Softmax+CE gradient `(predicted - expected)
///   / batch`, matching the convention in `CrossEntropyLoss::derivative()`.
/// - `Mse`          — mean squared error; pair with Identity or Sigmoid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    CrossEntropy,
    Mse,
}

impl LossType {
    /// Mean loss over a minibatch.
    pub fn loss(&self, predicted: &Matrix, expected: &Matrix) -> f64 {
        match self {
            LossType::CrossEntropy => CrossEntropyLoss::loss(predicted, expected),
            LossType::Mse => MseLoss::loss(predicted, expected),
        }
    }

    /// Initial backward delta (∂L/∂a of the output layer) for a minibatch.
    pub fn derivative(&self, predicted: &Matrix, expected: &Matrix) -> Matrix {
        match self {
            LossType::CrossEntropy => CrossEntropyLoss::derivative(predicted, expected),
            LossType::Mse => MseLoss::derivative(predicted, expected),
        }
    }
}
