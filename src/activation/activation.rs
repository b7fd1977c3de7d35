use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    Tanh,
    ReLU,
    Identity,
    /// Softmax is vector-valued; it is applied row-wise at the layer level
    /// in `Dense::forward()`, not element-wise. The element-wise `apply()`
    /// path is therefore unreachable for this variant.
    Softmax,
}

impl Activation {
    /// Element-wise activation. For `Softmax`, `Dense::forward()` applies the
    /// full-row softmax; this path must not be reached.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::ReLU => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            Activation::Identity => x,
            Activation::Softmax => {
                panic!(
                    "Activation::Softmax::apply() must not be called element-wise; \
                     Dense::forward() applies the full-row softmax."
                )
            }
        }
    }

    /// Element-wise derivative evaluated at the pre-activation `z`.
    ///
    /// For `Softmax` the output layer pairs with cross-entropy and the
    /// combined gradient is `predicted - expected`, already produced by
    /// `CrossEntropyLoss::derivative()`. Returning 1.0 here lets the backward
    /// pass carry that delta through without applying the Jacobian twice.
    pub fn derivative(&self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let fx = self.apply(z);
                fx * (1.0 - fx)
            }
            Activation::Tanh => {
                let t = z.tanh();
                1.0 - t * t
            }
            Activation::ReLU => {
                if z > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Identity => 1.0,
            Activation::Softmax => 1.0,
        }
    }
}

/// Row-wise softmax with max subtraction for numerical stability.
pub fn softmax_row(row: &mut [f64]) {
    let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for v in row.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in row.iter_mut() {
        *v /= sum;
    }
}
