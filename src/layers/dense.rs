use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::{softmax_row, Activation};
use crate::math::matrix::Matrix;

/// A fully connected layer operating on whole minibatches.
///
/// `weights` is `input_size × size`, `biases` is `1 × size`. The forward pass
/// caches pre-activations and activations (batch × size) for backprop; the
/// caches are transient and excluded from serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    pub weights: Matrix,
    pub biases: Matrix,
    pub activation: Activation,
    #[serde(skip)]
    pre_activations: Matrix,
    #[serde(skip)]
    activations: Matrix,
}

impl Dense {
    /// Creates a layer with freshly initialized parameters: He init before
    /// ReLU, Xavier otherwise, zero biases.
    pub fn new<R: Rng>(
        input_size: usize,
        size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Dense {
        let weights = match activation {
            Activation::ReLU => Matrix::he(input_size, size, rng),
            _ => Matrix::xavier(input_size, size, rng),
        };
        Dense {
            weights,
            biases: Matrix::zeros(1, size),
            activation,
            pre_activations: Matrix::default(),
            activations: Matrix::default(),
        }
    }

    /// Builds a layer from explicit parameters.
    pub fn from_parts(weights: Matrix, biases: Matrix, activation: Activation) -> Dense {
        assert_eq!(
            weights.cols, biases.cols,
            "bias width must match layer size"
        );
        Dense {
            weights,
            biases,
            activation,
            pre_activations: Matrix::default(),
            activations: Matrix::default(),
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn size(&self) -> usize {
        self.weights.cols
    }

    /// Activations cached by the most recent `forward()` call.
    pub fn activations(&self) -> &Matrix {
        &self.activations
    }

    /// Forward pass over a minibatch: `z = x·W + b`, `a = σ(z)`.
    /// Softmax is applied per row; everything else element-wise.
    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        let z = input.matmul(&self.weights).add_row_bias(&self.biases);
        let a = match self.activation {
            Activation::Softmax => {
                let mut out = z.clone();
                for i in 0..out.rows {
                    softmax_row(out.row_mut(i));
                }
                out
            }
            _ => z.map(|x| self.activation.apply(x)),
        };
        self.pre_activations = z;
        self.activations = a.clone();
        a
    }

    /// Backward pass for this layer.
    ///
    /// `delta_a` is ∂L/∂a for this layer (batch × size), `inputs` is the
    /// minibatch this layer saw on the forward pass (batch × input_size).
    /// Returns `(w_grad, b_grad, delta_prev)` where `delta_prev` is ∂L/∂a of
    /// the previous layer. The derivative is evaluated at the cached
    /// pre-activations, so `forward()` must have run on the same minibatch.
    pub fn backward(&self, delta_a: &Matrix, inputs: &Matrix) -> (Matrix, Matrix, Matrix) {
        let act_derivative = self
            .pre_activations
            .map(|z| self.activation.derivative(z));
        // δ_z = ∂L/∂a ⊙ σ'(z)
        let delta_z = delta_a.hadamard(&act_derivative);

        let w_grad = inputs.transpose().matmul(&delta_z);
        let b_grad = delta_z.column_sums();
        let delta_prev = delta_z.matmul(&self.weights.transpose());

        (w_grad, b_grad, delta_prev)
    }

    /// Applies pre-computed gradients scaled by `lr`.
    pub fn apply_gradients(&mut self, w_grad: &Matrix, b_grad: &Matrix, lr: f64) {
        self.weights = &self.weights - &w_grad.scale(lr);
        self.biases = &self.biases - &b_grad.scale(lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_layer() -> Dense {
        Dense::from_parts(
            Matrix::from_rows(vec![vec![0.5, -0.5], vec![1.0, 0.25]]),
            Matrix::from_rows(vec![vec![0.1, -0.1]]),
            Activation::Identity,
        )
    }

    #[test]
    fn forward_matches_manual_affine() {
        let mut layer = fixed_layer();
        let x = Matrix::from_rows(vec![vec![1.0, 2.0]]);
        let out = layer.forward(&x);
        // z = [1*0.5 + 2*1.0 + 0.1, 1*(-0.5) + 2*0.25 - 0.1]
        assert!((out.get(0, 0) - 2.6).abs() < 1e-12);
        assert!((out.get(0, 1) - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn backward_matches_finite_difference() {
        // Scalar loss L = 0.5 * Σ (a - y)², so ∂L/∂a = a - y.
        let x = Matrix::from_rows(vec![vec![0.3, -0.7], vec![1.1, 0.4]]);
        let y = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);

        let loss_of = |layer: &mut Dense| {
            let a = layer.forward(&x);
            let mut total = 0.0;
            for i in 0..a.rows {
                for j in 0..a.cols {
                    let d = a.get(i, j) - y.get(i, j);
                    total += 0.5 * d * d;
                }
            }
            total
        };

        let mut layer = Dense::from_parts(
            Matrix::from_rows(vec![vec![0.2, -0.3], vec![0.4, 0.1]]),
            Matrix::from_rows(vec![vec![0.05, -0.05]]),
            Activation::Sigmoid,
        );

        let a = layer.forward(&x);
        let delta_a = &a - &y;
        let (w_grad, b_grad, _) = layer.backward(&delta_a, &x);

        let eps = 1e-6;
        for r in 0..layer.weights.rows {
            for c in 0..layer.weights.cols {
                let orig = layer.weights.get(r, c);
                layer.weights.set(r, c, orig + eps);
                let plus = loss_of(&mut layer);
                layer.weights.set(r, c, orig - eps);
                let minus = loss_of(&mut layer);
                layer.weights.set(r, c, orig);
                let numeric = (plus - minus) / (2.0 * eps);
                assert!(
                    (numeric - w_grad.get(r, c)).abs() < 1e-6,
                    "w_grad[{r}][{c}]: numeric {numeric} vs analytic {}",
                    w_grad.get(r, c)
                );
            }
        }
        for c in 0..layer.biases.cols {
            let orig = layer.biases.get(0, c);
            layer.biases.set(0, c, orig + eps);
            let plus = loss_of(&mut layer);
            layer.biases.set(0, c, orig - eps);
            let minus = loss_of(&mut layer);
            layer.biases.set(0, c, orig);
            let numeric = (plus - minus) / (2.0 * eps);
            assert!((numeric - b_grad.get(0, c)).abs() < 1e-6);
        }
    }
}
