use crate::layers::dense::Dense;
use crate::math::matrix::Matrix;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to a layer given its pre-computed
    /// minibatch gradients.
    pub fn step(&self, layer: &mut Dense, w_grad: &Matrix, b_grad: &Matrix) {
        layer.apply_gradients(w_grad, b_grad, self.learning_rate);
    }
}
