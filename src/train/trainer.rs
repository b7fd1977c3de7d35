use crate::loss::loss_type::LossType;
use crate::math::matrix::Matrix;
use crate::metrics::classification_error;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::minibatch_stats::MinibatchStats;

/// Drives model training: owns the loss and optimizer, borrows the network,
/// and tracks the most recent minibatch's metrics so a progress reporter can
/// read them between steps.
pub struct Trainer<'a> {
    network: &'a mut Network,
    loss: LossType,
    optimizer: Sgd,
    minibatches_trained: usize,
    last_loss: f64,
    last_error: f64,
}

impl<'a> Trainer<'a> {
    pub fn new(network: &'a mut Network, loss: LossType, optimizer: Sgd) -> Trainer<'a> {
        Trainer {
            network,
            loss,
            optimizer,
            minibatches_trained: 0,
            last_loss: 0.0,
            last_error: 0.0,
        }
    }

    /// Runs one optimizer step on a minibatch: forward, loss, backward
    /// through every layer in reverse, one SGD update per layer.
    ///
    /// # Panics
    /// Panics if the minibatch is empty or features and labels disagree on
    /// the row count.
    pub fn train_minibatch(&mut self, features: &Matrix, labels: &Matrix) -> MinibatchStats {
        assert!(features.rows > 0, "minibatch must not be empty");
        assert_eq!(
            features.rows, labels.rows,
            "features and labels must have equal row counts"
        );

        let output = self.network.forward(features);
        let loss = self.loss.loss(&output, labels);
        let error = classification_error(&output, labels);

        // Initial delta: ∂L/∂a of the output layer, already averaged over
        // the minibatch by the loss derivative.
        let mut delta = self.loss.derivative(&output, labels);

        for i in (0..self.network.layers.len()).rev() {
            let inputs = if i == 0 {
                features.clone()
            } else {
                self.network.layers[i - 1].activations().clone()
            };

            // delta_prev is computed against the pre-update weights.
            let (w_grad, b_grad, delta_prev) = self.network.layers[i].backward(&delta, &inputs);
            self.optimizer.step(&mut self.network.layers[i], &w_grad, &b_grad);
            delta = delta_prev;
        }

        let stats = MinibatchStats {
            index: self.minibatches_trained,
            loss,
            error,
        };
        self.minibatches_trained += 1;
        self.last_loss = loss;
        self.last_error = error;
        stats
    }

    /// Evaluates a minibatch without updating parameters. Returns the
    /// classification error as a fraction in [0, 1].
    pub fn test_minibatch(&mut self, features: &Matrix, labels: &Matrix) -> f64 {
        assert_eq!(
            features.rows, labels.rows,
            "features and labels must have equal row counts"
        );
        let output = self.network.forward(features);
        classification_error(&output, labels)
    }

    pub fn minibatches_trained(&self) -> usize {
        self.minibatches_trained
    }

    /// Mean loss of the most recently trained minibatch.
    pub fn previous_minibatch_loss_average(&self) -> f64 {
        self.last_loss
    }

    /// Classification error of the most recently trained minibatch.
    pub fn previous_minibatch_error_average(&self) -> f64 {
        self.last_error
    }
}
