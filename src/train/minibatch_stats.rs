use serde::{Deserialize, Serialize};

/// Per-minibatch training statistics returned by `Trainer::train_minibatch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinibatchStats {
    /// 0-based index of the minibatch within the session.
    pub index: usize,
    /// Mean loss over the minibatch.
    pub loss: f64,
    /// Classification error over the minibatch as a fraction in [0, 1].
    pub error: f64,
}
