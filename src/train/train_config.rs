use crate::loss::loss_type::LossType;

/// Hyperparameters for a training session.
///
/// # Fields
/// - `minibatch_size`    — samples drawn per optimizer step
/// - `samples_per_sweep` — nominal size of one pass over the data; with a
///                         synthetic source this only sets the step count
/// - `sweeps`            — number of nominal passes to train for
/// - `loss`              — which loss the trainer optimizes
/// - `progress_every`    — print a progress line every N minibatches;
///                         0 disables output entirely
pub struct TrainConfig {
    pub minibatch_size: usize,
    pub samples_per_sweep: usize,
    pub sweeps: usize,
    pub loss: LossType,
    pub progress_every: usize,
}

impl TrainConfig {
    /// Total number of optimizer steps for this configuration.
    pub fn num_minibatches(&self) -> usize {
        self.samples_per_sweep * self.sweeps / self.minibatch_size
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            minibatch_size: 25,
            samples_per_sweep: 10_000,
            sweeps: 2,
            loss: LossType::CrossEntropy,
            progress_every: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_trains_800_minibatches() {
        assert_eq!(TrainConfig::default().num_minibatches(), 800);
    }
}
