use crate::data::synthetic::SyntheticClassSource;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::Trainer;

/// Outcome of a completed training session.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    /// Number of minibatches the optimizer stepped through.
    pub minibatches_trained: usize,
    /// Mean loss of the last trained minibatch.
    pub final_train_loss: f64,
    /// Classification error on one held-out minibatch drawn after training.
    pub test_error: f64,
}

/// Trains `network` on freshly drawn synthetic minibatches and evaluates it
/// on one held-out minibatch.
///
/// Every optimizer step consumes a brand-new minibatch from `source` rather
/// than sweeping a fixed dataset, so `config.num_minibatches()` alone
/// determines how much data the session sees. When `config.progress_every`
/// is nonzero, a progress line is printed every that many minibatches.
///
/// # Panics
/// Panics if `minibatch_size` is 0 or the configuration yields no
/// minibatches to train on.
pub fn run(
    network: &mut Network,
    source: &mut SyntheticClassSource,
    optimizer: Sgd,
    config: &TrainConfig,
) -> TrainingSummary {
    assert!(config.minibatch_size > 0, "minibatch_size must be at least 1");
    let num_minibatches = config.num_minibatches();
    assert!(num_minibatches > 0, "configuration yields zero minibatches");

    let mut trainer = Trainer::new(network, config.loss, optimizer);

    for i in 0..num_minibatches {
        let (features, labels) = source.minibatch(config.minibatch_size);
        let stats = trainer.train_minibatch(&features, &labels);

        if config.progress_every > 0 && i % config.progress_every == 0 {
            println!(
                "Minibatch {:4}: loss = {:.6}, error = {:5.2}%",
                i,
                stats.loss,
                stats.error * 100.0
            );
        }
    }

    let (test_features, test_labels) = source.minibatch(config.minibatch_size);
    let test_error = trainer.test_minibatch(&test_features, &test_labels);

    TrainingSummary {
        minibatches_trained: trainer.minibatches_trained(),
        final_train_loss: trainer.previous_minibatch_loss_average(),
        test_error,
    }
}
