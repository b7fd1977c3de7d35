/// Feedforward classifier demo.
///
/// Trains a fully connected classifier (two hidden layers of 50 sigmoid
/// units) on synthetic two-class data with minibatch SGD and cross-entropy,
/// then reports the classification error on one held-out minibatch.
///
/// The run is fully deterministic: every random draw comes from one StdRng
/// seeded by the `SEED` environment variable (default 0).
use cobalt_nn::{rng, Activation, Network, Sgd, SyntheticClassSource, TrainConfig};

fn main() {
    let input_dim = 2;
    let num_classes = 2;
    let num_hidden_layers = 2;
    let hidden_dim = 50;

    let mut seed_rng = rng::from_env();

    let mut network = Network::classifier(
        input_dim,
        num_classes,
        hidden_dim,
        num_hidden_layers,
        Activation::Sigmoid,
        &mut seed_rng,
    );

    // The source consumes the same stream, so one seed fixes the whole run.
    let mut source = SyntheticClassSource::new(input_dim, num_classes, seed_rng);

    let config = TrainConfig::default();
    let summary = cobalt_nn::train::run(&mut network, &mut source, Sgd::new(0.02), &config);

    println!("test: {:.6}", summary.test_error);
}
