use cobalt_nn::{
    rng, Activation, LossType, Network, Sgd, SyntheticClassSource, TrainConfig, TrainingSummary,
};

fn train_with_seed(seed: u64, lr: f64, config: &TrainConfig) -> TrainingSummary {
    let mut seed_rng = rng::from_seed(seed);
    let mut network = Network::classifier(2, 2, 50, 2, Activation::Sigmoid, &mut seed_rng);
    let mut source = SyntheticClassSource::new(2, 2, seed_rng);
    cobalt_nn::train::run(&mut network, &mut source, Sgd::new(lr), config)
}

fn short_config() -> TrainConfig {
    TrainConfig {
        minibatch_size: 25,
        samples_per_sweep: 6_000,
        sweeps: 1,
        loss: LossType::CrossEntropy,
        progress_every: 0,
    }
}

#[test]
fn classifier_learns_separable_data() {
    let summary = train_with_seed(0, 0.1, &short_config());
    assert_eq!(summary.minibatches_trained, 240);
    // Chance level is 0.5; the classes are separable enough that the net
    // must end well below it.
    assert!(
        summary.test_error < 0.35,
        "test error too high: {}",
        summary.test_error
    );
    // Untrained cross-entropy on two classes starts near ln(2) ≈ 0.693.
    assert!(
        summary.final_train_loss < 0.6,
        "final train loss too high: {}",
        summary.final_train_loss
    );
}

#[test]
fn same_seed_reproduces_the_run_exactly() {
    let a = train_with_seed(0, 0.02, &short_config());
    let b = train_with_seed(0, 0.02, &short_config());
    assert_eq!(a.test_error, b.test_error);
    assert_eq!(a.final_train_loss, b.final_train_loss);
}

#[test]
fn different_seeds_draw_different_data() {
    let mut a = SyntheticClassSource::new(2, 2, rng::from_seed(0));
    let mut b = SyntheticClassSource::new(2, 2, rng::from_seed(1));
    let (xa, _) = a.minibatch(25);
    let (xb, _) = b.minibatch(25);
    assert_ne!(xa, xb);
}

#[test]
fn saved_network_reproduces_outputs_after_reload() {
    let mut seed_rng = rng::from_seed(42);
    let mut network = Network::classifier(2, 2, 8, 1, Activation::Sigmoid, &mut seed_rng);
    let mut source = SyntheticClassSource::new(2, 2, seed_rng);

    let (features, labels) = source.minibatch(25);
    let mut trainer =
        cobalt_nn::Trainer::new(&mut network, LossType::CrossEntropy, Sgd::new(0.1));
    for _ in 0..20 {
        trainer.train_minibatch(&features, &labels);
    }

    let path = std::env::temp_dir().join(format!("cobalt-nn-test-{}.json", std::process::id()));
    let path = path.to_str().expect("temp path is valid utf-8");

    network.save_json(path).expect("save failed");
    let mut reloaded = Network::load_json(path).expect("load failed");
    let _ = std::fs::remove_file(path);

    let original_out = network.forward(&features);
    let reloaded_out = reloaded.forward(&features);
    assert_eq!(original_out, reloaded_out);

    // The reloaded model keeps its evaluation behavior too.
    let err_original = cobalt_nn::metrics::classification_error(&original_out, &labels);
    let err_reloaded = cobalt_nn::metrics::classification_error(&reloaded_out, &labels);
    assert_eq!(err_original, err_reloaded);
}
