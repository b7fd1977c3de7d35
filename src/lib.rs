pub mod math;
pub mod rng;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod metrics;
pub mod data;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::Activation;
pub use layers::dense::Dense;
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::{CrossEntropyLoss, LossType, MseLoss};
pub use data::synthetic::SyntheticClassSource;
pub use optim::sgd::Sgd;
pub use train::{MinibatchStats, TrainConfig, Trainer, TrainingSummary};
