pub mod minibatch_stats;
pub mod session;
pub mod train_config;
pub mod trainer;

pub use minibatch_stats::MinibatchStats;
pub use session::{run, TrainingSummary};
pub use train_config::TrainConfig;
pub use trainer::Trainer;
