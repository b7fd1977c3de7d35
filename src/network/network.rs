use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::Activation;
use crate::layers::dense::Dense;
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Dense>,
}

impl Network {
    /// Builds a network from already-constructed layers. Panics if adjacent
    /// layer shapes do not chain.
    pub fn new(layers: Vec<Dense>) -> Network {
        for pair in layers.windows(2) {
            if pair[0].size() != pair[1].input_size() {
                panic!(
                    "layer chain mismatch: {} outputs feeding a layer expecting {}",
                    pair[0].size(),
                    pair[1].input_size()
                );
            }
        }
        Network { layers }
    }

    /// A fully connected classifier: `num_hidden_layers` hidden layers of
    /// `hidden_dim` units with `hidden_activation`, then a softmax output
    /// layer over `num_classes`.
    pub fn classifier<R: Rng>(
        input_dim: usize,
        num_classes: usize,
        hidden_dim: usize,
        num_hidden_layers: usize,
        hidden_activation: Activation,
        rng: &mut R,
    ) -> Network {
        NetworkSpec::classifier(
            "classifier",
            input_dim,
            num_classes,
            hidden_dim,
            num_hidden_layers,
            hidden_activation,
        )
        .build(rng)
    }

    /// Forward pass over a minibatch; each layer caches its activations for
    /// a subsequent backward pass.
    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        let mut current = input.clone();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        current
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
