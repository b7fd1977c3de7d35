use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::Activation;
use crate::layers::dense::Dense;
use crate::loss::loss_type::LossType;
use crate::network::network::Network;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       — number of units in this layer
/// - `input_size` — number of units feeding into this layer (the previous
///                  layer's size, or the raw input dimension for the first)
/// - `activation` — activation applied after the linear transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: Activation,
}

/// A fully serializable description of a network architecture plus the loss
/// it trains against.
///
/// A `NetworkSpec` can be saved and loaded independently of trained weights;
/// `build()` turns it into a fresh `Network` using the supplied generator,
/// so the same spec and seed always produce the same initial parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Loss function to pair with this network during training.
    pub loss: LossType,
}

impl NetworkSpec {
    /// Spec for a fully connected classifier: `num_hidden_layers` hidden
    /// layers of `hidden_dim` units, then a softmax output over
    /// `num_classes`, trained with cross-entropy.
    pub fn classifier(
        name: &str,
        input_dim: usize,
        num_classes: usize,
        hidden_dim: usize,
        num_hidden_layers: usize,
        hidden_activation: Activation,
    ) -> NetworkSpec {
        assert!(num_hidden_layers > 0, "classifier needs at least one hidden layer");
        let mut layers = Vec::with_capacity(num_hidden_layers + 1);
        let mut in_size = input_dim;
        for _ in 0..num_hidden_layers {
            layers.push(LayerSpec {
                size: hidden_dim,
                input_size: in_size,
                activation: hidden_activation,
            });
            in_size = hidden_dim;
        }
        layers.push(LayerSpec {
            size: num_classes,
            input_size: in_size,
            activation: Activation::Softmax,
        });
        NetworkSpec {
            name: name.to_owned(),
            layers,
            loss: LossType::CrossEntropy,
        }
    }

    /// Instantiates a network with fresh parameters drawn from `rng`.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Network {
        let layers = self
            .layers
            .iter()
            .map(|spec| Dense::new(spec.input_size, spec.size, spec.activation, rng))
            .collect();
        Network::new(layers)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
