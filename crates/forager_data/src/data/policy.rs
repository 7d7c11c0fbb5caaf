use serde::{Deserialize, Serialize};

/// A single fully-connected linear layer.
///
/// Weights are stored row-major: `weights[i * outputs + o]` connects input
/// `i` to output `o`. The matrix is fixed when the agent is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Length of the sensory vector.
    pub inputs: usize,
    /// Number of raw outputs (action scores followed by turn and intensity).
    pub outputs: usize,
    /// Flattened `inputs × outputs` weight matrix.
    pub weights: Vec<f32>,
}
