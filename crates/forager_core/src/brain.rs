//! Fixed linear decision policy.
//!
//! One fully-connected layer followed by `tanh`. Weights are drawn once when
//! an agent is created and are never updated afterwards.

use crate::error::{Result, SimError};
use forager_data::Action;
pub use forager_data::Policy;
use rand::Rng;

const INPUT_LABELS: [&str; 15] = [
    "Health",
    "Energy",
    "Age",
    "PosX",
    "PosY",
    "HeadCos",
    "HeadSin",
    "FoodDist",
    "FoodDX",
    "FoodDY",
    "Density",
    "AgentDist",
    "AgentDX",
    "AgentDY",
    "Bias",
];

const OUTPUT_LABELS: [&str; 7] = [
    "Move", "Idle", "Flee", "Mate", "Attack", "Turn", "Intensity",
];

pub const POLICY_INPUTS: usize = INPUT_LABELS.len();
pub const POLICY_OUTPUTS: usize = OUTPUT_LABELS.len();
const TURN_OUTPUT: usize = Action::COUNT;
const INTENSITY_OUTPUT: usize = Action::COUNT + 1;

/// Outcome of one decision: the chosen action plus movement controls in (-1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub turn: f32,
    pub intensity: f32,
}

pub trait PolicyLogic: Sized {
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self;
    fn from_weights(inputs: usize, outputs: usize, weights: Vec<f32>) -> Result<Self>;
    /// Raw `tanh` outputs for a full-length input vector.
    fn forward(&self, inputs: &[f32]) -> Result<[f32; POLICY_OUTPUTS]>;
    /// Arg-max action (lowest index wins ties) plus turn and intensity.
    fn decide(&self, inputs: &[f32]) -> Result<Decision>;
}

impl PolicyLogic for Policy {
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self {
        let weights = (0..POLICY_INPUTS * POLICY_OUTPUTS)
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect();
        Self {
            inputs: POLICY_INPUTS,
            outputs: POLICY_OUTPUTS,
            weights,
        }
    }

    fn from_weights(inputs: usize, outputs: usize, weights: Vec<f32>) -> Result<Self> {
        if outputs < POLICY_OUTPUTS {
            return Err(SimError::WeightShape {
                expected: inputs * POLICY_OUTPUTS,
                actual: weights.len(),
            });
        }
        if weights.len() != inputs * outputs {
            return Err(SimError::WeightShape {
                expected: inputs * outputs,
                actual: weights.len(),
            });
        }
        Ok(Self {
            inputs,
            outputs,
            weights,
        })
    }

    fn forward(&self, inputs: &[f32]) -> Result<[f32; POLICY_OUTPUTS]> {
        if inputs.len() != self.inputs {
            return Err(SimError::InputLength {
                expected: self.inputs,
                actual: inputs.len(),
            });
        }

        let mut outputs = [0.0f32; POLICY_OUTPUTS];
        for (o, output) in outputs.iter_mut().enumerate() {
            let sum: f32 = inputs
                .iter()
                .enumerate()
                .map(|(i, value)| value * self.weights[i * self.outputs + o])
                .sum();
            *output = sum.tanh();
        }
        Ok(outputs)
    }

    fn decide(&self, inputs: &[f32]) -> Result<Decision> {
        let outputs = self.forward(inputs)?;

        let mut best = 0;
        for idx in 1..Action::COUNT {
            if outputs[idx] > outputs[best] {
                best = idx;
            }
        }

        Ok(Decision {
            action: Action::ALL[best],
            turn: outputs[TURN_OUTPUT],
            intensity: outputs[INTENSITY_OUTPUT],
        })
    }
}

#[must_use]
pub fn input_label(idx: usize) -> Option<&'static str> {
    INPUT_LABELS.get(idx).copied()
}

#[must_use]
pub fn output_label(idx: usize) -> Option<&'static str> {
    OUTPUT_LABELS.get(idx).copied()
}
