use std::fs;
use std::path::{ Path, PathBuf };

use serde::{ Serialize, Deserialize };

use crate::{
  error::Result,
  neuron::Sample,
};


/// Settings for a training run.
///
/// The defaults reproduce the reference run: learning `f(x) = 2x`
/// from the single sample `(3, 6)` over 100 steps of size 0.01.
/// Fields missing from a JSON file keep their default.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub x: f64,
  pub target: f64,
  pub learning_rate: f64,
  pub iterations: usize,
  /// Seed for parameter initialization.
  pub seed: u64,
  /// Standard deviation of the initial weight and bias.
  pub init_scale: f64,
  /// Where to store the loss trace after training, if anywhere.
  pub trace_path: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      x: 3.0,
      target: 6.0,
      learning_rate: 0.01,
      iterations: 100,
      seed: 42,
      init_scale: 1.0,
      trace_path: None,
    }
  }
}

impl Config {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let content = fs::read_to_string(path)?;
    Self::from_json(&content)
  }

  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn sample(&self) -> Sample<f64> {
    Sample::new(self.x, self.target)
  }
}
