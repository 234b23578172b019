use log::{ debug, trace };
use rand::{ SeedableRng, rngs::StdRng };

use crate::{
  config::Config,
  neuron::{ Neuron, Sample, StepReport },
  optimize::{ Optimizer, SGD },
  trace::Trace,
};


/// Owns the parameters of a [Neuron] along with the seeded random
/// source used to initialize them, and runs training on the
/// configured sample.
///
/// Every call to [reset](Trainer::reset) draws fresh parameters
/// from the same random source, so a sequence of runs built from
/// the same [Config] is reproducible as a whole.

#[derive(Debug)]
pub struct Trainer {
  config: Config,
  sample: Sample<f64>,
  rng: StdRng,
  optimizer: Optimizer<f64, SGD>,
  neuron: Neuron<f64>,
}

impl Trainer {
  pub fn new(config: Config) -> Self {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let neuron = Neuron::init(&mut rng, config.init_scale);
    debug!("initialized weight={} bias={} seed={}", neuron.weight, neuron.bias, config.seed);
    Self {
      sample: config.sample(),
      optimizer: Optimizer::new(config.learning_rate, SGD),
      rng,
      neuron,
      config,
    }
  }

  /// Replace the parameters with a new, independent draw.

  pub fn reset(&mut self) {
    self.neuron = Neuron::init(&mut self.rng, self.config.init_scale);
    self.optimizer = Optimizer::new(self.config.learning_rate, SGD);
    debug!("reset weight={} bias={}", self.neuron.weight, self.neuron.bias);
  }

  /// Perform a single update and report every intermediate value.

  pub fn walkthrough(&mut self) -> StepReport<f64> {
    self.optimizer.minimize(&mut self.neuron, &self.sample)
  }

  /// Run the configured number of iterations, recording the loss
  /// before each update.

  pub fn train(&mut self) -> Trace<f64> {
    let mut losses = Trace::new();
    for i in 0..self.config.iterations {
      let report = self.optimizer.minimize(&mut self.neuron, &self.sample);
      trace!("iteration={} loss={} weight={} bias={}", i, report.loss, report.after.weight, report.after.bias);
      losses.push(report.loss);
    }
    debug!("trained {} iterations, steps since reset: {}", self.config.iterations, self.optimizer.steps());
    losses
  }

  pub fn neuron(&self) -> &Neuron<f64> {
    &self.neuron
  }

  pub fn sample(&self) -> &Sample<f64> {
    &self.sample
  }

  pub fn config(&self) -> &Config {
    &self.config
  }
}
