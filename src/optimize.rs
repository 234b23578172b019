use crate::{
  scalar::Real,
  neuron::{ Neuron, Sample, Gradients, StepReport },
};


/// An optimization strategy to be used with [Optimizer].
///
/// Turns the current gradients into the change that gets
/// added to the parameters.

pub trait Strategy<R: Real> {
  fn update(&mut self, grads: &Gradients<R>, rate: R, step: usize) -> Gradients<R>;
}


/// Drives a [Neuron] towards lower loss using a given [Strategy].

#[derive(Debug)]
pub struct Optimizer<R: Real, S: Strategy<R>> {
  strategy: S,
  pub learning_rate: R,
  step: usize,
}

impl<R: Real, S: Strategy<R>> Optimizer<R, S> {
  pub fn new(learning_rate: R, strategy: S) -> Self {
    Self { strategy, learning_rate, step: 1 }
  }

  pub fn minimize(&mut self, neuron: &mut Neuron<R>, sample: &Sample<R>) -> StepReport<R> {
    let rate = self.learning_rate;
    let step = self.step;
    let strategy = &mut self.strategy;
    let report = neuron.step_with(sample, |grads| strategy.update(grads, rate, step) );
    self.step += 1;
    report
  }

  /// Number of updates performed so far.

  pub fn steps(&self) -> usize {
    self.step - 1
  }
}


/// Gradient Descent with a fixed step size

#[derive(Debug, Clone, Default)]
pub struct SGD;

impl<R: Real> Strategy<R> for SGD {
  fn update(&mut self, grads: &Gradients<R>, rate: R, _step: usize) -> Gradients<R> {
    grads.scale(-rate)
  }
}
