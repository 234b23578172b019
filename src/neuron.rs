use rand::Rng;
use serde::{ Serialize, Deserialize };

use crate::{
  internal::randn,
  scalar::Real,
};


/// The single `(x, target)` example a [Neuron] is trained on.

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample<R: Real> {
  pub x: R,
  pub target: R,
}

impl<R: Real> Sample<R> {
  pub fn new(x: R, target: R) -> Self {
    Self { x, target }
  }
}


/// Partial derivatives of the loss with respect to each parameter.
///
/// Also used to describe a parameter change, see [Neuron::apply].

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradients<R: Real> {
  pub weight: R,
  pub bias: R,
}

impl<R: Real> Gradients<R> {
  pub fn scale(&self, factor: R) -> Self {
    Self {
      weight: self.weight * factor,
      bias: self.bias * factor,
    }
  }
}


/// Everything computed during one training step.
///
/// `loss` is measured before the update, so it reflects the
/// error that the update is correcting.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport<R: Real> {
  pub before: Neuron<R>,
  pub output: R,
  pub loss: R,
  pub error: R,
  pub grads: Gradients<R>,
  pub after: Neuron<R>,
}


/// Linear unit with one weight and one bias, computing `weight * x + bias`.

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neuron<R: Real> {
  pub weight: R,
  pub bias: R,
}

impl<R: Real> Neuron<R> {
  pub fn new(weight: R, bias: R) -> Self {
    Self { weight, bias }
  }

  /// Draw weight and bias from a normal distribution with
  /// standard deviation `scale`.

  pub fn init(rng: &mut impl Rng, scale: R) -> Self {
    let (weight, bias): (R, R) = randn(rng);
    Self::new(weight * scale, bias * scale)
  }

  pub fn forward(&self, x: R) -> R {
    self.weight * x + self.bias
  }

  /// Squared error on `sample`. Not averaged, there is only one.

  pub fn loss(&self, sample: &Sample<R>) -> R {
    let error = self.forward(sample.x) - sample.target;
    error * error
  }

  pub fn backward(&self, sample: &Sample<R>) -> Gradients<R> {
    let error = self.forward(sample.x) - sample.target;
    gradients(error, sample.x)
  }

  /// Add `change` to the parameters.

  pub fn apply(&mut self, change: &Gradients<R>) {
    self.weight += change.weight;
    self.bias += change.bias;
  }

  /// Plain gradient descent step with a fixed learning rate.

  pub fn step(&mut self, sample: &Sample<R>, learning_rate: R) -> StepReport<R> {
    self.step_with(sample, |grads| grads.scale(-learning_rate) )
  }

  pub(crate) fn step_with(
    &mut self,
    sample: &Sample<R>,
    update: impl FnOnce(&Gradients<R>) -> Gradients<R>,
  ) -> StepReport<R> {
    let before = *self;
    let output = self.forward(sample.x);
    let error = output - sample.target;
    let loss = error * error;
    let grads = gradients(error, sample.x);
    self.apply(&update(&grads));
    StepReport { before, output, loss, error, grads, after: *self }
  }
}

// d(error^2)/dw = 2 * error * x, d(error^2)/db = 2 * error
fn gradients<R: Real>(error: R, x: R) -> Gradients<R> {
  let two = R::one() + R::one();
  Gradients {
    weight: two * error * x,
    bias: two * error,
  }
}


/// Perform one gradient descent step on raw parameters.
///
/// Returns the updated weight and bias, followed by the loss
/// measured before the update. No input is validated: a zero,
/// negative or oversized learning rate is applied as given and
/// non-finite values propagate like any other float.
///
/// ```
/// let (w, b, loss) = microneuron::step(0.497_f64, -0.138, 3.0, 6.0, 0.01);
/// assert!((w - 0.776).abs() < 1e-3);
/// assert!((b + 0.045).abs() < 1e-3);
/// assert!((loss - 21.595).abs() < 1e-3);
/// ```

pub fn step<R: Real>(weight: R, bias: R, x: R, target: R, learning_rate: R) -> (R, R, R) {
  let mut neuron = Neuron::new(weight, bias);
  let report = neuron.step(&Sample::new(x, target), learning_rate);
  (neuron.weight, neuron.bias, report.loss)
}
