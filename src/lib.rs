//! Gradient descent on a single linear neuron.
//!
//! A [Neuron] holds one weight and one bias and predicts `weight * x + bias`.
//! Training on a single [Sample] minimizes the squared error with closed-form
//! gradients and a fixed learning rate, recording every loss in a [Trace].
//!
//! # Examples
//!
//! One step, on raw numbers:
//! ```
//! let (weight, bias, loss) = microneuron::step(0.5, 0.0, 3.0, 6.0, 0.01);
//! assert_eq!(loss, 20.25);
//! assert!(weight > 0.5 && bias > 0.0);
//! ```
//!
//! A full, reproducible run learning `f(x) = 2x` from the sample `(3, 6)`:
//! ```
//! use microneuron::{ Config, Trainer };
//!
//! let mut trainer = Trainer::new(Config::default());
//! let trace = trainer.train();
//! assert!(trace.last().unwrap() < trace.first().unwrap());
//!
//! // A single sample leaves the weight/bias split open,
//! // only the prediction is pinned down.
//! let neuron = trainer.neuron();
//! assert!((neuron.forward(3.0) - 6.0).abs() < 1e-6);
//! ```

mod internal;
mod error;
mod config;
mod neuron;
mod trace;
mod trainer;

pub mod scalar;
pub mod optimize;

pub use error::{ Error, Result };
pub use config::Config;
pub use neuron::{ Neuron, Sample, Gradients, StepReport, step };
pub use trace::Trace;
pub use trainer::Trainer;
