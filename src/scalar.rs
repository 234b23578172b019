use rand::distributions::uniform::SampleUniform;
use num_traits::{ Num, NumCast, NumAssignOps };


/// All types that may be stored in a [Neuron](crate::Neuron).
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Inner: PartialEq + Clone + Copy + Send + Sync + std::fmt::Debug {}
impl<T: PartialEq + Clone + Copy + Send + Sync + std::fmt::Debug> Inner for T {}


/// All numeric types.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Numeric: Inner + PartialOrd + Num + NumCast + NumAssignOps {}
impl<T: Inner + PartialOrd + Num + NumCast + NumAssignOps> Numeric for T {}


/// All continuous numeric types, in practice `f32` and `f64`.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Real: Numeric + num_traits::real::Real + SampleUniform {}
impl<T: Numeric + num_traits::real::Real + SampleUniform> Real for T {}
