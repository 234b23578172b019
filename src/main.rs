use std::env;
use std::process;

use log::info;

use microneuron::{ Config, Result, Trainer };

fn main() {
  env_logger::init();

  let config = match env::args().nth(1) {
    Some(path) => Config::load(&path),
    None => Ok(Config::default()),
  };

  if let Err(e) = config.and_then(run) {
    eprintln!("error: {e}");
    process::exit(1);
  }
}

fn run(config: Config) -> Result<()> {
  info!("running with {config:?}");
  let mut trainer = Trainer::new(config);

  // Single step, every value along the way
  let report = trainer.walkthrough();
  println!("Initial weight: {:.3}, bias: {:.3}", report.before.weight, report.before.bias);
  println!("Prediction: {:.3}", report.output);
  println!("Loss: {:.3}", report.loss);
  println!("Error: {:.3}", report.error);
  println!("Gradient wrt weight: {:.3}", report.grads.weight);
  println!("Gradient wrt bias: {:.3}", report.grads.bias);
  println!("Updated weight: {:.3}, bias: {:.3}", report.after.weight, report.after.bias);
  println!("New loss: {:.3}", trainer.neuron().loss(trainer.sample()));
  println!();

  // Independent multi-step run from a fresh initialization
  trainer.reset();
  let start = *trainer.neuron();
  println!("Training from weight: {:.3}, bias: {:.3}", start.weight, start.bias);
  let trace = trainer.train();
  for (i, loss) in trace.iter().enumerate().step_by(10) {
    println!("Iteration {i}: loss = {loss:.4}");
  }

  let neuron = trainer.neuron();
  let sample = trainer.sample();
  println!("Final weight: {:.3}, bias: {:.3}", neuron.weight, neuron.bias);
  println!("Prediction for x = {}: {:.3} (target {})", sample.x, neuron.forward(sample.x), sample.target);
  println!();
  println!("Loss over iterations");
  println!("{}", trace.plot(60, 15));

  if let Some(path) = &trainer.config().trace_path {
    trace.save(path)?;
    info!("trace saved to {}", path.display());
  }

  Ok(())
}
