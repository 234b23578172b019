use microneuron::{ step, Config, Neuron, Sample, Trace, Trainer };

#[test]
fn hundred_steps_from_reference_start() {
  let sample = Sample::new(3.0, 6.0);
  let mut neuron = Neuron::new(0.497_f64, -0.138);
  let mut trace = Trace::new();
  for _ in 0..100 {
    trace.push(neuron.step(&sample, 0.01).loss);
  }

  assert!((trace.first().unwrap() - 21.595).abs() < 1e-3);
  assert!(trace.last().unwrap() < 1e-15);

  // Error shrinks by 1 - 2 * lr * (x^2 + 1) = 0.8 every step,
  // and weight moves three times as far as bias.
  assert!((neuron.forward(3.0) - 6.0).abs() < 1e-8);
  assert!((neuron.weight - 1.8911).abs() < 1e-3);
  assert!((neuron.bias - 0.3267).abs() < 1e-3);
}

#[test]
fn free_function_loop_matches_trainer() {
  let mut trainer = Trainer::new(Config::default());
  let start = *trainer.neuron();
  let trace = trainer.train();

  let (mut w, mut b) = (start.weight, start.bias);
  for expected in trace.iter() {
    let (nw, nb, loss) = step(w, b, 3.0, 6.0, 0.01);
    assert_eq!(loss, expected);
    w = nw;
    b = nb;
  }
  assert_eq!((w, b), (trainer.neuron().weight, trainer.neuron().bias));
}

#[test]
fn reseeded_runs_repeat() {
  let config = Config::from_json(r#"{ "seed": 1234, "iterations": 30 }"#).unwrap();
  let run = |config: Config| {
    let mut trainer = Trainer::new(config);
    let walk = trainer.walkthrough();
    trainer.reset();
    (walk, trainer.train())
  };
  let (walk_a, trace_a) = run(config.clone());
  let (walk_b, trace_b) = run(config);
  assert_eq!(walk_a, walk_b);
  assert_eq!(trace_a, trace_b);
  assert_eq!(trace_a.len(), 30);
}
