use std::fs;
use std::path::Path;

use itertools::{ Itertools, MinMaxResult };
use serde::{ Serialize, Deserialize, de::DeserializeOwned };

use crate::{
  error::Result,
  scalar::Real,
};


/// Loss values recorded during training, one per step.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace<R: Real> {
  losses: Vec<R>,
}

impl<R: Real> Default for Trace<R> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: Real> Trace<R> {
  pub fn new() -> Self {
    Self { losses: vec![] }
  }

  pub fn push(&mut self, loss: R) {
    self.losses.push(loss);
  }

  pub fn len(&self) -> usize {
    self.losses.len()
  }

  pub fn is_empty(&self) -> bool {
    self.losses.is_empty()
  }

  pub fn first(&self) -> Option<R> {
    self.losses.first().copied()
  }

  pub fn last(&self) -> Option<R> {
    self.losses.last().copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = R> + '_ {
    self.losses.iter().copied()
  }

  /// Render loss over iteration index as a text chart.
  ///
  /// Uses at most `width` columns, subsampling longer traces, and
  /// `height` rows plus two lines for the x-axis. Non-finite losses
  /// are drawn on the top row.

  pub fn plot(&self, width: usize, height: usize) -> String {
    if self.is_empty() || width == 0 || height == 0 { return String::new() }

    let values: Vec<f64> = self.iter()
      .map(|loss| loss.to_f64().unwrap_or(f64::NAN) )
      .collect();

    let (lo, hi) = match values.iter().filter(|v| v.is_finite() ).minmax() {
      MinMaxResult::NoElements => (0.0, 0.0),
      MinMaxResult::OneElement(v) => (*v, *v),
      MinMaxResult::MinMax(lo, hi) => (*lo, *hi),
    };

    let columns = width.min(values.len());
    let rows = height - 1;
    let mut grid = vec![vec![' '; columns]; height];
    for col in 0..columns {
      let index = if columns > 1 { col * (values.len() - 1) / (columns - 1) } else { 0 };
      let value = values[index];
      let row = if !value.is_finite() || hi == lo {
        0
      } else {
        ((hi - value) / (hi - lo) * rows as f64).round() as usize
      };
      grid[row][col] = '*';
    }

    let mut lines = grid.into_iter().enumerate().map(|(row, cells)| {
      let label = if rows == 0 { hi } else { hi - (hi - lo) * row as f64 / rows as f64 };
      format!("{:>10.3} |{}", label, cells.into_iter().collect::<String>())
    }).collect::<Vec<_>>();

    lines.push(format!("{:>10} +{}", "", "-".repeat(columns)));
    if columns > 1 {
      lines.push(format!("{:>10}  0{:>w$}", "", values.len() - 1, w = columns - 1));
    } else {
      lines.push(format!("{:>10}  0", ""));
    }
    lines.join("\n")
  }
}

impl<R: Real + Serialize + DeserializeOwned> Trace<R> {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let bytes = fs::read(path)?;
    Ok(postcard::from_bytes(&bytes)?)
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let data: Vec<u8> = postcard::to_allocvec(self)?;
    fs::write(path, data)?;
    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  fn decaying(n: usize) -> Trace<f64> {
    let mut trace = Trace::new();
    for i in 0..n {
      trace.push(20.0 * 0.8f64.powi(i as i32));
    }
    trace
  }

  #[test]
  fn append_only() {
    let trace = decaying(3);
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.first(), Some(20.0));
    assert_eq!(trace.iter().collect::<Vec<_>>(), vec![20.0, 16.0, 20.0 * 0.8f64.powi(2)]);
  }

  #[test]
  fn plot_layout() {
    let chart = decaying(100).plot(40, 10);
    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].starts_with("    20.000 |*"));
    assert!(lines[9].ends_with('*'));
    assert_eq!(lines.iter().map(|l| l.matches('*').count() ).sum::<usize>(), 40);
    assert!(lines[11].ends_with("99"));
  }

  #[test]
  fn plot_short_and_flat() {
    let mut trace = Trace::new();
    trace.push(1.0);
    trace.push(1.0);
    let chart = trace.plot(40, 5);
    assert_eq!(chart.lines().next(), Some("     1.000 |**"));
    assert_eq!(Trace::<f64>::new().plot(40, 5), "");
  }

  #[test]
  fn plot_non_finite() {
    let mut trace = Trace::new();
    trace.push(1.0);
    trace.push(f64::INFINITY);
    trace.push(0.0);
    let lines: Vec<String> = trace.plot(3, 3).lines().map(String::from).collect();
    assert!(lines[0].ends_with("** "));
    assert!(lines[2].ends_with("  *"));
  }

  #[test]
  fn save_and_load() {
    let path = std::env::temp_dir().join(format!("microneuron-trace-{}.bin", std::process::id()));
    let trace = decaying(25);
    trace.save(&path).unwrap();
    let loaded = Trace::<f64>::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, trace);
  }

  #[test]
  fn load_garbage() {
    let path = std::env::temp_dir().join(format!("microneuron-garbage-{}.bin", std::process::id()));
    fs::write(&path, [0xff]).unwrap();
    let result = Trace::<f64>::load(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(Error::Encoding(_))));
  }
}
