use std::fmt;
use std::io;


/// Errors raised while loading or storing configurations and traces.
///
/// Training itself never fails, numeric trouble shows up as
/// infinite or NaN values instead.

#[derive(Debug)]
pub enum Error {
  /// Reading or writing a file failed.
  Io(io::Error),
  /// A configuration file was not valid JSON for [Config](crate::Config).
  Json(serde_json::Error),
  /// A stored trace could not be encoded or decoded.
  Encoding(postcard::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "io error: {e}"),
      Self::Json(e) => write!(f, "invalid config: {e}"),
      Self::Encoding(e) => write!(f, "invalid trace data: {e}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Json(e) => Some(e),
      Self::Encoding(e) => Some(e),
    }
  }
}

impl From<io::Error> for Error {
  fn from(e: io::Error) -> Self {
    Self::Io(e)
  }
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self {
    Self::Json(e)
  }
}

impl From<postcard::Error> for Error {
  fn from(e: postcard::Error) -> Self {
    Self::Encoding(e)
  }
}
