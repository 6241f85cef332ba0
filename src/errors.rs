use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Config(String),
  #[error("{}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
  #[error("failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },
  #[error("creation_date {0} is out of range")]
  InvalidTimestamp(i64),
  #[error("http request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("invalid response status {status} for {url}")]
  HttpStatus { url: String, status: u16 },
  #[error("failed to render report: {0}")]
  Report(#[from] csv::Error),
  #[error("failed to write report: {0}")]
  Output(#[from] std::io::Error),
}

impl Error {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    return Error::Io { path: path.into(), source };
  }

  pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Error {
    return Error::Parse { path: path.into(), source };
  }
}

pub type Result<T> = std::result::Result<T, Error>;
