pub mod analysis;
pub mod config;
pub mod dates;
pub mod errors;
pub mod fetch;
pub mod months;
pub mod report;
pub mod runner;
pub mod snapshots;
pub mod structs;
pub mod tags;
pub mod window;

pub use errors::{Error, Result};
pub use structs::{QuestionItem, Ratios, Reply, TagAnalysisResult, TimeWindow};

/// Logs go to stderr so they never interleave with the report on stdout.
pub fn init_logging() {
  let result = simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Warn).env().init();
  if let Err(err) = result {
    eprintln!("failed to init logger: {}", err);
  }
}
