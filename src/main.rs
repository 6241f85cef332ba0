// Reads pages saved by fetch-questions from -dir and prints, per tag, the
// share of negative, closed and closed-and-negative questions.
//
// To get a month-by-month breakdown from start date to end date, use the
// -bymonth flag together with -fromdate and -todate.

use std::process::ExitCode;

use question_sentiment::{config, runner};

fn main() -> ExitCode {
  // arguments
  let config = match config::parse_analyze_config(std::env::args_os()) {
    Ok(config) => config,
    Err(err) => err.exit(),
  };
  // logger
  question_sentiment::init_logging();
  // run
  let stdout = std::io::stdout();
  let mut writer = stdout.lock();
  if let Err(err) = runner::run(&config, &mut writer) {
    eprintln!("Error: {}", err);
    return ExitCode::FAILURE;
  }
  return ExitCode::SUCCESS;
}
