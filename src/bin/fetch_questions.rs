// Saves every page of the Stack Exchange `/questions` endpoint for the given
// tags and date range under -dir, one directory per tag.
//
// Pass a stackapps key with -key or STACK_KEY for increased quota.

use std::process::ExitCode;

use question_sentiment::{config, fetch};

fn main() -> ExitCode {
  // arguments
  let config = match config::parse_fetch_config(std::env::args_os()) {
    Ok(config) => config,
    Err(err) => err.exit(),
  };
  // logger
  question_sentiment::init_logging();
  // runtime
  let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
    Ok(rt) => rt,
    Err(err) => {
      eprintln!("Error: failed to build runtime: {}", err);
      return ExitCode::FAILURE;
    }
  };
  // run
  let result = rt.block_on(fetch::fetch_tags(
    &config.endpoint,
    &config.dir,
    &config.tags,
    config.fromdate,
    config.todate,
    config.key.as_deref(),
  ));
  if let Err(err) = result {
    eprintln!("Error: {}", err);
    return ExitCode::FAILURE;
  }
  return ExitCode::SUCCESS;
}
