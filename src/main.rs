use std::io;
use std::process;

use clap::Parser;
use env_logger::Env;

use textlist::args::Cli;
use textlist::{AppError, Config, Result, Session};

fn main() {
  let cli = Cli::parse();

  if let Err(e) = run(cli.config()) {
    eprintln!("Error: {}", e);
    process::exit(1);
  }
}

fn run(config: Config) -> Result<()> {
  env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter()))
    .try_init()
    .map_err(|e| AppError::Logger(e.to_string()))?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  Session::new(stdin.lock(), stdout.lock(), config).run()
}
