use clap::{ArgAction, Parser};

use crate::config::{Config, Oversize};

#[derive(Parser, Debug)]
#[command(name = "textlist", version)]
#[command(about = "Manage short texts in a fixed-capacity list or a linked list", long_about = None)]
pub struct Cli {
  /// What to do with text longer than the per-item limit
  #[arg(long, value_enum, default_value_t = Oversize::Truncate)]
  pub oversize: Oversize,

  /// Verbose logging on stderr (repeat for more)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

impl Cli {
  pub fn config(&self) -> Config {
    Config::new(self.oversize, self.verbose)
  }
}
