//! Limits and runtime settings.

use clap::ValueEnum;

/// Maximum number of items a `FixedList` can hold.
pub const CAPACITY: usize = 10;

/// Maximum number of characters in one list item.
pub const MAX_TEXT_LEN: usize = 49;

/// Longest input line kept in memory. Anything past it is skipped.
pub const MAX_LINE_BYTES: usize = 4096;

/// What to do with input longer than `MAX_TEXT_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Oversize {
  /// Keep the first `MAX_TEXT_LEN` characters.
  #[default]
  Truncate,
  /// Refuse the input and perform no operation.
  Reject,
}

/// Settings the driver runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
  pub oversize: Oversize,
  pub verbosity: u8,
}

impl Config {
  pub fn new(oversize: Oversize, verbosity: u8) -> Self {
    Self {
      oversize: oversize,
      verbosity: verbosity,
    }
  }

  /// The `env_logger` filter implied by the verbosity level.
  pub fn log_filter(&self) -> &'static str {
    match self.verbosity {
      0 => "warn",
      1 => "info",
      _ => "debug",
    }
  }
}
