use std::io;

use thiserror::Error;

/// Failures of a list operation. None of them modify the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
  #[error("list is full (capacity {capacity})")]
  Full { capacity: usize },

  #[error("text \"{0}\" not found")]
  NotFound(String),

  #[error("could not allocate storage for the text")]
  Alloc,
}

/// Input text that fails validation at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
  #[error("text is {len} characters long, the limit is {max}")]
  TooLong { len: usize, max: usize },
}

/// Unusable menu input. The driver reprompts on these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
  #[error("Invalid input: expected a number.")]
  NotANumber(String),

  #[error("Invalid option!")]
  InvalidOption(i64),
}

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum AppError {
  #[error("IO error: {0}")]
  Io(#[from] io::Error),

  #[error("Logger error: {0}")]
  Logger(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
