//! Bounded-length text values.
//!
//! Every item stored in a list is a `BoundedText`: at most `MAX_TEXT_LEN`
//! characters, no line terminators. Raw input is turned into one at the
//! boundary, under an `Oversize` policy.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::Deref;

use crate::config::{Oversize, MAX_TEXT_LEN};
use crate::error::TextError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedText(String);

impl BoundedText {
  /// Builds a `BoundedText` from one line of input. A trailing newline is
  /// stripped before the length is checked.
  pub fn new(line: &str, oversize: Oversize) -> Result<Self, TextError> {
    let line = strip_newline(line);
    let len = line.chars().count();

    if len <= MAX_TEXT_LEN {
      return Ok(BoundedText(line.to_string()));
    }

    match oversize {
      Oversize::Truncate => {
        let end = line.char_indices()
          .nth(MAX_TEXT_LEN)
          .map_or(line.len(), |(i, _)| i);
        Ok(BoundedText(line[..end].to_string()))
      }
      Oversize::Reject => Err(TextError::TooLong {
        len: len,
        max: MAX_TEXT_LEN,
      }),
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Copies the text into freshly allocated storage, reporting allocation
  /// failure instead of aborting.
  pub fn try_copy(&self) -> Result<Self, TryReserveError> {
    let mut s = String::new();
    s.try_reserve_exact(self.0.len())?;
    s.push_str(&self.0);
    Ok(BoundedText(s))
  }
}

fn strip_newline(line: &str) -> &str {
  let line = line.strip_suffix('\n').unwrap_or(line);
  line.strip_suffix('\r').unwrap_or(line)
}

impl Deref for BoundedText {
  type Target = str;

  fn deref(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for BoundedText {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl PartialEq<str> for BoundedText {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl fmt::Display for BoundedText {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}
