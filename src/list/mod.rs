//! Text list implementations
//!
//! This module provides two lists of short text: the array-backed
//! `FixedList`, which holds at most `CAPACITY` items in insertion order, and
//! the `LinkedList`, a singly linked chain of boxed nodes that grows without
//! bound and keeps the newest item at the front. The `LinkedList` follows
//! [this blog post](http://cglab.ca/~abeinges/blah/too-many-lists/book/).

mod fixed;
mod linked;

pub use self::fixed::FixedList;
pub use self::linked::{LinkedList, Iter};

use crate::config::CAPACITY;
use crate::error::ListError;
use crate::text::BoundedText;

/// The `TextList` abstract data type.
pub trait TextList {
  /// Human-readable name used in messages and logs.
  const NAME: &'static str;

  /// Creates a new, empty list.
  fn new() -> Self;

  /// Stores a copy of `text` in the list.
  fn insert(&mut self, text: &BoundedText) -> Result<(), ListError>;

  /// Removes the first item equal to `text`.
  fn remove(&mut self, text: &str) -> Result<(), ListError>;

  /// Returns the items in listing order.
  fn items(&self) -> Vec<&str>;

  /// Predicate that tests if the list is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of items in the list.
  fn size(&self) -> usize;

  /// Tests if some item equals `text`.
  fn contains(&self, text: &str) -> bool {
    self.items().iter().any(|&item| item == text)
  }

  /// Formats the items as `["a" "b"]`, or returns `None` if the list is
  /// empty.
  fn render(&self) -> Option<String> {
    if self.is_empty() {
      return None;
    }

    let quoted: Vec<String> = self.items()
      .iter()
      .map(|item| format!("\"{}\"", item))
      .collect();
    Some(format!("[{}]", quoted.join(" ")))
  }
}


#[cfg(test)]
fn text(s: &str) -> BoundedText {
  BoundedText::new(s, crate::config::Oversize::Reject).unwrap()
}
