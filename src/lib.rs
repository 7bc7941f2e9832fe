#[macro_use]
extern crate log;

pub mod args;
pub mod config;
pub mod error;
pub mod list;
pub mod menu;
pub mod text;

#[cfg(test)]
mod testing;

pub use crate::config::{Config, Oversize, CAPACITY, MAX_TEXT_LEN};
pub use crate::error::{AppError, ListError, MenuError, Result, TextError};
pub use crate::list::{FixedList, LinkedList, TextList};
pub use crate::menu::Session;
pub use crate::text::BoundedText;
