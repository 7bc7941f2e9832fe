//! The console driver.
//!
//! Menu input is parsed into `MainCommand` / `ListCommand` values first and
//! only then acted on, so bad input is an ordinary `MenuError` and the
//! session just prints it and shows the menu again. End of input counts as
//! choosing `0` at every level.

use std::borrow::Cow;
use std::io::{BufRead, Read, Write};

use crate::config::{Config, MAX_LINE_BYTES};
use crate::error::{MenuError, Result, TextError};
use crate::list::{FixedList, LinkedList, TextList};
use crate::text::BoundedText;

/// A choice on the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
  Fixed,
  Linked,
  Exit,
}

/// A choice on a list's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
  Insert,
  Remove,
  List,
  Back,
}

impl TryFrom<i64> for MainCommand {
  type Error = MenuError;

  fn try_from(n: i64) -> std::result::Result<Self, MenuError> {
    match n {
      1 => Ok(MainCommand::Fixed),
      2 => Ok(MainCommand::Linked),
      0 => Ok(MainCommand::Exit),
      _ => Err(MenuError::InvalidOption(n)),
    }
  }
}

impl TryFrom<i64> for ListCommand {
  type Error = MenuError;

  fn try_from(n: i64) -> std::result::Result<Self, MenuError> {
    match n {
      1 => Ok(ListCommand::Insert),
      2 => Ok(ListCommand::Remove),
      3 => Ok(ListCommand::List),
      0 => Ok(ListCommand::Back),
      _ => Err(MenuError::InvalidOption(n)),
    }
  }
}

/// Parses one line of menu input into a command.
pub fn parse_command<C>(line: &str) -> std::result::Result<C, MenuError>
where C: TryFrom<i64, Error = MenuError> {
  let line = line.trim();
  let n = line.parse::<i64>()
    .map_err(|_| MenuError::NotANumber(line.to_string()))?;
  C::try_from(n)
}

/// A list operation with its argument already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Insert(BoundedText),
  Remove(BoundedText),
  List,
  Back,
}

/// Applies `action` to `list` and returns the message to show the user.
pub fn apply<L: TextList>(list: &mut L, action: &Action) -> String {
  match action {
    Action::Insert(text) => match list.insert(text) {
      Ok(()) => format!("Text \"{}\" inserted.", text),
      Err(e) => format!("Error: {}.", e),
    },
    Action::Remove(text) => match list.remove(text) {
      Ok(()) => format!("Text \"{}\" removed.", text),
      Err(e) => format!("Error: {}.", e),
    },
    Action::List => match list.render() {
      Some(items) => format!("Items in the {}: {}", L::NAME, items),
      None => format!("The {} is empty.", L::NAME),
    },
    Action::Back => "Returning...".to_string(),
  }
}

/// One line of user input, after validation.
#[derive(Debug)]
enum Input<T, E> {
  Value(T),
  Invalid(E),
  Eof,
}

/// An interactive session over any line source and sink.
pub struct Session<R, W> {
  input: R,
  output: W,
  config: Config,
}

impl<R, W> Session<R, W>
where R: BufRead, W: Write {
  pub fn new(input: R, output: W, config: Config) -> Self {
    Self {
      input: input,
      output: output,
      config: config,
    }
  }

  /// Runs the top-level menu until the user exits or input ends.
  pub fn run(&mut self) -> Result<()> {
    info!("session started ({:?})", self.config);

    loop {
      write!(self.output,
             "\n--- TEXT LIST MANIPULATION ---\n\
              1. Fixed list\n\
              2. Linked list\n\
              0. Exit program\n\
              Choose an option: ")?;
      self.output.flush()?;

      match self.read_command::<MainCommand>()? {
        Input::Value(MainCommand::Fixed) => {
          let mut list = FixedList::new();
          self.list_menu(&mut list)?;
        }
        Input::Value(MainCommand::Linked) => {
          let mut list = LinkedList::new();
          self.list_menu(&mut list)?;
          let released = list.release_all();
          info!("{}: released {} nodes", LinkedList::NAME, released);
        }
        Input::Value(MainCommand::Exit) | Input::Eof => {
          writeln!(self.output, "Exiting...")?;
          break;
        }
        Input::Invalid(e) => {
          writeln!(self.output, "{}", e)?;
        }
      }
    }

    info!("session finished");
    Ok(())
  }

  /// Runs one list's menu until the user goes back.
  fn list_menu<L: TextList>(&mut self, list: &mut L) -> Result<()> {
    debug!("entering {} menu", L::NAME);

    loop {
      write!(self.output,
             "\n----- {} MENU -----\n\
              1. Insert item\n\
              2. Remove item\n\
              3. List items\n\
              0. Back\n\
              Choose: ",
             L::NAME.to_uppercase())?;
      self.output.flush()?;

      let action = match self.read_command::<ListCommand>()? {
        Input::Value(ListCommand::Insert) => {
          match self.read_text("Enter the text: ")? {
            Input::Value(text) => Action::Insert(text),
            Input::Invalid(e) => {
              writeln!(self.output, "Error: {}.", e)?;
              continue;
            }
            Input::Eof => Action::Back,
          }
        }
        Input::Value(ListCommand::Remove) => {
          match self.read_text("Enter the text to remove: ")? {
            Input::Value(text) => Action::Remove(text),
            Input::Invalid(e) => {
              writeln!(self.output, "Error: {}.", e)?;
              continue;
            }
            Input::Eof => Action::Back,
          }
        }
        Input::Value(ListCommand::List) => Action::List,
        Input::Value(ListCommand::Back) | Input::Eof => Action::Back,
        Input::Invalid(e) => {
          writeln!(self.output, "{}", e)?;
          continue;
        }
      };

      let reply = apply(list, &action);
      writeln!(self.output, "{}", reply)?;

      if action == Action::Back {
        debug!("leaving {} menu with {} items", L::NAME, list.size());
        return Ok(());
      }
    }
  }

  fn read_command<C>(&mut self) -> Result<Input<C, MenuError>>
  where C: TryFrom<i64, Error = MenuError> {
    // Blank lines are skipped, the way `scanf("%d")` skips whitespace.
    let line = loop {
      match self.read_line()? {
        Some(line) if line.trim().is_empty() => continue,
        Some(line) => break line,
        None => return Ok(Input::Eof),
      }
    };

    Ok(match parse_command(&line) {
      Ok(cmd) => Input::Value(cmd),
      Err(e) => {
        warn!("bad menu input {:?}: {}", line.trim(), e);
        Input::Invalid(e)
      }
    })
  }

  fn read_text(&mut self, prompt: &str) -> Result<Input<BoundedText, TextError>> {
    write!(self.output, "{}", prompt)?;
    self.output.flush()?;

    let line = match self.read_line()? {
      Some(line) => line,
      None => return Ok(Input::Eof),
    };

    Ok(match BoundedText::new(&line, self.config.oversize) {
      Ok(text) => Input::Value(text),
      Err(e) => Input::Invalid(e),
    })
  }

  /// Reads one line, or `None` at end of input.
  ///
  /// At most `MAX_LINE_BYTES` are kept; the rest of a longer line is
  /// skipped. Bytes that are not UTF-8 become U+FFFD.
  fn read_line(&mut self) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let n = (&mut self.input)
      .take(MAX_LINE_BYTES as u64)
      .read_until(b'\n', &mut buf)?;

    if n == 0 {
      return Ok(None);
    }
    if buf.last() != Some(&b'\n') && n == MAX_LINE_BYTES {
      let skipped = self.skip_line()?;
      warn!("line longer than {} bytes, skipped {} more", MAX_LINE_BYTES, skipped);
    }

    let line = String::from_utf8_lossy(&buf);
    if let Cow::Owned(_) = line {
      warn!("input line is not valid UTF-8");
    }
    Ok(Some(line.into_owned()))
  }

  /// Consumes input up to and including the next newline. Returns the
  /// number of bytes dropped.
  fn skip_line(&mut self) -> Result<usize> {
    let mut skipped = 0;

    loop {
      let (found, used) = {
        let available = self.input.fill_buf()?;
        if available.is_empty() {
          return Ok(skipped);
        }
        match available.iter().position(|&b| b == b'\n') {
          Some(i) => (true, i + 1),
          None => (false, available.len()),
        }
      };

      self.input.consume(used);
      skipped += used;
      if found {
        return Ok(skipped);
      }
    }
  }

  pub fn into_output(self) -> W {
    self.output
  }
}
