use super::*;

/// An array-backed `TextList` with room for exactly `CAPACITY` items.
///
/// Items live in a fixed block of slots. Slots `[0, count)` are occupied in
/// insertion order; the rest hold stale values and are never read.
pub struct FixedList {
  slots: [BoundedText; CAPACITY],
  count: usize,
}

impl FixedList {
  pub fn capacity(&self) -> usize {
    CAPACITY
  }

  pub fn is_full(&self) -> bool {
    self.count == CAPACITY
  }

  pub fn iter(&self) -> impl Iterator<Item = &BoundedText> {
    self.slots[..self.count].iter()
  }
}

impl TextList for FixedList {
  const NAME: &'static str = "fixed list";

  fn new() -> Self {
    Self {
      slots: Default::default(),
      count: 0,
    }
  }

  fn insert(&mut self, text: &BoundedText) -> Result<(), ListError> {
    if self.is_full() {
      warn!("{}: rejecting {:?}, all {} slots taken", Self::NAME, text.as_str(), CAPACITY);
      return Err(ListError::Full { capacity: CAPACITY });
    }

    self.slots[self.count].clone_from(text);
    self.count += 1;
    debug!("{}: inserted {:?} at slot {}", Self::NAME, text.as_str(), self.count - 1);
    Ok(())
  }

  fn remove(&mut self, text: &str) -> Result<(), ListError> {
    let pos = self.iter()
      .position(|elem| elem.as_str() == text)
      .ok_or_else(|| ListError::NotFound(text.to_string()))?;

    // Close the gap; the removed value ends up in the first stale slot.
    self.slots[pos..self.count].rotate_left(1);
    self.count -= 1;
    debug!("{}: removed {:?} from slot {}", Self::NAME, text, pos);
    Ok(())
  }

  fn items(&self) -> Vec<&str> {
    self.iter().map(|elem| elem.as_str()).collect()
  }

  fn is_empty(&self) -> bool {
    self.count == 0
  }

  fn size(&self) -> usize {
    self.count
  }
}
