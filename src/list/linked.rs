use super::*;

type Link = Option<Box<Node>>;

struct Node {
  elem: BoundedText,
  next: Link,
}

/// A singly linked `TextList`. New items go to the front.
///
/// Each node exclusively owns its text and the rest of the chain, so
/// unlinking a node is enough to release it.
pub struct LinkedList {
  head: Link,
  count: usize,
}

/// Borrowing iterator over a `LinkedList`, head to tail.
pub struct Iter<'a> {
  next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a BoundedText;

  fn next(&mut self) -> Option<Self::Item> {
    self.next.map(|node| {
      self.next = node.next.as_deref();
      &node.elem
    })
  }
}

impl LinkedList {
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      next: self.head.as_deref(),
    }
  }

  /// Releases every node and its text, leaving the list empty. Returns the
  /// number of nodes released.
  pub fn release_all(&mut self) -> usize {
    let mut released = 0;
    let mut cursor = self.head.take();

    while let Some(mut node) = cursor {
      cursor = node.next.take();
      released += 1;
    }

    self.count = 0;
    released
  }
}

impl TextList for LinkedList {
  const NAME: &'static str = "linked list";

  fn new() -> Self {
    Self {
      head: None,
      count: 0,
    }
  }

  fn insert(&mut self, text: &BoundedText) -> Result<(), ListError> {
    let elem = text.try_copy().map_err(|e| {
      warn!("{}: could not copy {:?}: {}", Self::NAME, text.as_str(), e);
      ListError::Alloc
    })?;

    let new_node = Box::new(Node {
      elem: elem,
      next: self.head.take(),
    });

    self.head = Some(new_node);
    self.count += 1;
    debug!("{}: inserted {:?} at the head", Self::NAME, text.as_str());
    Ok(())
  }

  fn remove(&mut self, text: &str) -> Result<(), ListError> {
    // `link` is the predecessor's `next`, or `head` for the first node.
    let mut link = &mut self.head;
    while link.as_ref().map_or(false, |node| node.elem.as_str() != text) {
      if let Some(node) = link {
        link = &mut node.next;
      }
    }

    match link.take() {
      None => Err(ListError::NotFound(text.to_string())),
      Some(node) => {
        let node = *node;
        *link = node.next;
        self.count -= 1;
        debug!("{}: removed {:?}", Self::NAME, text);
        Ok(())
      }
    }
  }

  fn items(&self) -> Vec<&str> {
    self.iter().map(|elem| elem.as_str()).collect()
  }

  fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  fn size(&self) -> usize {
    self.count
  }
}

impl Drop for LinkedList {
  fn drop(&mut self) {
    self.release_all();
  }
}
