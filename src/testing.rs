//! Randomized test drivers shared by the list tests.

use rand::{self, Rng, ThreadRng};

use crate::config::Oversize;
use crate::text::BoundedText;

/// Texts drawn by `gen_text`. The pool is small so removals often hit.
const TEXT_POOL: [&str; 8] = ["a", "b", "c", "apple", "banana", "", "two words", "é"];

/// An operation a `Tester` can be asked to perform.
pub trait TestOp: Copy + Clone {}

/// Something that performs one randomly chosen operation at a time.
pub trait Tester {
  fn execute_op(&mut self, rng: &mut ThreadRng);
}

/// Picks an operation according to the given probabilities. The
/// probabilities are expected to sum to 1.
pub fn choose_op<O: TestOp>(rng: &mut ThreadRng, ops: &Vec<(O, f64)>) -> O {
  let f = rng.next_f64();
  let mut acc = 0.0;

  for &(op, p) in ops {
    acc += p;
    if f < acc {
      return op;
    }
  }

  ops[ops.len() - 1].0
}

pub fn gen_text(rng: &mut ThreadRng) -> BoundedText {
  let s = TEXT_POOL[rng.gen_range(0, TEXT_POOL.len())];
  BoundedText::new(s, Oversize::Reject).unwrap()
}

/// Runs `n_ops` random operations on the tester.
pub fn test_random_ops<T: Tester>(mut tester: T, n_ops: usize) {
  let mut rng = rand::thread_rng();

  for _ in 0..n_ops {
    tester.execute_op(&mut rng);
  }
}
