use std::{iter::Cloned, slice};

use crate::{Seq, Sink};

/// A sequence backed by a cloneable iterable.
///
/// Created via [`from_iter`] or [`from_slice`]. Each run iterates a fresh
/// clone, so the source itself is never consumed.
#[derive(Clone, Debug)]
pub struct FromIter<I>(I);

/// Create a sequence from anything that can be iterated more than once.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut seq = from_iter(vec![1, 2, 3]);
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// assert_eq!(from_iter(0..4).count(), 4);
/// ```
pub fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter(iterable)
}

/// Create a sequence over a slice, cloning each element.
pub fn from_slice<T: Clone>(items: &[T]) -> FromIter<Cloned<slice::Iter<'_, T>>> {
    FromIter(items.iter().cloned())
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        for item in self.0.clone() {
            if !sink(item) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_iter_does_not_overproduce() {
        let mut pulled = Vec::new();
        let mut seq = from_iter(vec![1, 2, 3, 4]);
        let finished = seq.run(&mut |x| {
            pulled.push(x);
            pulled.len() < 2
        });

        assert!(!finished);
        assert_eq!(pulled, vec![1, 2]);
    }

    #[test]
    fn test_from_slice_clones() {
        let words = vec!["a".to_string(), "b".to_string()];
        let mut seq = from_slice(&words);
        assert_eq!(seq.to_vec(), words);
        assert_eq!(seq.to_vec(), words);
    }
}
