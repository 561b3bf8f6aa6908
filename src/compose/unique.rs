use std::hash::Hash;

use ahash::AHashSet;

use crate::{Seq, Sink};

/// Drops elements already produced earlier in the same run.
///
/// Created via [`unique`]. The set of seen values is built per run and
/// dropped when the run ends.
#[derive(Clone)]
pub struct Unique<S>(S);

/// Create a sequence of the distinct elements of `seq`, in order of first
/// occurrence.
///
/// ```rust
/// use seqs::prelude::*;
///
/// assert_eq!(unique(from_iter(vec![1, 1, 2, 3, 3])).to_vec(), vec![1, 2, 3]);
/// ```
pub fn unique<S>(seq: S) -> Unique<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    Unique(seq)
}

impl<S> Seq for Unique<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let mut seen = AHashSet::new();
        self.0.run(&mut |item| {
            if seen.contains(&item) {
                return true;
            }
            seen.insert(item.clone());
            sink(item)
        })
    }
}
