use crate::{Seq, Sink};

/// Runs the wrapped sequence over and over.
///
/// Created via [`repeat`]. Each cycle is a fresh run, so nothing is buffered
/// between cycles.
#[derive(Clone)]
pub struct Repeat<S>(S);

/// Create a sequence that repeats `seq` until the consumer stops.
///
/// A run ends when the consumer asks to stop, or when a cycle is stopped
/// early from inside (such as a [`take`](crate::compose::take) reaching its
/// limit). Both are reported as `false`.
///
/// Unlike an unconditional repeat, a cycle that produces nothing ends the
/// run with `true` rather than spinning forever on an empty input.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut cycle = repeat(from_iter(vec![1, 2])).take(5);
/// assert_eq!(cycle.to_vec(), vec![1, 2, 1, 2, 1]);
/// ```
pub fn repeat<S: Seq>(seq: S) -> Repeat<S> {
    Repeat(seq)
}

impl<S: Seq> Seq for Repeat<S> {
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        loop {
            let mut produced = false;
            let finished = self.0.run(&mut |item| {
                produced = true;
                sink(item)
            });
            if !finished {
                return false;
            }
            if !produced {
                return true;
            }
        }
    }
}
