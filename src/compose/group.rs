//! Grouping and separating elements.

use std::mem;

use crate::{Error, Seq, Sink, error};

/// Groups elements into vectors of a fixed size.
#[derive(Clone)]
pub struct Chunked<S> {
    seq: S,
    n: usize,
}

/// Create a sequence of consecutive groups of `n` elements.
///
/// The last group holds whatever is left and may be shorter. Every group is
/// a freshly allocated `Vec` owned by the consumer.
///
/// # Panics
///
/// Panics if `n` is zero. Use [`try_chunked`] to get an error instead.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut pairs = chunked(from_iter(1..=5), 2);
/// assert_eq!(pairs.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunked<S: Seq>(seq: S, n: usize) -> Chunked<S> {
    match try_chunked(seq, n) {
        Ok(chunked) => chunked,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`chunked`], returning [`Error::ChunkSize`] when `n` is zero.
pub fn try_chunked<S: Seq>(seq: S, n: usize) -> error::Result<Chunked<S>> {
    if n == 0 {
        return Err(Error::ChunkSize(n));
    }
    Ok(Chunked { seq, n })
}

impl<S: Seq> Seq for Chunked<S> {
    type Item = Vec<S::Item>;

    fn run(&mut self, sink: &mut Sink<'_, Vec<S::Item>>) -> bool {
        let n = self.n;
        let mut chunk = Vec::with_capacity(n);
        let finished = self.seq.run(&mut |item| {
            chunk.push(item);
            if chunk.len() < n {
                return true;
            }
            sink(mem::replace(&mut chunk, Vec::with_capacity(n)))
        });
        if !finished {
            return false;
        }

        chunk.is_empty() || sink(chunk)
    }
}

/// Places a separator between consecutive elements.
#[derive(Clone)]
pub struct Intersperse<S: Seq> {
    seq: S,
    separator: S::Item,
}

/// Create a sequence with `separator` between every two elements of `seq`.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut words = intersperse(from_iter(["a", "b", "c"]), ",");
/// assert_eq!(words.to_vec().concat(), "a,b,c");
/// ```
pub fn intersperse<S>(seq: S, separator: S::Item) -> Intersperse<S>
where
    S: Seq,
    S::Item: Clone,
{
    Intersperse { seq, separator }
}

impl<S> Seq for Intersperse<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let Intersperse { seq, separator } = self;
        let mut first = true;
        seq.run(&mut |item| {
            if !first && !sink(separator.clone()) {
                return false;
            }
            first = false;
            sink(item)
        })
    }
}
