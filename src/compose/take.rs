//! Limiting how much of a sequence is produced.
//!
//! [`Take`] and [`TakeWhile`] end a run before the wrapped sequence is
//! exhausted. Cutting the input at the limit is an early stop and reports
//! `false`, like a consumer stop. A failed `take_while` predicate is the
//! exception: it counts as natural completion.

use crate::{Seq, Sink, error};

/// Produces at most `n` elements.
#[derive(Clone)]
pub struct Take<S> {
    seq: S,
    n: usize,
}

/// Create a sequence of the first `n` elements of `seq`.
///
/// The wrapped sequence is stopped right after the `n`th element, so it is
/// never asked for more. A run that reaches the limit reports `false`, which
/// ends an enclosing [`concat`](crate::compose::concat) or
/// [`repeat`](crate::compose::repeat). A shorter input completes with `true`.
/// With `n == 0` the input is not run at all and the run reports `false`.
///
/// ```rust
/// use seqs::prelude::*;
///
/// assert_eq!(take(from_iter(1..=5), 2).to_vec(), vec![1, 2]);
/// assert_eq!(take(from_iter(1..=5), 0).to_vec(), Vec::<i32>::new());
/// ```
pub fn take<S: Seq>(seq: S, n: usize) -> Take<S> {
    Take { seq, n }
}

/// Like [`take`], for a signed count.
///
/// Returns [`Error::NegativeCount`](crate::Error::NegativeCount) if `n` is negative.
pub fn try_take<S: Seq>(seq: S, n: isize) -> error::Result<Take<S>> {
    Ok(take(seq, error::checked_count(n)?))
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let limit = self.n;
        if limit == 0 {
            return false;
        }

        let mut taken = 0;
        self.seq.run(&mut |item| {
            taken += 1;
            sink(item) && taken < limit
        })
    }
}

/// Discards the first `n` elements.
#[derive(Clone)]
pub struct Skip<S> {
    seq: S,
    n: usize,
}

/// Create a sequence of everything after the first `n` elements of `seq`.
///
/// ```rust
/// use seqs::prelude::*;
///
/// assert_eq!(skip(from_iter(1..=5), 3).to_vec(), vec![4, 5]);
/// ```
pub fn skip<S: Seq>(seq: S, n: usize) -> Skip<S> {
    Skip { seq, n }
}

/// Like [`skip`], for a signed count.
///
/// Returns [`Error::NegativeCount`](crate::Error::NegativeCount) if `n` is negative.
pub fn try_skip<S: Seq>(seq: S, n: isize) -> error::Result<Skip<S>> {
    Ok(skip(seq, error::checked_count(n)?))
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let n = self.n;
        let mut skipped = 0;
        self.seq.run(&mut |item| {
            if skipped < n {
                skipped += 1;
                return true;
            }
            sink(item)
        })
    }
}

/// Produces elements while a predicate holds.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    seq: S,
    predicate: P,
}

/// Create a sequence of the leading elements of `seq` that satisfy
/// `predicate`.
///
/// The first failing element is discarded and ends the run, which is then
/// reported as complete.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut small = take_while(from_iter(vec![1, 2, 7, 3]), |x| *x < 5);
/// assert_eq!(small.to_vec(), vec![1, 2]);
/// ```
pub fn take_while<S, P>(seq: S, predicate: P) -> TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile { seq, predicate }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let TakeWhile { seq, predicate } = self;
        let mut stopped = false;
        seq.run(&mut |item| {
            if !predicate(&item) {
                return false;
            }
            if !sink(item) {
                stopped = true;
                return false;
            }
            true
        });
        !stopped
    }
}
