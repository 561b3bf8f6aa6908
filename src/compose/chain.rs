//! Concatenating sequences.
//!
//! This module provides [`Chain`] and [`Concat`] for running sequences one
//! after another, and [`FlatMap`], [`Flatten`] and [`Paged`] for
//! concatenating sequences produced by another sequence.

use crate::{Seq, Sink};

/// Runs the first sequence to completion, then the second.
///
/// Created via [`chain()`]. The second sequence is never started if the
/// first was stopped early.
#[derive(Clone)]
pub struct Chain<A, B>(A, B);

/// Produce every element of `a`, then every element of `b`.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut both = chain(from_iter(1..=2), once(9));
/// assert_eq!(both.to_vec(), vec![1, 2, 9]);
/// ```
pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    Chain(a, b)
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        self.0.run(sink) && self.1.run(sink)
    }
}

/// Runs any number of sequences of the same type in order.
#[derive(Clone)]
pub struct Concat<S> {
    seqs: Vec<S>,
}

/// Concatenate `seqs`; a sequence stopped early prevents the later ones
/// from starting.
///
/// Use [`Seq::boxed`] to concatenate sequences of different types.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut all = concat(vec![from_iter(vec![1, 2]), from_iter(vec![]), from_iter(vec![3])]);
/// assert_eq!(all.to_vec(), vec![1, 2, 3]);
/// ```
pub fn concat<S, I>(seqs: I) -> Concat<S>
where
    S: Seq,
    I: IntoIterator<Item = S>,
{
    Concat {
        seqs: seqs.into_iter().collect(),
    }
}

impl<S> Seq for Concat<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        self.seqs.iter_mut().all(|seq| seq.run(&mut *sink))
    }
}

/// Maps each element to a sequence and concatenates the results.
#[derive(Clone)]
pub struct FlatMap<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence of all elements of the sequences `f` returns.
///
/// A stop from downstream ends both the active inner sequence and the outer
/// one.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut pairs = flat_map(from_iter(1..=3usize), |x| from_iter(vec![x; x]));
/// assert_eq!(pairs.to_vec(), vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<S, R, F>(seq: S, f: F) -> FlatMap<S, F>
where
    S: Seq,
    R: Seq,
    F: FnMut(S::Item) -> R,
{
    FlatMap { seq, f }
}

impl<S, R, F> Seq for FlatMap<S, F>
where
    S: Seq,
    R: Seq,
    F: FnMut(S::Item) -> R,
{
    type Item = R::Item;

    fn run(&mut self, sink: &mut Sink<'_, R::Item>) -> bool {
        let FlatMap { seq, f } = self;
        seq.run(&mut |item| f(item).run(&mut *sink))
    }
}

/// Concatenates a sequence of sequences.
#[derive(Clone)]
pub struct Flatten<S>(S);

/// Create a sequence of the elements of every inner sequence, in order.
pub fn flatten<S>(seq: S) -> Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    Flatten(seq)
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        self.0.run(&mut |mut inner| inner.run(&mut *sink))
    }
}

/// Flattens pages of elements, the inverse of [`chunked`](crate::compose::chunked).
#[derive(Clone)]
pub struct Paged<S>(S);

/// Create a sequence of the elements of every page, in order.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut flat = paged(from_iter(vec![vec![1, 2], vec![], vec![3]]));
/// assert_eq!(flat.to_vec(), vec![1, 2, 3]);
/// ```
pub fn paged<S>(seq: S) -> Paged<S>
where
    S: Seq,
    S::Item: IntoIterator,
{
    Paged(seq)
}

impl<S> Seq for Paged<S>
where
    S: Seq,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        self.0.run(&mut |page| page.into_iter().all(|item| sink(item)))
    }
}
