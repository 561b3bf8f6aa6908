//! Element-wise transformation and filtering.
//!
//! This module provides [`Map`], [`Filter`] and [`MapFilter`], plus the pair
//! projections [`keys`] and [`values`].

use crate::{Seq, Sink};

/// Transforms every element of the wrapped sequence.
#[derive(Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that applies `f` to each element.
///
/// # Examples
///
/// ```
/// use seqs::prelude::*;
///
/// let mut doubled = map(from_iter(1..=3), |x| x * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub fn map<S, U, F>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    Map { seq, f }
}

impl<S, U, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn run(&mut self, sink: &mut Sink<'_, U>) -> bool {
        let Map { seq, f } = self;
        seq.run(&mut |item| sink(f(item)))
    }
}

/// Keeps only the elements matching a predicate.
#[derive(Clone)]
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

/// Create a sequence of the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```
/// use seqs::prelude::*;
///
/// let mut odd = filter(from_iter(1..=6), |x| x % 2 == 1);
/// assert_eq!(odd.to_vec(), vec![1, 3, 5]);
/// ```
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    Filter { seq, predicate }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let Filter { seq, predicate } = self;
        seq.run(&mut |item| !predicate(&item) || sink(item))
    }
}

/// Transforms and filters in a single pass.
///
/// The function returns `None` for elements that should be dropped, so no
/// placeholder value is ever built for them.
#[derive(Clone)]
pub struct MapFilter<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence of the `Some` results of `f`.
///
/// # Examples
///
/// ```
/// use seqs::prelude::*;
///
/// let mut parsed = map_filter(from_iter(["1", "x", "3"]), |s| s.parse::<i32>().ok());
/// assert_eq!(parsed.to_vec(), vec![1, 3]);
/// ```
pub fn map_filter<S, U, F>(seq: S, f: F) -> MapFilter<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Option<U>,
{
    MapFilter { seq, f }
}

impl<S, U, F> Seq for MapFilter<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Option<U>,
{
    type Item = U;

    fn run(&mut self, sink: &mut Sink<'_, U>) -> bool {
        let MapFilter { seq, f } = self;
        seq.run(&mut |item| match f(item) {
            Some(mapped) => sink(mapped),
            None => true,
        })
    }
}

/// Project the first field of every pair.
pub fn keys<S, K, V>(seq: S) -> Map<S, fn((K, V)) -> K>
where
    S: Seq<Item = (K, V)>,
{
    let project: fn((K, V)) -> K = |(k, _)| k;
    map(seq, project)
}

/// Project the second field of every pair.
pub fn values<S, K, V>(seq: S) -> Map<S, fn((K, V)) -> V>
where
    S: Seq<Item = (K, V)>,
{
    let project: fn((K, V)) -> V = |(_, v)| v;
    map(seq, project)
}
