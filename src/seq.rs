//! Core trait for lazy, rerunnable sequences.
//!
//! This module defines the [`Seq`] trait, the building block every source and
//! combinator in this crate implements. A [`Seq`] pushes its elements into a
//! sink callback; the sink answers `true` to ask for more or `false` to stop.
//!
//! # Examples
//!
//! ```rust
//! use seqs::prelude::*;
//!
//! let mut evens = from_iter(1..=10).filter(|x| x % 2 == 0).map(|x| x * 10);
//! assert_eq!(evens.to_vec(), vec![20, 40, 60, 80, 100]);
//!
//! // Running again re-executes from scratch.
//! assert_eq!(evens.count(), 5);
//! ```

use std::{
    cell::RefCell,
    cmp::Ordering,
    fmt,
    hash::Hash,
    rc::Rc,
    sync::{Arc, Mutex},
};

use crate::{
    compose::{
        Chain, Chunked, Debugged, Filter, FlatMap, Flatten, Intersperse, Map, MapFilter, Paged,
        Repeat, Skip, Take, TakeWhile, Unique, chain, chunked, debug, filter, flat_map, flatten,
        intersperse, map, map_filter, paged, repeat, skip, take, take_while, unique,
    },
    consume,
    merge::{Merge, merge_by},
    pull::{Pull, pull},
};

/// Callback that receives each element and returns whether to continue.
pub type Sink<'a, T> = dyn FnMut(T) -> bool + 'a;

/// A boxed, type-erased sequence.
pub type BoxSeq<'a, T> = Box<dyn Seq<Item = T> + 'a>;

/// A lazy producer of elements.
///
/// `run` pushes elements into `sink` until the sequence is exhausted or the
/// sink returns `false`. It returns `true` when every element was produced and
/// `false` when production was stopped early. Implementations must never call
/// `sink` again once it has returned `false`.
///
/// A sequence keeps no state between runs, so calling `run` repeatedly
/// re-executes it from the start.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut seq = from_iter(vec![1, 2, 3]);
/// let mut seen = Vec::new();
/// let finished = seq.run(&mut |x| {
///     seen.push(x);
///     x < 2
/// });
/// assert!(!finished);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub trait Seq {
    /// Type of the produced elements
    type Item;

    /// Push elements into `sink`, returning `false` if it asked to stop.
    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool;

    /// Transform each element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        map(self, f)
    }

    /// Keep only the elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Transform and filter in one pass; `None` drops the element.
    fn map_filter<U, F>(self, f: F) -> MapFilter<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        map_filter(self, f)
    }

    /// Map each element to a sequence and concatenate the results.
    fn flat_map<S, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        S: Seq,
        F: FnMut(Self::Item) -> S,
    {
        flat_map(self, f)
    }

    /// Concatenate a sequence of sequences.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Seq,
    {
        flatten(self)
    }

    /// Concatenate a sequence of pages into their elements.
    fn paged(self) -> Paged<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        paged(self)
    }

    /// Produce all of `self`, then all of `other`.
    fn chain<R>(self, other: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Seq<Item = Self::Item>,
    {
        chain(self, other)
    }

    /// Produce at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, n)
    }

    /// Discard the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(self, n)
    }

    /// Produce elements while `predicate` holds.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        take_while(self, predicate)
    }

    /// Group elements into vectors of `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    fn chunked(self, n: usize) -> Chunked<Self>
    where
        Self: Sized,
    {
        chunked(self, n)
    }

    /// Place `separator` between consecutive elements.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        intersperse(self, separator)
    }

    /// Drop elements equal to one produced earlier in the same run.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        unique(self)
    }

    /// Run the sequence again and again until the consumer stops.
    fn repeat(self) -> Repeat<Self>
    where
        Self: Sized,
    {
        repeat(self)
    }

    /// Merge with another ascending sequence.
    fn merge<Y>(self, other: Y) -> Merge<Self, Y, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self: Sized,
        Self::Item: Ord + Send + 'static,
        Y: Seq<Item = Self::Item> + Send + 'static,
    {
        merge_by(
            self,
            other,
            Ord::cmp as fn(&Self::Item, &Self::Item) -> Ordering,
        )
    }

    /// Merge with another sequence ordered by `compare`.
    fn merge_by<Y, F>(self, other: Y, compare: F) -> Merge<Self, Y, F>
    where
        Self: Sized,
        Self::Item: Send + 'static,
        Y: Seq<Item = Self::Item> + Send + 'static,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        merge_by(self, other, compare)
    }

    /// Log every element at debug level without changing it.
    fn debug(self) -> Debugged<Self>
    where
        Self: Sized,
        Self::Item: fmt::Debug,
    {
        debug(self)
    }

    /// Erase the concrete type behind a [`BoxSeq`].
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Turn this sequence into a pull handle driven by a worker thread.
    fn into_pull(self) -> Pull<Self::Item>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        pull(self)
    }

    /// Call `f` on every element.
    fn for_each<F>(&mut self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(self, f)
    }

    /// Whether any element matches; stops at the first match.
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::any(self, predicate)
    }

    /// Whether every element matches; stops at the first mismatch.
    fn all<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::all(self, predicate)
    }

    /// First element matching `predicate`.
    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::find(self, predicate)
    }

    /// First element, if any.
    fn head(&mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        consume::head(self)
    }

    /// Number of elements.
    fn count(&mut self) -> usize
    where
        Self: Sized,
    {
        consume::count(self)
    }

    /// Collect every element into a vector.
    fn to_vec(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        consume::to_vec(self)
    }
}

impl<S> Seq for &mut S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        (**self).run(sink)
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        (**self).run(sink)
    }
}

/// `None` behaves as the empty sequence.
impl<S> Seq for Option<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        match self {
            Some(seq) => seq.run(sink),
            None => true,
        }
    }
}

impl<L, R> Seq for either::Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        match self {
            either::Either::Left(l) => l.run(sink),
            either::Either::Right(r) => r.run(sink),
        }
    }
}

/// Borrows the shared sequence mutably for the duration of one run.
///
/// # Panics
///
/// Panics if the same sequence is run re-entrantly, for example from inside
/// its own [`flat_map`](Seq::flat_map) callback, since the inner run cannot
/// borrow it a second time.
impl<S> Seq for Rc<RefCell<S>>
where
    S: Seq,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        let mut seq = self.as_ref().borrow_mut();
        seq.run(sink)
    }
}

/// Locks for the duration of one run.
///
/// A poisoned lock is recovered: runs never leave state behind, so the
/// sequence is still usable after a panic in another holder.
impl<S> Seq for Arc<Mutex<S>>
where
    S: Seq,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, Self::Item>) -> bool {
        let mut seq = self.lock().unwrap_or_else(|poisoned| {
            log::warn!("recovering sequence from poisoned lock");
            poisoned.into_inner()
        });
        seq.run(sink)
    }
}
