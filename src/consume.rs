//! Functions for driving sequences to completion.
//!
//! These terminal consumers run a sequence once. [`find`], [`any`], [`all`]
//! and [`head`] stop the run as soon as the answer is known; [`count`] and
//! [`to_vec`] always drain it.

use crate::Seq;

/// Call `f` on every element.
pub fn for_each<S, F>(mut seq: S, mut f: F)
where
    S: Seq,
    F: FnMut(S::Item),
{
    seq.run(&mut |item| {
        f(item);
        true
    });
}

/// First element matching `predicate`.
///
/// ```rust
/// use seqs::prelude::*;
///
/// assert_eq!(find(from_iter(1..), |x| x * x > 50), Some(8));
/// ```
pub fn find<S, P>(mut seq: S, mut predicate: P) -> Option<S::Item>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    let mut found = None;
    seq.run(&mut |item| {
        if predicate(&item) {
            found = Some(item);
            return false;
        }
        true
    });
    found
}

/// Whether any element matches `predicate`.
pub fn any<S, P>(seq: S, predicate: P) -> bool
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    find(seq, predicate).is_some()
}

/// Whether every element matches `predicate`; `true` for an empty sequence.
pub fn all<S, P>(mut seq: S, mut predicate: P) -> bool
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    seq.run(&mut |item| predicate(&item))
}

/// First element, if any.
pub fn head<S: Seq>(mut seq: S) -> Option<S::Item> {
    let mut first = None;
    seq.run(&mut |item| {
        first = Some(item);
        false
    });
    first
}

/// Number of elements.
pub fn count<S: Seq>(mut seq: S) -> usize {
    let mut n = 0;
    seq.run(&mut |_| {
        n += 1;
        true
    });
    n
}

/// Collect every element into a vector.
pub fn to_vec<S: Seq>(mut seq: S) -> Vec<S::Item> {
    let mut items = Vec::new();
    seq.run(&mut |item| {
        items.push(item);
        true
    });
    items
}
