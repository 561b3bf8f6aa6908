//! Ordered two-way merge.
//!
//! [`Merge`] drives its first input as the primary iteration and pulls the
//! second one value at a time through a [`Pull`](crate::pull::Pull) handle,
//! so neither run has to be nested inside the other's sink.

use std::{
    cmp::Ordering,
    sync::{Arc, Mutex},
};

use crate::{
    Seq, Sink,
    pull::{PullOptions, pull_with},
};

/// Merges two sequences ordered by a comparison function.
///
/// Created via [`merge`] or [`merge_by`]. Every element of both inputs is
/// produced exactly once. On ties the element of the first input comes
/// first. Inputs that are not ordered produce unordered output that still
/// holds every element of both.
pub struct Merge<X, Y, F> {
    x: X,
    y: Arc<Mutex<Y>>,
    compare: F,
    options: PullOptions,
}

/// Merge two ascending sequences.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut merged = merge(from_iter(vec![1, 3, 5]), from_iter(vec![2, 4, 6]));
/// assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<X, Y>(x: X, y: Y) -> Merge<X, Y, fn(&X::Item, &X::Item) -> Ordering>
where
    X: Seq,
    X::Item: Ord + Send + 'static,
    Y: Seq<Item = X::Item> + Send + 'static,
{
    merge_by(x, y, Ord::cmp as fn(&X::Item, &X::Item) -> Ordering)
}

/// Merge two sequences ordered by `compare`.
///
/// `y` runs on a [`Pull`](crate::pull::Pull) worker for the duration of each
/// run, which is why it must be `Send + 'static`.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let mut merged = merge_by(from_iter(["a", "ccc"]), from_iter(["bb", "dd"]), by_len);
/// assert_eq!(merged.to_vec(), vec!["a", "bb", "dd", "ccc"]);
/// ```
pub fn merge_by<X, Y, F>(x: X, y: Y, compare: F) -> Merge<X, Y, F>
where
    X: Seq,
    X::Item: Send + 'static,
    Y: Seq<Item = X::Item> + Send + 'static,
    F: FnMut(&X::Item, &X::Item) -> Ordering,
{
    Merge {
        x,
        y: Arc::new(Mutex::new(y)),
        compare,
        options: PullOptions::default(),
    }
}

impl<X, Y, F> Merge<X, Y, F> {
    /// Configure the worker that pulls the second input.
    pub fn with_options(mut self, options: PullOptions) -> Self {
        self.options = options;
        self
    }
}

impl<X, Y, F> Seq for Merge<X, Y, F>
where
    X: Seq,
    X::Item: Send + 'static,
    Y: Seq<Item = X::Item> + Send + 'static,
    F: FnMut(&X::Item, &X::Item) -> Ordering,
{
    type Item = X::Item;

    fn run(&mut self, sink: &mut Sink<'_, X::Item>) -> bool {
        let Merge {
            x,
            y,
            compare,
            options,
        } = self;
        let mut ys = match pull_with(Arc::clone(y), options) {
            Ok(handle) => handle,
            Err(err) => panic!("{err}"),
        };

        let mut pending = ys.next();
        let finished = x.run(&mut |vx| {
            while let Some(vy) = pending.take() {
                if compare(&vx, &vy) != Ordering::Greater {
                    pending = Some(vy);
                    break;
                }
                if !sink(vy) {
                    return false;
                }
                pending = ys.next();
            }
            sink(vx)
        });
        if !finished {
            return false;
        }

        pending.into_iter().chain(&mut ys).all(|vy| sink(vy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_iter};
    use pretty_assertions::assert_eq;
    use quickcheck::quickcheck;
    use std::rc::Rc;

    #[test]
    fn test_merge_interleaves() {
        let mut merged = merge(from_iter(vec![1, 3, 5]), from_iter(vec![2, 4, 6]));
        assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_merge_ties_prefer_first_input() {
        let x = from_iter(vec![(1, 'x'), (2, 'x'), (2, 'x')]);
        let y = from_iter(vec![(1, 'y'), (2, 'y'), (3, 'y')]);
        let mut merged = merge_by(x, y, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            merged.to_vec(),
            vec![(1, 'x'), (1, 'y'), (2, 'x'), (2, 'x'), (2, 'y'), (3, 'y')]
        );
    }

    #[test]
    fn test_merge_with_empty_sides() {
        assert_eq!(merge(empty::<i32>(), from_iter(vec![1, 2])).to_vec(), vec![1, 2]);
        assert_eq!(merge(from_iter(vec![1, 2]), empty::<i32>()).to_vec(), vec![1, 2]);
        assert_eq!(merge(empty::<i32>(), empty::<i32>()).count(), 0);
    }

    #[test]
    fn test_merge_unordered_keeps_everything() {
        let mut merged = merge(from_iter(vec![5, 1, 4]), from_iter(vec![3, 9, 0]));
        let mut out = merged.to_vec();
        assert_eq!(out.len(), 6);
        out.sort_unstable();
        assert_eq!(out, vec![0, 1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_merge_stops_with_downstream() {
        let mut merged = merge(from_iter(1..=100), from_iter(1..=100));
        let mut seen = Vec::new();
        assert!(!merged.run(&mut |v| {
            seen.push(v);
            seen.len() < 3
        }));
        assert_eq!(seen, vec![1, 1, 2]);
    }

    #[test]
    fn test_merge_stops_while_draining_second() {
        let mut merged = merge(from_iter(vec![1]), from_iter(vec![2, 3, 4]));
        let mut seen = Vec::new();
        assert!(!merged.run(&mut |v| {
            seen.push(v);
            v < 3
        }));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_first_input_need_not_be_send() {
        let local = Rc::new(10);
        let x = from_iter(vec![1, 20]).map(move |v| v + *local - 10);
        let mut merged = merge(x, from_iter(vec![5]));
        assert_eq!(merged.to_vec(), vec![1, 5, 20]);
    }

    #[test]
    fn test_merge_with_infinite_second_input() {
        let twos = crate::compose::repeat(crate::build::once(2u64));
        let mut merged = merge(from_iter(vec![1u64, 3]), twos).take(4);
        assert_eq!(merged.to_vec(), vec![1, 2, 2, 2]);
        assert_eq!(merged.to_vec(), vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_merge_with_named_worker() {
        let mut merged = merge(from_iter(vec![1]), from_iter(vec![0]))
            .with_options(PullOptions::default().name("merge-y"));
        assert_eq!(merged.to_vec(), vec![0, 1]);
    }

    quickcheck! {
        fn prop_merge_of_sorted_is_stable_sort(a: Vec<(u8, u8)>, b: Vec<(u8, u8)>) -> bool {
            let mut a = a;
            let mut b = b;
            a.sort_by_key(|p| p.0);
            b.sort_by_key(|p| p.0);

            // Tag each element with its side; a stable sort of x ++ y gives the
            // expected order, ties from x first.
            let x: Vec<_> = a.iter().map(|&(k, v)| (k, 0u8, v)).collect();
            let y: Vec<_> = b.iter().map(|&(k, v)| (k, 1u8, v)).collect();
            let mut expected: Vec<_> = x.iter().chain(y.iter()).copied().collect();
            expected.sort_by_key(|t| t.0);

            let merged = merge_by(from_iter(x), from_iter(y), |l, r| l.0.cmp(&r.0)).to_vec();
            merged == expected
        }

        fn prop_merge_is_multiset_union(a: Vec<i16>, b: Vec<i16>) -> bool {
            let mut merged = merge(from_iter(a.clone()), from_iter(b.clone())).to_vec();
            let mut expected: Vec<_> = a.into_iter().chain(b).collect();
            merged.sort_unstable();
            expected.sort_unstable();
            merged == expected
        }
    }
}
