use std::marker::PhantomData;

use crate::{Seq, Sink};

/// A sequence driven by a closure that receives the sink.
///
/// Created via [`from_fn`].
pub struct FromFn<T, F> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

/// Create a sequence from a generator closure.
///
/// The closure pushes values into the sink it is given and must stop as soon
/// as the sink returns `false`, reporting that by returning `false` itself.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let naturals = from_fn(|sink: &mut Sink<'_, u64>| {
///     let mut n = 0;
///     loop {
///         if !sink(n) {
///             return false;
///         }
///         n += 1;
///     }
/// });
/// assert_eq!(naturals.take(4).to_vec(), vec![0, 1, 2, 3]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: FnMut(&mut Sink<'_, T>) -> bool,
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Seq for FromFn<T, F>
where
    F: FnMut(&mut Sink<'_, T>) -> bool,
{
    type Item = T;

    fn run(&mut self, sink: &mut Sink<'_, T>) -> bool {
        (self.f)(sink)
    }
}

impl<T, F: Clone> Clone for FromFn<T, F> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _item: PhantomData,
        }
    }
}

/// A sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that produces nothing and always completes.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn run(&mut self, _sink: &mut Sink<'_, T>) -> bool {
        true
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

/// A sequence of exactly one element, cloned on every run.
#[derive(Clone)]
pub struct Once<T>(T);

/// Create a sequence that produces `value` once.
///
/// ```rust
/// use seqs::prelude::*;
///
/// assert_eq!(once("x").to_vec(), vec!["x"]);
/// ```
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once(value)
}

impl<T: Clone> Seq for Once<T> {
    type Item = T;

    fn run(&mut self, sink: &mut Sink<'_, T>) -> bool {
        sink(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_stops_when_sink_declines() {
        let mut produced = 0;
        let mut seq = from_fn(|sink: &mut Sink<'_, i32>| {
            for i in 0..10 {
                produced += 1;
                if !sink(i) {
                    return false;
                }
            }
            true
        });

        assert!(!seq.run(&mut |x| x < 2));
        drop(seq);
        assert_eq!(produced, 3);
    }

    #[test]
    fn test_empty_completes() {
        let mut seq = empty::<i32>();
        assert!(seq.run(&mut |_| false));
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_once_reruns() {
        let mut seq = once(5);
        assert_eq!(seq.to_vec(), vec![5]);
        assert_eq!(seq.to_vec(), vec![5]);
        assert!(!seq.run(&mut |_| false));
    }
}
