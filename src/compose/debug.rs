use std::{borrow::Cow, fmt};

use crate::{Seq, Sink};

/// Logs every element at debug level and passes it through unchanged.
#[derive(Clone)]
pub struct Debugged<S> {
    seq: S,
    prefix: Cow<'static, str>,
}

/// Trace the elements flowing through `seq`.
pub fn debug<S>(seq: S) -> Debugged<S>
where
    S: Seq,
    S::Item: fmt::Debug,
{
    debug_prefixed("", seq)
}

/// Trace the elements flowing through `seq`, prefixing each log line.
///
/// ```rust
/// use seqs::prelude::*;
///
/// let mut traced = debug_prefixed("squares: ", from_iter(1..=3).map(|x| x * x));
/// assert_eq!(traced.to_vec(), vec![1, 4, 9]);
/// ```
pub fn debug_prefixed<S>(prefix: impl Into<Cow<'static, str>>, seq: S) -> Debugged<S>
where
    S: Seq,
    S::Item: fmt::Debug,
{
    Debugged {
        seq,
        prefix: prefix.into(),
    }
}

impl<S> Seq for Debugged<S>
where
    S: Seq,
    S::Item: fmt::Debug,
{
    type Item = S::Item;

    fn run(&mut self, sink: &mut Sink<'_, S::Item>) -> bool {
        let Debugged { seq, prefix } = self;
        seq.run(&mut |item| {
            log::debug!("{prefix}{item:?}");
            sink(item)
        })
    }
}
