//! # Seqs: Lazy, Rerunnable Sequences
//!
//! Build lazy data-processing pipelines from small pieces and run them as
//! many times as needed.
//!
//! ## Core Trait
//!
//! - **[`Seq`]**: a producer that pushes elements into a sink callback until
//!   it is exhausted or the sink asks it to stop
//!
//! ## Key Features
//!
//! - **Lazy**: combinators never materialize intermediate results, and a
//!   stop from the consumer ends production immediately
//! - **Rerunnable**: per-run state lives inside `run`, so every run starts
//!   from scratch
//! - **Pullable**: [`pull()`] turns any sendable sequence into an iterator,
//!   which [`merge_by()`](merge::merge_by) uses to interleave two sequences
//!
//! ## Example
//!
//! ```
//! use seqs::prelude::*;
//!
//! let mut pipeline = from_iter(1..=10)
//!     .filter(|x| x % 3 != 0)
//!     .map(|x| x * x)
//!     .chunked(3);
//!
//! assert_eq!(
//!     pipeline.to_vec(),
//!     vec![vec![1, 4, 16], vec![25, 49, 64], vec![100]]
//! );
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`from_iter(iterable)`](build::from_iter) - Re-iterate a cloneable iterable on every run
//! - [`from_fn(f)`](build::from_fn) - Generator closure that pushes into the sink
//! - [`once(value)`](build::once), [`empty()`](build::empty)
//!
//! **Combinators:**
//! - [`map`](compose::map), [`filter`](compose::filter), [`map_filter`](compose::map_filter)
//! - [`flat_map`](compose::flat_map), [`flatten`](compose::flatten), [`paged`](compose::paged)
//! - [`chain`](compose::chain), [`concat`](compose::concat)
//! - [`take`](compose::take), [`skip`](compose::skip), [`take_while`](compose::take_while)
//! - [`chunked`](compose::chunked), [`intersperse`](compose::intersperse), [`unique`](compose::unique)
//! - [`repeat`](compose::repeat), [`merge`](merge::merge), [`merge_by`](merge::merge_by)
//!
//! **Consumption:**
//! - [`to_vec`](consume::to_vec), [`count`](consume::count), [`head`](consume::head)
//! - [`find`](consume::find), [`any`](consume::any), [`all`](consume::all)
//! - [`pull(seq)`](pull()) - Iterate with an imperative `next`/`stop` handle

pub mod build;
pub mod compose;
pub mod consume;
mod error;
pub mod merge;
pub mod prelude;
pub mod pull;
mod seq;

pub use error::{Error, Result};
pub use pull::{Pull, pull};
pub use seq::*;
