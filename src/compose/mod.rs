//! Combining sequences together
//!
//! This module provides the lazy combinators: each wraps one or more
//! sequences and is itself a [`Seq`](crate::Seq). Nothing is materialized;
//! per-run state lives inside `run`.

mod chain;
mod debug;
mod group;
mod map;
mod repeat;
mod take;
mod unique;

// Re-export composition operations
pub use chain::{Chain, Concat, FlatMap, Flatten, Paged, chain, concat, flat_map, flatten, paged};
pub use debug::{Debugged, debug, debug_prefixed};
pub use group::{Chunked, Intersperse, chunked, intersperse, try_chunked};
pub use map::{Filter, Map, MapFilter, filter, keys, map, map_filter, values};
pub use repeat::{Repeat, repeat};
pub use take::{Skip, Take, TakeWhile, skip, take, take_while, try_skip, try_take};
pub use unique::{Unique, unique};
