//! Commonly used imports
//!
//! Use `use seqs::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxSeq, Seq, Sink};

// Sources
pub use crate::build::{empty, from_fn, from_iter, from_slice, once};

// Combinators
pub use crate::compose::{
    chain, chunked, concat, debug, debug_prefixed, filter, flat_map, flatten, intersperse, keys,
    map, map_filter, paged, repeat, skip, take, take_while, unique, values,
};

// Merging and pulling
pub use crate::merge::{merge, merge_by};
pub use crate::pull::{pull, pull_with};

// Consumption
pub use crate::consume::{all, any, count, find, for_each, head, to_vec};
