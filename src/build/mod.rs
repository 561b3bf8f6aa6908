//! Building sequences from scratch
//!
//! This module provides functions and types for creating source sequences.

mod func;
mod iter;

// Re-export building blocks
pub use func::{Empty, FromFn, Once, empty, from_fn, once};
pub use iter::{FromIter, from_iter, from_slice};
