//! Combinator sources backing the [`AsyncIter`](crate::AsyncIter) methods.
//!
//! Every combinator exclusively owns the upstream it wraps and forwards
//! [`finish`](crate::core::Source::finish) to it.

mod chain;
mod filter;
mod map;
mod skip;
mod take;
mod zip;

pub use chain::Chain;
pub use filter::{Filter, TryFilter};
pub use map::{AndThen, Inspect, Map, TryInspect, TryMap};
pub use skip::{Skip, SkipWhile};
pub use take::{Take, TakeWhile};
pub use zip::{Interleave, Zip};
