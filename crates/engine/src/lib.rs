//! # Lexicon Engine
//!
//! Query logic over the immutable term catalog: compound filtering with
//! pagination, relatedness lookup, aggregate statistics, and random sampling.
//!
//! Every operation is a pure, synchronous function of the shared catalog and
//! the request parameters (plus an RNG for the sampler), so concurrent
//! requests need no coordination.

mod error;
mod query;
mod related;
mod sample;
mod stats;

pub use error::{EngineError, Result};
pub use query::{list_terms, ListQuery, TermListPage};
pub use related::{resolve, RelatedTerm, TermDetail, MAX_RELATED};
pub use sample::sample;
pub use stats::{snapshot, StatsSnapshot};
