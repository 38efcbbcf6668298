//! Submission record store for submitdb
//!
//! The store owns the canonical persistent state of all submissions: a single
//! flat JSON file holding the entire ordered collection, rewritten wholesale
//! on every mutation.
//!
//! # Design Principles
//!
//! - The backing file is the sole source of truth; no collection state
//!   survives an operation in memory
//! - Every operation is a full load, an in-memory mutation, and a full
//!   rewrite (O(collection size) by design, sized for small collections)
//! - Records are addressed by zero-based position; deletion shifts every
//!   later record one position earlier
//! - Mutations are serialized through a single-writer lock held across the
//!   whole load-mutate-write cycle, so concurrent callers cannot lose updates
//! - A failed operation leaves the backing file exactly as it was

mod backing;
mod errors;
mod record;
mod store;

pub use backing::BackingFile;
pub use errors::{StoreError, StoreResult};
pub use record::Submission;
pub use store::{parse_index, SubmissionStore};
