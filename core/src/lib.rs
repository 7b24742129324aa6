//! docfind-core: a minimal in-memory full-text search index.
//!
//! Documents are registered by name, tokenized, normalized (lowercase,
//! stopword filtering, optional Snowball stemming) and stored in an
//! inverted index. Queries are either implicit-AND term lists or explicit
//! boolean expressions (`a AND b OR NOT c`, left-to-right, no precedence).
//! The whole index can be dumped to and loaded from a single snapshot file.
//!
//! One quirk is preserved from the system this reimplements: stopword
//! filtering applies when indexing and in implicit-AND queries, but NOT to
//! [`Index::find_by_term`] or to explicit boolean operands, which are only
//! lowercased and stemmed. Looking up a stopword there simply misses.

pub mod error;
pub mod index;
pub mod normalize;
pub mod persist;
pub mod query;
pub mod tokenizer;

pub use error::{Error, Result};
pub use index::{Index, IndexConfig};
pub use normalize::{Normalizer, StemAlgorithm};
pub use query::QueryMode;
