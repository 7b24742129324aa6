use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::normalize::{Normalizer, StemAlgorithm};
use crate::query::{self, QueryMode};
use crate::tokenizer::tokenize;

/// Construction-time configuration. The stemmer and stopword set are fixed
/// for the lifetime of the index.
#[derive(Default)]
pub struct IndexConfig {
    pub stemmer: Option<StemAlgorithm>,
    pub stopwords: HashSet<String>,
}

/// In-memory inverted index: stemmed term -> set of document names.
///
/// Alongside the postings it tracks the full document universe (used to
/// seed AND-intersections and to evaluate NOT), the raw lowercased tokens
/// that produced each stemmed term, and corpus-wide raw-token frequency
/// counters. All state is owned by the instance; there is no process-global
/// accumulation.
pub struct Index {
    documents: HashSet<String>,
    postings: HashMap<String, HashSet<String>>,
    origins: HashMap<String, HashSet<String>>,
    frequencies: HashMap<String, u64>,
    normalizer: Normalizer,
}

impl Index {
    /// Index with no stemmer and no stopwords.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            documents: HashSet::new(),
            postings: HashMap::new(),
            origins: HashMap::new(),
            frequencies: HashMap::new(),
            normalizer: Normalizer::new(config.stemmer, config.stopwords),
        }
    }

    pub(crate) fn from_parts(
        documents: HashSet<String>,
        postings: HashMap<String, HashSet<String>>,
        origins: HashMap<String, HashSet<String>>,
        frequencies: HashMap<String, u64>,
        normalizer: Normalizer,
    ) -> Self {
        Self { documents, postings, origins, frequencies, normalizer }
    }

    /// Number of distinct documents ever added.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Tokenize and index `contents` under `name`.
    ///
    /// Re-adding an existing name accumulates: the universe dedupes, but the
    /// text is processed again, so frequency counters grow and postings are
    /// re-affirmed. There is no replace or delete.
    pub fn add_document(&mut self, name: &str, contents: &str) {
        self.documents.insert(name.to_string());
        let tokens = tokenize(contents);
        let total = tokens.len();
        let mut indexed = 0usize;
        for token in tokens {
            let lowered = token.to_lowercase();
            *self.frequencies.entry(lowered.clone()).or_insert(0) += 1;
            if let Some(stemmed) = self.normalizer.normalize(&lowered) {
                self.postings
                    .entry(stemmed.clone())
                    .or_default()
                    .insert(name.to_string());
                self.origins.entry(stemmed).or_default().insert(lowered);
                indexed += 1;
            }
        }
        tracing::debug!(name, total, indexed, "indexed document");
    }

    /// Documents containing `term`, matched case-insensitively and stemmed.
    ///
    /// The term is NOT stopword-filtered before lookup, unlike indexing and
    /// implicit-AND queries; looking up a stopword simply misses. Unknown
    /// terms yield an empty set.
    pub fn find_by_term(&self, term: &str) -> HashSet<String> {
        let stemmed = self.normalizer.fold(term);
        self.postings.get(&stemmed).cloned().unwrap_or_default()
    }

    /// Evaluate `query` in explicit boolean mode (`" AND "`, `" OR "`,
    /// leading `"NOT "`; strictly left-to-right, no precedence).
    pub fn find(&self, query: &str) -> Result<HashSet<String>> {
        self.find_with(query, QueryMode::Boolean)
    }

    /// Evaluate `query` under the given [`QueryMode`].
    pub fn find_with(&self, query: &str, mode: QueryMode) -> Result<HashSet<String>> {
        query::evaluate(self, query, mode)
    }

    /// All stemmed terms currently present as index keys.
    pub fn tokens(&self) -> HashSet<String> {
        self.postings.keys().cloned().collect()
    }

    /// Number of distinct stemmed terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Corpus-wide occurrence count for a raw token (lowercased before
    /// lookup). Stopwords are counted too.
    pub fn token_frequency(&self, raw: &str) -> u64 {
        self.frequencies
            .get(&raw.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// The `n` most frequent raw tokens, descending; ties break on the
    /// token for deterministic output.
    pub fn top_frequencies(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .frequencies
            .iter()
            .map(|(tok, count)| (tok.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Raw lowercased tokens that produced `stemmed` during indexing.
    pub fn origins(&self, stemmed: &str) -> HashSet<String> {
        self.origins.get(stemmed).cloned().unwrap_or_default()
    }

    pub(crate) fn universe(&self) -> &HashSet<String> {
        &self.documents
    }

    pub(crate) fn postings(&self, stemmed: &str) -> Option<&HashSet<String>> {
        self.postings.get(stemmed)
    }

    pub(crate) fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub(crate) fn parts(
        &self,
    ) -> (
        &HashSet<String>,
        &HashMap<String, HashSet<String>>,
        &HashMap<String, HashSet<String>>,
        &HashMap<String, u64>,
    ) {
        (&self.documents, &self.postings, &self.origins, &self.frequencies)
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}
