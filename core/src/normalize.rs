use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Snowball stemmer selection, addressable by name so a snapshot can
/// reconstruct the same stemmer on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemAlgorithm {
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl StemAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            StemAlgorithm::Danish => "danish",
            StemAlgorithm::Dutch => "dutch",
            StemAlgorithm::English => "english",
            StemAlgorithm::Finnish => "finnish",
            StemAlgorithm::French => "french",
            StemAlgorithm::German => "german",
            StemAlgorithm::Hungarian => "hungarian",
            StemAlgorithm::Italian => "italian",
            StemAlgorithm::Norwegian => "norwegian",
            StemAlgorithm::Portuguese => "portuguese",
            StemAlgorithm::Romanian => "romanian",
            StemAlgorithm::Russian => "russian",
            StemAlgorithm::Spanish => "spanish",
            StemAlgorithm::Swedish => "swedish",
            StemAlgorithm::Turkish => "turkish",
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "danish" => Ok(StemAlgorithm::Danish),
            "dutch" => Ok(StemAlgorithm::Dutch),
            "english" => Ok(StemAlgorithm::English),
            "finnish" => Ok(StemAlgorithm::Finnish),
            "french" => Ok(StemAlgorithm::French),
            "german" => Ok(StemAlgorithm::German),
            "hungarian" => Ok(StemAlgorithm::Hungarian),
            "italian" => Ok(StemAlgorithm::Italian),
            "norwegian" => Ok(StemAlgorithm::Norwegian),
            "portuguese" => Ok(StemAlgorithm::Portuguese),
            "romanian" => Ok(StemAlgorithm::Romanian),
            "russian" => Ok(StemAlgorithm::Russian),
            "spanish" => Ok(StemAlgorithm::Spanish),
            "swedish" => Ok(StemAlgorithm::Swedish),
            "turkish" => Ok(StemAlgorithm::Turkish),
            other => Err(Error::UnknownStemmer(other.to_string())),
        }
    }

    fn to_snowball(self) -> Algorithm {
        match self {
            StemAlgorithm::Danish => Algorithm::Danish,
            StemAlgorithm::Dutch => Algorithm::Dutch,
            StemAlgorithm::English => Algorithm::English,
            StemAlgorithm::Finnish => Algorithm::Finnish,
            StemAlgorithm::French => Algorithm::French,
            StemAlgorithm::German => Algorithm::German,
            StemAlgorithm::Hungarian => Algorithm::Hungarian,
            StemAlgorithm::Italian => Algorithm::Italian,
            StemAlgorithm::Norwegian => Algorithm::Norwegian,
            StemAlgorithm::Portuguese => Algorithm::Portuguese,
            StemAlgorithm::Romanian => Algorithm::Romanian,
            StemAlgorithm::Russian => Algorithm::Russian,
            StemAlgorithm::Spanish => Algorithm::Spanish,
            StemAlgorithm::Swedish => Algorithm::Swedish,
            StemAlgorithm::Turkish => Algorithm::Turkish,
        }
    }
}

/// Per-token normalization pipeline: lowercase, stopword check, stem.
///
/// The stopword set and stemmer are fixed for the lifetime of the owning
/// index; reindexing with a different configuration means a new index.
pub struct Normalizer {
    stopwords: HashSet<String>,
    algorithm: Option<StemAlgorithm>,
    stemmer: Option<Stemmer>,
}

impl Normalizer {
    pub fn new(algorithm: Option<StemAlgorithm>, stopwords: HashSet<String>) -> Self {
        let stopwords = stopwords
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect::<HashSet<_>>();
        let stemmer = algorithm.map(|a| Stemmer::create(a.to_snowball()));
        Self { stopwords, algorithm, stemmer }
    }

    pub fn algorithm(&self) -> Option<StemAlgorithm> {
        self.algorithm
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn is_stopword(&self, lowered: &str) -> bool {
        self.stopwords.contains(lowered)
    }

    fn stem(&self, lowered: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(lowered).to_string(),
            None => lowered.to_string(),
        }
    }

    /// Index-side pipeline: lowercase, then reject stopwords, then stem.
    /// Stemming only runs on tokens that survive the stopword check.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let lowered = raw.to_lowercase();
        if self.is_stopword(&lowered) {
            return None;
        }
        Some(self.stem(&lowered))
    }

    /// Query-side fold: lowercase and stem WITHOUT the stopword check.
    /// `find_by_term` and boolean-mode operands go through this, so a
    /// stopword can still be looked up directly (and will miss, since it
    /// was never indexed). Kept asymmetric with [`Normalizer::normalize`]
    /// on purpose; see the crate docs.
    pub fn fold(&self, term: &str) -> String {
        self.stem(&term.to_lowercase())
    }
}
