use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::Index;
use crate::normalize::{Normalizer, StemAlgorithm};

const MAGIC: &[u8; 4] = b"DFIX";
const VERSION: u32 = 1;

/// On-disk snapshot body. The stemmer is persisted as its identifier only;
/// `load` reconstructs an equivalent stemmer from it.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    documents: HashSet<String>,
    postings: HashMap<String, HashSet<String>>,
    origins: HashMap<String, HashSet<String>>,
    frequencies: HashMap<String, u64>,
    stopwords: HashSet<String>,
    stemmer: Option<String>,
}

impl Index {
    /// Write the complete index state to `path`, overwriting any existing
    /// file. A failed dump may leave a corrupt or missing file behind;
    /// recovery is the caller's responsibility.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let (documents, postings, origins, frequencies) = self.parts();
        let snapshot = Snapshot {
            documents: documents.clone(),
            postings: postings.clone(),
            origins: origins.clone(),
            frequencies: frequencies.clone(),
            stopwords: self.normalizer().stopwords().clone(),
            stemmer: self.normalizer().algorithm().map(|a| a.as_str().to_string()),
        };
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
        tracing::info!(
            path = %path.display(),
            documents = snapshot.documents.len(),
            terms = snapshot.postings.len(),
            "dumped index snapshot"
        );
        Ok(())
    }

    /// Read a snapshot written by [`Index::dump`] back into an index that
    /// answers `find`, `find_by_term`, `tokens` and `len` identically to
    /// the dumped instance.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Index> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(Error::Snapshot(format!(
                "bad magic bytes in {}",
                path.display()
            )));
        }
        let mut version = [0u8; 4];
        reader.read_exact(&mut version)?;
        let found = u32::from_le_bytes(version);
        if found != VERSION {
            return Err(Error::Version { found, expected: VERSION });
        }

        let snapshot: Snapshot = bincode::deserialize_from(&mut reader)?;
        let algorithm = snapshot
            .stemmer
            .as_deref()
            .map(StemAlgorithm::parse)
            .transpose()?;
        let normalizer = Normalizer::new(algorithm, snapshot.stopwords);
        tracing::info!(
            path = %path.display(),
            documents = snapshot.documents.len(),
            terms = snapshot.postings.len(),
            "loaded index snapshot"
        );
        Ok(Index::from_parts(
            snapshot.documents,
            snapshot.postings,
            snapshot.origins,
            snapshot.frequencies,
            normalizer,
        ))
    }
}
