//! Writing records and maintaining the dataset index.


use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use relative_path::RelativePathBuf;
use serde::{Deserialize, Deserializer, Serialize};
use tempfile::NamedTempFile;

use crate::record::Record;

/// File name of the index inside of the dataset directory.
pub const INDEX: &str = "index.json";

/// The dataset index, listing every document identifier once in the order
/// it was first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    #[serde(default, deserialize_with = "nullable")]
    files: Vec<RelativePathBuf>,
}

/// Treat a null list the same as a missing one.
fn nullable<'de, D>(deserializer: D) -> Result<Vec<RelativePathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

impl Index {
    /// Construct an index out of the given identifiers, dropping duplicates.
    pub fn new<I>(files: I) -> Self
    where
        I: IntoIterator<Item = RelativePathBuf>,
    {
        Self::default().merge(files)
    }

    /// Identifiers in the index.
    pub fn files(&self) -> &[RelativePathBuf] {
        &self.files
    }

    /// Merge new identifiers into the index.
    ///
    /// Existing identifiers keep their position and new ones are appended in
    /// order. Duplicates are dropped, whether they come from the existing
    /// index or from `files`.
    pub fn merge<I>(&self, files: I) -> Index
    where
        I: IntoIterator<Item = RelativePathBuf>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(self.files.len());

        for file in self.files.iter().cloned().chain(files) {
            if seen.insert(file.clone()) {
                out.push(file);
            }
        }

        Index { files: out }
    }

    /// Load the index from the given path.
    ///
    /// A missing index is empty. An index which can't be parsed is an error.
    pub fn load(path: &Path) -> Result<Index> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No index, starting empty");
                return Ok(Index::default());
            }
            Err(error) => {
                return Err(error).with_context(|| anyhow!("{}", path.display()));
            }
        };

        let index = serde_json::from_slice(&data)
            .with_context(|| anyhow!("{}: malformed index", path.display()))?;

        Ok(index)
    }

    /// Save the index to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_vec_pretty(self)?;
        write_atomic(path, &data)
    }
}

/// The outcome of writing records into a dataset.
#[derive(Debug)]
pub struct Summary {
    /// Identifiers of every document written, in order.
    pub written: Vec<RelativePathBuf>,
    /// Identifiers which were not in the index before.
    pub added: Vec<RelativePathBuf>,
    /// The index as saved.
    pub index: Index,
}

/// A directory of generated documents.
pub struct Dataset {
    dir: PathBuf,
}

impl Dataset {
    /// Open a dataset in the given directory.
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// The directory of the dataset.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the index.
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX)
    }

    /// Write one document per record and merge their identifiers into the
    /// index.
    ///
    /// The index is loaded before anything is written and saved after every
    /// document has been written, so a failed run never leaves a partially
    /// merged index behind.
    pub fn write(&self, records: &[Record]) -> Result<Summary> {
        fs::create_dir_all(&self.dir).with_context(|| anyhow!("{}", self.dir.display()))?;

        let index_path = self.index_path();
        let index = Index::load(&index_path)?;

        let mut written = Vec::with_capacity(records.len());

        for record in records {
            let id = record.identifier();
            let path = id.to_path(&self.dir);
            let data = serde_json::to_vec_pretty(record)?;
            write_atomic(&path, &data)?;
            tracing::debug!(verb = record.target(), %id, "Wrote document");
            written.push(id);
        }

        let merged = index.merge(written.iter().cloned());
        merged.save(&index_path)?;

        let existing = index.files().iter().collect::<HashSet<_>>();

        let added = merged
            .files()
            .iter()
            .filter(|id| !existing.contains(id))
            .cloned()
            .collect::<Vec<_>>();

        tracing::info!(
            written = written.len(),
            added = added.len(),
            indexed = merged.files().len(),
            "Updated {}",
            index_path.display()
        );

        Ok(Summary {
            written,
            added,
            index: merged,
        })
    }
}

/// Write a file by persisting a temporary file next to it.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut file =
        NamedTempFile::new_in(dir).with_context(|| anyhow!("{}", dir.display()))?;
    file.write_all(data)?;

    // Temporary files are created private, documents are meant to be served.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    file.persist(path)
        .with_context(|| anyhow!("{}", path.display()))?;
    Ok(())
}
