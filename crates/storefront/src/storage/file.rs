use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::form_urlencoded;

use super::{KeyValueStore, StorageError};

/// File-backed key-value store.
///
/// Each key lives in `<dir>/<key>.json`, with the key percent-encoded so
/// distinct keys always map to distinct, safe file names. Writes land in a hidden temporary file which is then renamed over
/// the target, so readers see either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file a key is stored in.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    fn io_error(key: &str, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_owned(),
            path: path.to_path_buf(),
            source,
        }
    }
}

fn file_stem(key: &str) -> String {
    let stem: String = form_urlencoded::byte_serialize(key.as_bytes()).collect();
    // "." and ".." would escape or alias the directory.
    if !stem.is_empty() && stem.chars().all(|c| c == '.') {
        stem.replace('.', "%2E")
    } else {
        stem
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, &path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, &self.dir, e))?;

        let tmp = self.dir.join(format!(".{}.json.tmp", file_stem(key)));
        fs::write(&tmp, value).map_err(|e| Self::io_error(key, &tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| Self::io_error(key, &path, e))?;

        debug!(key, path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, &path, e)),
        }
    }
}
