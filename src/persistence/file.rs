use super::KvStore;
use crate::app_dirs::AppDirs;
use crate::error::PersistenceError;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub fn new() -> Self {
        let dir = AppDirs::state_dir().unwrap_or_else(|| PathBuf::from("trailpin_data"));
        Self { dir }
    }

    pub fn with_dir<P: AsRef<Path>>(p: P) -> Self {
        Self {
            dir: p.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("unusable storage key {:?}", key),
            )
            .into());
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Default for FileKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        // Write next to the target then rename over it so readers never see
        // a half-written value.
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
