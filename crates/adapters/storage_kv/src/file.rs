//! File-per-key [`KeyValueStore`].

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Durable store keeping each slot in `<dir>/<key>.json`.
///
/// Writes go to a uniquely named temp file in the same directory and are
/// persisted into place, so a reader sees either the old or the new
/// collection. A slot whose bytes are not UTF-8 reads as
/// [`StorageError::Corrupt`].
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&path)(err)),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| StorageError::Corrupt {
                key: key.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_error(&self.dir))?;
        tmp.write_all(value.as_bytes())
            .map_err(io_error(tmp.path()))?;
        tmp.persist(&path)
            .map_err(|err| io_error(&path)(err.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&path)(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_directory_when_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");

        let store = FileStore::open(&dir).unwrap();

        assert!(store.dir().is_dir());
    }

    #[test]
    fn should_persist_value_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        FileStore::open(tmp.path()).unwrap().set("hotel_rooms", "[]").unwrap();

        let reopened = FileStore::open(tmp.path()).unwrap();

        assert_eq!(reopened.get("hotel_rooms").unwrap().as_deref(), Some("[]"));
        assert!(tmp.path().join("hotel_rooms.json").is_file());
    }

    #[test]
    fn should_return_none_when_file_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("hotel_guests").unwrap(), None);
    }

    #[test]
    fn should_report_corrupt_when_bytes_are_not_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("hotel_rooms.json"), [0xff, 0xfe, b'[', b']']).unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        let result = store.get("hotel_rooms");

        assert!(matches!(result, Err(StorageError::Corrupt { ref key }) if key == "hotel_rooms"));
    }

    #[test]
    fn should_leave_only_slot_files_after_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.set("hotel_rooms", "[]").unwrap();
        store.set("hotel_rooms", "[1]").unwrap();

        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["hotel_rooms.json"]);
        assert_eq!(store.get("hotel_rooms").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn should_remove_missing_file_without_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.remove("hotel_guests").unwrap();
        store.remove("hotel_guests").unwrap();
    }
}
