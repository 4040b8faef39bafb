use std::fs::{create_dir_all, read, read_dir, remove_file, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::UserStore;
use crate::user::UserRecord;

/// One JSON file per user inside a directory.
#[derive(Debug, Clone)]
pub struct FileUserStore {
    dir: PathBuf,
}

impl FileUserStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        create_dir_all(&dir).map_err(|e| StoreError::Io(format!("create_dir_all: {e}")))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // Escapes every byte outside [A-Za-z0-9-] so distinct emails never share a file.
    fn path_for(&self, email: &str) -> PathBuf {
        let mut fname = String::with_capacity(email.len() * 2);
        for b in email.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' {
                fname.push(b as char);
            } else {
                fname.push_str(&format!("_{b:02x}"));
            }
        }
        self.dir.join(format!("{fname}.json"))
    }

    // A failed write removes the partial file.
    fn write_record(mut file: impl Write, path: &Path, data: &[u8]) -> Result<(), StoreError> {
        if let Err(e) = file.write_all(data).and_then(|()| file.flush()) {
            if let Err(rm) = remove_file(path) {
                log::warn!("cannot remove partial user file {}: {rm}", path.display());
            }
            return Err(StoreError::Io(format!("write {}: {}", path.display(), e)));
        }
        Ok(())
    }

    fn read_record(path: &Path) -> Result<UserRecord, StoreError> {
        let data =
            read(path).map_err(|e| StoreError::Io(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_slice::<UserRecord>(&data)
            .map_err(|e| StoreError::Serialization(format!("{}: {e}", path.display())))
    }
}

impl UserStore for FileUserStore {
    fn get(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let path = self.path_for(email);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_record(&path).map(Some)
    }

    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let path = self.path_for(&record.email);
        let data =
            serde_json::to_vec_pretty(&record).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists(record.email));
            }
            Err(e) => {
                return Err(StoreError::Io(format!("create {}: {}", path.display(), e)));
            }
        };
        Self::write_record(file, &path, &data)
    }

    fn list_emails(&self) -> Result<Vec<String>, StoreError> {
        let mut emails = Vec::new();
        for entry in read_dir(&self.dir)
            .map_err(|e| StoreError::Io(format!("read_dir {}: {}", self.dir.display(), e)))?
        {
            let entry = entry.map_err(|e| StoreError::Io(e.to_string()))?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|x| x.to_str()) == Some("json") {
                emails.push(Self::read_record(&path)?.email);
            }
        }
        emails.sort();
        Ok(emails)
    }

    fn backend_name(&self) -> &str {
        "file"
    }
}
