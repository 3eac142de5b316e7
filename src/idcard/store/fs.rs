use super::SlotBackend;
use crate::error::{CardError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed slots: slot `key` lives at `<root>/<key>.json`.
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(CardError::Store(format!("Invalid slot name: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl SlotBackend for FileSlot {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CardError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("data"));
        assert_eq!(slot.read_slot("employees").unwrap(), None);
    }

    #[test]
    fn write_creates_root_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let slot = FileSlot::new(root.clone());

        slot.write_slot("employees", "[]").unwrap();
        assert!(root.join("employees.json").exists());
        assert_eq!(slot.read_slot("employees").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_replaces_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().to_path_buf());
        slot.write_slot("employees", "[1]").unwrap();
        slot.write_slot("employees", "[2]").unwrap();

        assert_eq!(slot.read_slot("employees").unwrap().as_deref(), Some("[2]"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn rejects_path_like_slot_names() {
        let slot = FileSlot::new(PathBuf::from("/tmp"));
        assert!(slot.slot_path("../etc").is_err());
        assert!(slot.slot_path("a/b").is_err());
        assert!(slot.slot_path("").is_err());
        assert!(slot.slot_path("employees").is_ok());
    }
}
