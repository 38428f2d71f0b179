use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::{Casting, Transaction},
    utils::{app_data_dir, ensure_dir},
};

use super::{Result, StorageBackend};

const CASTINGS_FILE: &str = "castings.json";
const TRANSACTIONS_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores each collection as one pretty-printed JSON file under the app data
/// directory.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.root.join(file);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&data) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(file, error = %err, "unreadable blob, starting empty");
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        let path = self.root.join(file);
        let json = serde_json::to_string_pretty(items)?;
        let tmp = tmp_path(&path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_castings(&self) -> Result<Vec<Casting>> {
        Ok(self.read_collection(CASTINGS_FILE))
    }

    fn save_castings(&self, castings: &[Casting]) -> Result<()> {
        self.write_collection(CASTINGS_FILE, castings)
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.read_collection(TRANSACTIONS_FILE))
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_collection(TRANSACTIONS_FILE, transactions)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;
    use tempfile::tempdir;

    #[test]
    fn missing_files_load_as_empty() {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        assert!(storage.load_castings().unwrap().is_empty());
        assert!(storage.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        fs::write(temp.path().join(TRANSACTIONS_FILE), "{not json").unwrap();
        assert!(storage.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        let casting = Casting::new("Banco X", "Agência Models", parse_date("2024-02-10").unwrap());
        storage.save_castings(std::slice::from_ref(&casting)).unwrap();
        let loaded = storage.load_castings().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, casting.id);
        assert_eq!(loaded[0].client, "Banco X");
    }
}
