use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use tempfile::env::temp_dir;

use crate::{storage::table::Table, types::error::DatabaseError};

pub fn get_unix_timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis()
}

pub fn create_temp_db_path() -> PathBuf {
    let mut temp_path = temp_dir();
    temp_path.push(format!("lumbung_test_{}.db", get_unix_timestamp_millis()));
    temp_path
}

pub fn create_temp_db_path_with_prefix(prefix: &str) -> PathBuf {
    let mut temp_path = temp_dir();
    temp_path.push(format!("{}_{}.db", prefix, get_unix_timestamp_millis()));
    temp_path
}

/// Test fixture: a database file under the system temp directory,
/// removed on drop.
pub struct TempDatabase {
    pub path: PathBuf,
}

impl TempDatabase {
    pub fn new() -> Self {
        Self {
            path: create_temp_db_path(),
        }
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            path: create_temp_db_path_with_prefix(prefix),
        }
    }

    pub fn open_table(&self) -> Result<Table, DatabaseError> {
        Table::open(&self.path)
    }
}

impl Default for TempDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
