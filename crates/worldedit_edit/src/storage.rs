use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    Undo,
    Redo,
}

impl SnapshotKind {
    fn prefix(self) -> &'static str {
        match self {
            SnapshotKind::Undo => "undo",
            SnapshotKind::Redo => "redo",
        }
    }
}

/// File layout of the storage directory:
/// `clipboard-{account}.dat`, `undo-{account}-{level}.dat`, `redo-{account}-{level}.dat`.
#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    pub fn clipboard_path(&self, account: &str) -> PathBuf {
        self.dir.join(format!("clipboard-{account}.dat"))
    }

    pub fn snapshot_path(&self, kind: SnapshotKind, account: &str, level: i32) -> PathBuf {
        self.dir.join(format!("{}-{account}-{level}.dat", kind.prefix()))
    }

    pub fn undo_path(&self, account: &str, level: i32) -> PathBuf {
        self.snapshot_path(SnapshotKind::Undo, account, level)
    }

    pub fn redo_path(&self, account: &str, level: i32) -> PathBuf {
        self.snapshot_path(SnapshotKind::Redo, account, level)
    }

    /// Levels of all snapshot files of one kind on disk for `account`, ascending.
    pub fn levels(&self, kind: SnapshotKind, account: &str) -> Result<Vec<i32>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let prefix = format!("{}-{account}-", kind.prefix());
        let mut levels = Vec::new();
        for entry in entries {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(level) = name.strip_prefix(&prefix).and_then(|rest| rest.strip_suffix(".dat")).and_then(|l| l.parse().ok()) {
                levels.push(level);
            }
        }
        levels.sort_unstable();
        Ok(levels)
    }

    /// Removes a file. Returns false if it did not exist.
    pub fn remove(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
