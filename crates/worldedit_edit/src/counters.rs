use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// Undo and redo level of one account. -1 means the stack is empty.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryLevels {
    pub undo: i32,
    pub redo: i32,
}

impl HistoryLevels {
    pub const EMPTY: HistoryLevels = HistoryLevels { undo: -1, redo: -1 };
    pub const ZEROED: HistoryLevels = HistoryLevels { undo: 0, redo: 0 };

    pub fn new(undo: i32, redo: i32) -> Self {
        Self { undo, redo }
    }
}

impl Default for HistoryLevels {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Per-account record of history levels.
pub trait CounterStore {
    /// Stored levels, `None` for accounts without a record.
    fn levels(&self, account: &str) -> Result<Option<HistoryLevels>>;

    fn set_levels(&self, account: &str, levels: HistoryLevels) -> Result<()>;

    /// Levels a fresh record starts with. Some backends seed new rows with zeroes.
    fn initial_levels(&self) -> HistoryLevels {
        HistoryLevels::EMPTY
    }
}

impl<T: CounterStore + ?Sized> CounterStore for &T {
    fn levels(&self, account: &str) -> Result<Option<HistoryLevels>> {
        (**self).levels(account)
    }

    fn set_levels(&self, account: &str, levels: HistoryLevels) -> Result<()> {
        (**self).set_levels(account, levels)
    }

    fn initial_levels(&self) -> HistoryLevels {
        (**self).initial_levels()
    }
}

#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    accounts: Mutex<HashMap<String, HistoryLevels>>,
    initial: HistoryLevels,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_levels(initial: HistoryLevels) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            initial,
        }
    }
}

impl CounterStore for MemoryCounterStore {
    fn levels(&self, account: &str) -> Result<Option<HistoryLevels>> {
        Ok(self.accounts.lock().get(account).copied())
    }

    fn set_levels(&self, account: &str, levels: HistoryLevels) -> Result<()> {
        self.accounts.lock().insert(account.to_string(), levels);
        Ok(())
    }

    fn initial_levels(&self) -> HistoryLevels {
        self.initial
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct CounterFile {
    #[serde(default)]
    accounts: BTreeMap<String, HistoryLevels>,
}

/// Counter store persisted as a TOML table, rewritten on every update.
#[derive(Debug)]
pub struct TomlCounterStore {
    path: PathBuf,
    file: Mutex<CounterFile>,
    initial: HistoryLevels,
}

impl TomlCounterStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = if path.exists() {
            let txt = fs::read_to_string(&path)?;
            toml::from_str(&txt).map_err(|err| EngineError::counter_store(format!("{}: {}", path.display(), err)))?
        } else {
            CounterFile::default()
        };
        log::debug!("opened counter store {} with {} accounts", path.display(), file.accounts.len());
        Ok(Self {
            path,
            file: Mutex::new(file),
            initial: HistoryLevels::EMPTY,
        })
    }

    pub fn with_initial_levels(mut self, initial: HistoryLevels) -> Self {
        self.initial = initial;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CounterStore for TomlCounterStore {
    fn levels(&self, account: &str) -> Result<Option<HistoryLevels>> {
        Ok(self.file.lock().accounts.get(account).copied())
    }

    fn set_levels(&self, account: &str, levels: HistoryLevels) -> Result<()> {
        let mut file = self.file.lock();
        file.accounts.insert(account.to_string(), levels);
        let text = toml::to_string(&*file).map_err(EngineError::counter_store)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn initial_levels(&self) -> HistoryLevels {
        self.initial
    }
}
