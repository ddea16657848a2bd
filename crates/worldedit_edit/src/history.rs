//! Per-account undo/redo history backed by snapshot files and a counter store.
//!
//! Undo level `n` lives in `undo-{account}-{n}.dat` and holds the world content an edit
//! replaced. Undoing moves the live content into a redo snapshot before restoring, redoing
//! does the reverse. Files that vanished behind the counters' back read as "nothing to do".

use std::path::Path;

use worldedit_engine::{HeaderConvention, SectionFormat, place_grid};

use crate::{
    CounterStore, EngineError, HistoryLevels, Rectangle, Result, World,
    storage::{SnapshotKind, Storage},
    viewers::ViewerSink,
};

/// Undo snapshots retained per account.
pub const MAX_UNDOS: i32 = 50;

pub struct HistoryStore<C: CounterStore> {
    counters: C,
    storage: Storage,
    format: SectionFormat,
    max_undos: i32,
}

impl<C: CounterStore> HistoryStore<C> {
    pub fn new(counters: C, storage: Storage, format: SectionFormat) -> Self {
        Self {
            counters,
            storage,
            format,
            max_undos: MAX_UNDOS,
        }
    }

    pub fn with_max_undos(mut self, max_undos: i32) -> Self {
        self.max_undos = max_undos.max(1);
        self
    }

    pub fn counters(&self) -> &C {
        &self.counters
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn format(&self) -> &SectionFormat {
        &self.format
    }

    pub fn max_undos(&self) -> i32 {
        self.max_undos
    }

    /// Current levels, or the store's initial levels for unknown accounts.
    pub fn levels(&self, account: &str) -> Result<HistoryLevels> {
        Ok(self.counters.levels(account)?.unwrap_or_else(|| self.counters.initial_levels()))
    }

    /// Undo levels with a snapshot file on disk.
    pub fn undo_files(&self, account: &str) -> Result<Vec<i32>> {
        self.storage.levels(SnapshotKind::Undo, account)
    }

    pub fn redo_files(&self, account: &str) -> Result<Vec<i32>> {
        self.storage.levels(SnapshotKind::Redo, account)
    }

    /// Snapshots `area` before an edit. Must run before the world is touched.
    ///
    /// Drops the whole redo stack, pushes a new undo level and trims the oldest snapshot
    /// beyond the retention window. Returns the new undo level.
    pub fn record_undo(&self, account: &str, area: Rectangle, world: &dyn World) -> Result<i32> {
        self.storage.ensure_dir()?;
        let levels = self.levels(account)?;

        for level in self.redo_files(account)? {
            self.storage.remove(&self.storage.redo_path(account, level))?;
        }

        let undo_level = levels.undo + 1;
        let area = area.intersect(&world.bounds());
        self.format.write_section(&self.storage.undo_path(account, undo_level), area, world, None)?;
        self.counters.set_levels(account, HistoryLevels::new(undo_level, -1))?;
        log::info!("recorded undo level {} for {} covering {}", undo_level, account, area);

        let expired = undo_level - self.max_undos;
        if expired >= 0 {
            if let Err(err) = self.storage.remove(&self.storage.undo_path(account, expired)) {
                log::warn!("failed to delete expired undo level {} of {}: {}", expired, account, err);
            }
        }
        Ok(undo_level)
    }

    /// Reverts the most recent undo level. Returns false if there is nothing to undo.
    pub fn undo(&self, account: &str, world: &mut dyn World, viewers: &mut dyn ViewerSink) -> Result<bool> {
        let levels = self.levels(account)?;
        let target = HistoryLevels::new(levels.undo - 1, levels.redo + 1);
        if target.undo < -1 {
            return Ok(false);
        }

        let source = self.storage.undo_path(account, levels.undo);
        let snapshot = self.storage.redo_path(account, target.redo);
        if !self.swap(account, &source, &snapshot, target, world, viewers)? {
            log::info!("undo level {} of {} has no snapshot", levels.undo, account);
            return Ok(false);
        }
        log::info!("undo for {}: levels now {:?}", account, target);
        Ok(true)
    }

    /// Re-applies the most recently undone edit. Returns false if there is nothing to redo.
    pub fn redo(&self, account: &str, world: &mut dyn World, viewers: &mut dyn ViewerSink) -> Result<bool> {
        let levels = self.levels(account)?;
        let target = HistoryLevels::new(levels.undo + 1, levels.redo - 1);
        if target.redo < -1 {
            return Ok(false);
        }

        let source = self.storage.redo_path(account, levels.redo);
        let snapshot = self.storage.undo_path(account, target.undo);
        if !self.swap(account, &source, &snapshot, target, world, viewers)? {
            log::info!("redo level {} of {} has no snapshot", levels.redo, account);
            return Ok(false);
        }
        log::info!("redo for {}: levels now {:?}", account, target);
        Ok(true)
    }

    /// Saves the live content covered by `source` into `snapshot`, restores `source` into the
    /// world and commits `target`. Returns false if `source` does not exist.
    ///
    /// Levels are committed before `source` is deleted. A failed delete is logged and leaves a
    /// stale file that the next snapshot of that level overwrites.
    fn swap(
        &self,
        account: &str,
        source: &Path,
        snapshot: &Path,
        target: HistoryLevels,
        world: &mut dyn World,
        viewers: &mut dyn ViewerSink,
    ) -> Result<bool> {
        let (header, grid) = match self.format.load_grid(source, HeaderConvention::Region) {
            Ok(loaded) => loaded,
            Err(EngineError::NotFound { .. }) => return Ok(false),
            Err(err) => return Err(err),
        };

        let area = header.rect().intersect(&world.bounds());
        self.format.write_section(snapshot, area, world, None)?;

        let touched = place_grid(world, &grid, header.origin());
        viewers.invalidate_area(touched);
        self.counters.set_levels(account, target)?;

        if let Err(err) = self.storage.remove(source) {
            log::warn!("failed to delete restored snapshot {}: {}", source.display(), err);
        }
        Ok(true)
    }
}
