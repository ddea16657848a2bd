//! The outward facing editor: clipboard capture and transforms, paste, undo/redo and
//! region saves for any number of accounts sharing one storage directory.

use crate::{CounterStore, EditConfig, FrameImportance, HistoryStore, SectionCache, SectionFormat, Size, Storage};

mod clipboard_operations;
mod history_operations;
mod paste_operations;
mod region_operations;

pub struct WorldEditor<C: CounterStore> {
    config: EditConfig,
    history: HistoryStore<C>,
}

impl<C: CounterStore> WorldEditor<C> {
    pub fn new(config: EditConfig, frames: FrameImportance, counters: C) -> Self {
        let storage = Storage::new(config.storage_dir.clone());
        let format = SectionFormat::new(frames).with_buffer_size(config.buffer_size);
        let history = HistoryStore::new(counters, storage, format).with_max_undos(config.max_undos);
        Self { config, history }
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryStore<C> {
        &self.history
    }

    pub fn storage(&self) -> &Storage {
        self.history.storage()
    }

    pub fn format(&self) -> &SectionFormat {
        self.history.format()
    }

    /// Viewer cache for a world of `world_size` using the configured section size.
    pub fn section_cache(&self, world_size: Size, max_clients: usize) -> SectionCache {
        SectionCache::new(
            world_size,
            Size::new(self.config.section_width, self.config.section_height),
            max_clients,
        )
    }
}
