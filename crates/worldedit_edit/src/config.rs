use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

pub const DEFAULT_MAX_UNDOS: i32 = 50;
pub const DEFAULT_SECTION_WIDTH: i32 = 200;
pub const DEFAULT_SECTION_HEIGHT: i32 = 150;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditConfig {
    /// Directory holding clipboards and undo/redo snapshots.
    pub storage_dir: PathBuf,
    /// Undo snapshots kept per account.
    pub max_undos: i32,
    /// Buffer in front of the gzip streams.
    pub buffer_size: usize,
    /// Granularity of the per-client viewer cache.
    pub section_width: i32,
    pub section_height: i32,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("worldedit"),
            max_undos: DEFAULT_MAX_UNDOS,
            buffer_size: worldedit_engine::section::BUFFER_SIZE,
            section_width: DEFAULT_SECTION_WIDTH,
            section_height: DEFAULT_SECTION_HEIGHT,
        }
    }
}

impl EditConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|err| EngineError::from_open(err, path))?;
        toml::from_str(&txt).map_err(|err| EngineError::generic(format!("invalid config {}: {}", path.display(), err)))
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        let text = toml::to_string(self).map_err(EngineError::generic)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Loads `options.toml` from the user configuration directory, falling back to defaults.
    pub fn load_options() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "worldedit") {
            let options_file = proj_dirs.config_dir().join("options.toml");
            if options_file.exists() {
                match Self::load(&options_file) {
                    Ok(result) => return result,
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    pub fn store_options(&self) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "worldedit") {
            if !proj_dirs.config_dir().exists() && fs::create_dir_all(proj_dirs.config_dir()).is_err() {
                log::error!("Can't create configuration directory {:?}", proj_dirs.config_dir());
                return;
            }
            if let Err(err) = self.store(&proj_dirs.config_dir().join("options.toml")) {
                log::error!("Error writing options file: {}", err);
            }
        }
    }
}
