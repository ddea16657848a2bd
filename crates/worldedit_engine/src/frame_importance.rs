/// Host supplied table telling which tile types carry frame coordinates.
///
/// Indexed by tile type id. Types outside the table are treated as not frame important.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameImportance {
    table: Vec<bool>,
}

impl FrameImportance {
    pub fn new(table: Vec<bool>) -> Self {
        Self { table }
    }

    /// Builds a table of `len` entries with the given ids marked as frame important.
    pub fn from_ids(len: usize, ids: impl IntoIterator<Item = u16>) -> Self {
        let mut table = vec![false; len];
        for id in ids {
            if let Some(entry) = table.get_mut(id as usize) {
                *entry = true;
            } else {
                log::warn!("frame importance id {} outside table of {} types", id, len);
            }
        }
        Self { table }
    }

    pub fn is_frame_important(&self, tile_type: u16) -> bool {
        self.table.get(tile_type as usize).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
