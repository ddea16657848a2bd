use super::WorldEditor;
use crate::{ClipboardHeader, CounterStore, EngineError, HeaderConvention, Rectangle, Result, SectionHeader, Size, TileGrid, World};

impl<C: CounterStore> WorldEditor<C> {
    /// Copies `area` of the world into the clipboard of `account`, replacing the previous one.
    pub fn capture_clipboard(&self, account: &str, area: Rectangle, world: &dyn World) -> Result<()> {
        self.storage().ensure_dir()?;
        let path = self.storage().clipboard_path(account);
        self.format().write_section(&path, area, world, None)?;
        log::info!("{} copied {} to the clipboard", account, area);
        Ok(())
    }

    /// Cell count of the clipboard of `account`.
    ///
    /// # Errors
    ///
    /// `NotFound` if the account never copied anything.
    pub fn clipboard_size(&self, account: &str) -> Result<Size> {
        let header = self.format().read_header(&self.storage().clipboard_path(account), HeaderConvention::Clipboard)?;
        Ok(header.stored_size())
    }

    /// Cell count of a selection.
    pub fn selection_size(&self, area: Rectangle) -> Size {
        area.size.max_zero()
    }

    /// Mirrors the clipboard of `account`.
    pub fn flip_clipboard(&self, account: &str, horizontal: bool, vertical: bool) -> Result<()> {
        self.transform_clipboard(account, |grid| grid.flip(horizontal, vertical))
    }

    /// Rotates the clipboard of `account` clockwise. Accepts multiples of 90, negative values
    /// turn counter clockwise.
    pub fn rotate_clipboard(&self, account: &str, degrees: i32) -> Result<()> {
        let quarters = match degrees.rem_euclid(360) {
            90 => 1,
            180 => 2,
            270 => 3,
            _ => return Err(EngineError::InvalidRotation { degrees }),
        };
        self.transform_clipboard(account, |grid| grid.rotate_quarters(quarters))
    }

    fn transform_clipboard(&self, account: &str, transform: impl FnOnce(&TileGrid) -> TileGrid) -> Result<()> {
        let path = self.storage().clipboard_path(account);
        let (header, grid) = self.format().load_grid(&path, HeaderConvention::Clipboard)?;
        let result = transform(&grid);

        let origin = header.origin();
        let header = ClipboardHeader {
            reserved_a: origin.x,
            reserved_b: origin.y,
            stored_width: result.width(),
            stored_height: result.height(),
        };
        self.format().write_grid(&path, SectionHeader::Clipboard(header), &result)?;
        log::debug!("rewrote clipboard of {} as {}", account, result.size());
        Ok(())
    }
}
