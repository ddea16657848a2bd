use super::WorldEditor;
use crate::{CounterStore, HeaderConvention, PasteOutcome, PasteRequest, Result, World, apply_paste, protection::RegionGuard, viewers::ViewerSink};

impl<C: CounterStore> WorldEditor<C> {
    /// Pastes the clipboard of `account` at the requested anchor.
    ///
    /// The clipboard is decoded completely before the undo snapshot is taken and the world
    /// is touched, so a damaged clipboard fails without side effects.
    ///
    /// # Errors
    ///
    /// `NotFound` without a clipboard, `CorruptHeader`/`TruncatedInput` for damaged files.
    pub fn paste(
        &self,
        account: &str,
        request: &PasteRequest<'_>,
        world: &mut dyn World,
        guard: &dyn RegionGuard,
        viewers: &mut dyn ViewerSink,
    ) -> Result<PasteOutcome> {
        let path = self.storage().clipboard_path(account);
        let (header, grid) = self.format().load_grid(&path, HeaderConvention::Clipboard)?;
        let destination = request.alignment.destination(request.anchor, header.size());

        let undo_level = self.history.record_undo(account, destination, world)?;
        let mut outcome = apply_paste(world, &grid, destination, request, guard);
        outcome.undo_level = undo_level;

        viewers.invalidate_area(destination.intersect(&world.bounds()));
        log::info!(
            "{} pasted clipboard to {}: {} written, {} filtered, {} protected",
            account,
            destination,
            outcome.written,
            outcome.skipped_filtered,
            outcome.skipped_protected
        );
        Ok(outcome)
    }
}
