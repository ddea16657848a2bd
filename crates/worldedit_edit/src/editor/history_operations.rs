use super::WorldEditor;
use crate::{CounterStore, Result, World, viewers::ViewerSink};

impl<C: CounterStore> WorldEditor<C> {
    /// Reverts the last edit of `account`. Returns false if there was nothing to undo.
    pub fn undo(&self, account: &str, world: &mut dyn World, viewers: &mut dyn ViewerSink) -> Result<bool> {
        self.history.undo(account, world, viewers)
    }

    /// Re-applies the last undone edit of `account`. Returns false if there was nothing to redo.
    pub fn redo(&self, account: &str, world: &mut dyn World, viewers: &mut dyn ViewerSink) -> Result<bool> {
        self.history.redo(account, world, viewers)
    }
}
