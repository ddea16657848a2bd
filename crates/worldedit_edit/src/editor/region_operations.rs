use std::path::Path;

use worldedit_engine::place_grid;

use super::WorldEditor;
use crate::{CounterStore, HeaderConvention, Rectangle, Result, World, viewers::ViewerSink};

impl<C: CounterStore> WorldEditor<C> {
    /// Saves `area` to `path`, optionally followed by every container inside the area.
    ///
    /// Returns the number of containers written.
    pub fn save_region(&self, area: Rectangle, path: &Path, include_containers: bool, world: &dyn World) -> Result<usize> {
        let containers = include_containers.then(|| world.containers_in(area));
        self.format().write_section(path, area, world, containers.as_deref())?;
        let count = containers.map_or(0, |c| c.len());
        log::info!("saved region {} to {} with {} containers", area, path.display(), count);
        Ok(count)
    }

    /// Restores a region saved by [`Self::save_region`] at its stored origin.
    ///
    /// With `expect_containers` the trailer is read and every container placed into the
    /// world; containers that find no free slot are dropped. Returns the touched area.
    pub fn load_region(&self, path: &Path, expect_containers: bool, world: &mut dyn World, viewers: &mut dyn ViewerSink) -> Result<Rectangle> {
        let reader = self.format().read_section(path, HeaderConvention::Region)?;
        let origin = reader.header().origin();
        let (grid, containers) = if expect_containers {
            reader.into_grid_with_containers(origin)?
        } else {
            (reader.into_grid()?, Vec::new())
        };

        let touched = place_grid(world, &grid, origin);
        let total = containers.len();
        let mut placed = 0;
        for container in containers {
            if world.place_container(container) {
                placed += 1;
            } else {
                log::warn!("no free container slot left, dropped {} containers", total - placed);
                break;
            }
        }
        viewers.invalidate_area(touched);
        log::info!("loaded region {} from {} with {} containers", touched, path.display(), placed);
        Ok(touched)
    }
}
