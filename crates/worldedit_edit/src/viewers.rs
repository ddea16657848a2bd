use crate::{Position, Rectangle, Size};

/// Receives the areas whose tiles changed so connected viewers get them resent.
pub trait ViewerSink {
    fn invalidate_area(&mut self, area: Rectangle);
}

/// Sink for hosts without connected viewers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoViewers;

impl ViewerSink for NoViewers {
    fn invalidate_area(&mut self, _area: Rectangle) {}
}

/// Per-client "section already sent" flags.
///
/// The world is cut into fixed size sections; a client receives a section once and is only
/// sent it again after the section got invalidated.
#[derive(Clone, Debug)]
pub struct SectionCache {
    section_size: Size,
    sections: Size,
    clients: Vec<Option<Vec<bool>>>,
}

impl SectionCache {
    pub fn new(world_size: Size, section_size: Size, max_clients: usize) -> Self {
        let section_size = Size::new(section_size.width.max(1), section_size.height.max(1));
        let sections = Size::new(
            (world_size.width.max(0) + section_size.width - 1) / section_size.width,
            (world_size.height.max(0) + section_size.height - 1) / section_size.height,
        );
        Self {
            section_size,
            sections,
            clients: vec![None; max_clients],
        }
    }

    /// Number of sections along each axis.
    pub fn sections(&self) -> Size {
        self.sections
    }

    pub fn connect(&mut self, client: usize) {
        if let Some(slot) = self.clients.get_mut(client) {
            *slot = Some(vec![false; self.sections.area()]);
        } else {
            log::warn!("client {} outside section cache ({} slots)", client, self.clients.len());
        }
    }

    pub fn disconnect(&mut self, client: usize) {
        if let Some(slot) = self.clients.get_mut(client) {
            *slot = None;
        }
    }

    pub fn is_active(&self, client: usize) -> bool {
        matches!(self.clients.get(client), Some(Some(_)))
    }

    /// Section containing a tile.
    pub fn section_of(&self, pos: Position) -> Position {
        Position::new(pos.x.div_euclid(self.section_size.width), pos.y.div_euclid(self.section_size.height))
    }

    fn index(&self, section: Position) -> Option<usize> {
        if section.x < 0 || section.y < 0 || section.x >= self.sections.width || section.y >= self.sections.height {
            return None;
        }
        Some(section.x as usize * self.sections.height as usize + section.y as usize)
    }

    pub fn mark_sent(&mut self, client: usize, section: Position) {
        if let Some(idx) = self.index(section) {
            if let Some(Some(sent)) = self.clients.get_mut(client) {
                sent[idx] = true;
            }
        }
    }

    pub fn is_sent(&self, client: usize, section: Position) -> bool {
        match (self.index(section), self.clients.get(client)) {
            (Some(idx), Some(Some(sent))) => sent[idx],
            _ => false,
        }
    }
}

impl ViewerSink for SectionCache {
    fn invalidate_area(&mut self, area: Rectangle) {
        if area.is_empty() {
            return;
        }
        let low = self.section_of(area.start).max(Position::new(0, 0));
        let high = self
            .section_of(area.last())
            .min(Position::new(self.sections.width - 1, self.sections.height - 1));
        log::debug!("invalidating sections {} to {}", low, high);

        for i in low.x..=high.x {
            for j in low.y..=high.y {
                let Some(idx) = self.index(Position::new(i, j)) else {
                    continue;
                };
                for sent in self.clients.iter_mut().flatten() {
                    sent[idx] = false;
                }
            }
        }
    }
}
