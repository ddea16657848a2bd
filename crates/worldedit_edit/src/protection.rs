use crate::Rectangle;

/// Tells whether a cell belongs to an area ordinary pastes must not overwrite.
pub trait RegionGuard {
    fn is_protected(&self, x: i32, y: i32) -> bool;
}

impl<F: Fn(i32, i32) -> bool> RegionGuard for F {
    fn is_protected(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

/// Guard for worlds without protected regions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProtection;

impl RegionGuard for NoProtection {
    fn is_protected(&self, _x: i32, _y: i32) -> bool {
        false
    }
}

/// A fixed list of protected rectangles.
#[derive(Clone, Debug, Default)]
pub struct ProtectedAreas {
    areas: Vec<Rectangle>,
}

impl ProtectedAreas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_area(mut self, area: Rectangle) -> Self {
        self.areas.push(area);
        self
    }

    pub fn add(&mut self, area: Rectangle) {
        self.areas.push(area);
    }
}

impl RegionGuard for ProtectedAreas {
    fn is_protected(&self, x: i32, y: i32) -> bool {
        self.areas.iter().any(|area| area.contains(x, y))
    }
}
