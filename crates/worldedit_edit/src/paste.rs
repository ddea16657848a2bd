use crate::{EngineError, Position, Rectangle, Result, Size, Tile, TileGrid, World, protection::RegionGuard};

/// Alignment code that pastes top left aligned and ignores region protection.
pub const IGNORE_PROTECTION_CODE: i32 = 9;

/// Which edges of the pasted rectangle the anchor point stands for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    /// The anchor is the right edge, the clipboard extends to the left.
    pub right_edge: bool,
    /// The anchor is the bottom edge, the clipboard extends upwards.
    pub bottom_edge: bool,
    pub ignore_protection: bool,
}

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment {
        right_edge: false,
        bottom_edge: false,
        ignore_protection: false,
    };

    /// Decodes an alignment code: bit 0 selects the right edge, bit 1 the bottom edge,
    /// 9 is top left ignoring protection.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0..=3 => Ok(Alignment {
                right_edge: code & 1 != 0,
                bottom_edge: code & 2 != 0,
                ignore_protection: false,
            }),
            IGNORE_PROTECTION_CODE => Ok(Alignment {
                ignore_protection: true,
                ..Alignment::TOP_LEFT
            }),
            _ => Err(EngineError::InvalidAlignment { code }),
        }
    }

    pub fn code(&self) -> i32 {
        if self.ignore_protection {
            return IGNORE_PROTECTION_CODE;
        }
        i32::from(self.right_edge) | i32::from(self.bottom_edge) << 1
    }

    /// Destination of a clipboard with the usable `span` anchored at `anchor`.
    ///
    /// Both corners are inclusive, so the result covers `span + 1` cells per axis.
    pub fn destination(&self, anchor: Position, span: Size) -> Rectangle {
        let (x1, x2) = if self.right_edge {
            (anchor.x - span.width, anchor.x)
        } else {
            (anchor.x, anchor.x + span.width)
        };
        let (y1, y2) = if self.bottom_edge {
            (anchor.y - span.height, anchor.y)
        } else {
            (anchor.y, anchor.y + span.height)
        };
        Rectangle::from_corners(x1, y1, x2, y2)
    }
}

impl TryFrom<i32> for Alignment {
    type Error = EngineError;

    fn try_from(code: i32) -> Result<Self> {
        Alignment::from_code(code)
    }
}

/// Decides per cell whether the existing destination tile may be replaced.
pub trait TileFilter {
    fn accepts(&self, destination: &Tile) -> bool;
}

impl<F: Fn(&Tile) -> bool> TileFilter for F {
    fn accepts(&self, destination: &Tile) -> bool {
        self(destination)
    }
}

#[derive(Clone, Copy)]
pub struct PasteRequest<'a> {
    pub anchor: Position,
    pub alignment: Alignment,
    pub filter: Option<&'a dyn TileFilter>,
}

impl<'a> PasteRequest<'a> {
    pub fn new(anchor: impl Into<Position>, alignment: Alignment) -> Self {
        Self {
            anchor: anchor.into(),
            alignment,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: &'a dyn TileFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// What a paste did to the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Destination rectangle before clipping.
    pub area: Rectangle,
    pub written: usize,
    pub skipped_outside: usize,
    pub skipped_filtered: usize,
    pub skipped_protected: usize,
    /// Undo level that holds the replaced content.
    pub undo_level: i32,
}

/// Overwrites `destination` cell by cell from a decoded clipboard.
///
/// The grid has to match the destination size. Cells outside the world are skipped, then
/// cells whose current tile the filter rejects, then protected cells unless the alignment
/// ignores protection.
pub fn apply_paste(
    world: &mut dyn World,
    grid: &TileGrid,
    destination: Rectangle,
    request: &PasteRequest<'_>,
    guard: &dyn RegionGuard,
) -> PasteOutcome {
    let mut outcome = PasteOutcome {
        area: destination,
        ..Default::default()
    };
    let bounds = world.bounds();

    for pos in destination.column_major() {
        if !bounds.contains_pt(pos) {
            outcome.skipped_outside += 1;
            continue;
        }
        if let Some(filter) = request.filter {
            let current = world.tile(pos.x, pos.y).unwrap_or_default();
            if !filter.accepts(&current) {
                outcome.skipped_filtered += 1;
                continue;
            }
        }
        if !request.alignment.ignore_protection && guard.is_protected(pos.x, pos.y) {
            outcome.skipped_protected += 1;
            continue;
        }
        let Some(tile) = grid.tile(pos.x - destination.left(), pos.y - destination.top()) else {
            continue;
        };
        world.set_tile(pos.x, pos.y, tile);
        outcome.written += 1;
    }
    outcome
}
