use std::ops::{Add, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl Add<Position> for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Width and height in cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn max_zero(self) -> Size {
        Size::new(self.width.max(0), self.height.max(0))
    }

    /// Number of cells covered, zero for degenerate sizes.
    pub fn area(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Size::new(width, height)
    }
}

/// A cell rectangle. `size` counts cells, so `right()`/`bottom()` are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn from_min_size(pos: impl Into<Position>, size: impl Into<Size>) -> Rectangle {
        Rectangle {
            start: pos.into(),
            size: size.into(),
        }
    }

    /// Builds the rectangle spanned by two inclusive corners, in any order.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Rectangle {
            start: Position::new(x1.min(x2), y1.min(y2)),
            size: Size::new((x2 - x1).abs() + 1, (y2 - y1).abs() + 1),
        }
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn right(&self) -> i32 {
        self.start.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.start.y + self.size.height
    }

    /// Inclusive bottom right corner.
    pub fn last(&self) -> Position {
        Position::new(self.right() - 1, self.bottom() - 1)
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.start.x..self.right()
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.start.y..self.bottom()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left() <= x && x < self.right() && self.top() <= y && y < self.bottom()
    }

    pub fn contains_pt(&self, point: Position) -> bool {
        self.contains(point.x, point.y)
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let min = self.start.max(other.start);
        let max = Position::new(self.right(), self.bottom()).min(Position::new(other.right(), other.bottom()));
        Rectangle {
            start: min,
            size: Size::new((max.x - min.x).max(0), (max.y - min.y).max(0)),
        }
    }

    /// Walks every cell column by column: outer x, inner y.
    ///
    /// This is the order section files store their tiles in.
    pub fn column_major(&self) -> ColumnMajor {
        ColumnMajor {
            rect: *self,
            x: self.left(),
            y: self.top(),
        }
    }
}

pub struct ColumnMajor {
    rect: Rectangle,
    x: i32,
    y: i32,
}

impl Iterator for ColumnMajor {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.rect.is_empty() || self.x >= self.rect.right() {
            return None;
        }
        let pos = Position::new(self.x, self.y);
        self.y += 1;
        if self.y >= self.rect.bottom() {
            self.y = self.rect.top();
            self.x += 1;
        }
        Some(pos)
    }
}
