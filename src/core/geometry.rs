//! Integer axis-aligned rectangles in world units.
//!
//! World coordinates grow right and down: `y = 0` is the top of the screen
//! and the floor line sits at `screen.height - screen.floor_height`.

/// An axis-aligned rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    /// Build a rectangle, rejecting zero or negative dimensions.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Option<Self> {
        (w > 0 && h > 0).then_some(Self { x, y, w, h })
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Move vertically so the bottom edge lands on `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Change the height while keeping the bottom edge where it is.
    pub fn set_height_pinned(&mut self, height: i32) {
        let bottom = self.bottom();
        self.h = height;
        self.set_bottom(bottom);
    }

    /// Shrink by `amount` on each axis, keeping the rectangle centered.
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            x: self.x + amount / 2,
            y: self.y + amount / 2,
            w: self.w - amount,
            h: self.h - amount,
        }
    }

    /// True when both rectangles share interior area. Touching edges and
    /// degenerate rectangles never intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
