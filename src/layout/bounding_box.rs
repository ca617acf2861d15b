use glam::Vec2;

/// Immutable snapshot of one item's screen rectangle at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Distance from the viewport's left edge.
    pub left: f32,
    /// Distance from the viewport's top edge.
    pub top: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl BoundingBox {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// The same rectangle moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }

    /// Whether `point` lies inside (edges inclusive on the top-left).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.y >= self.top
            && point.x < self.left + self.width
            && point.y < self.top + self.height
    }

    /// Offset that moves `to`'s origin back onto `self`'s origin.
    ///
    /// This is the FLIP "invert" vector: `self` is the old box, `to` the
    /// freshly laid-out one.
    #[must_use]
    pub fn offset_to(&self, to: &Self) -> Vec2 {
        Vec2::new(self.left - to.left, self.top - to.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_inverts_movement() {
        let old = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let new = BoundingBox::new(200.0, 50.0, 100.0, 100.0);
        assert_eq!(old.offset_to(&new), Vec2::new(-200.0, -50.0));
        assert_eq!(new.offset_to(&old), Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_translated_keeps_size() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0)
            .translated(Vec2::new(5.0, -5.0));
        assert_eq!(b, BoundingBox::new(15.0, 15.0, 30.0, 40.0));
    }

    #[test]
    fn test_contains_and_center() {
        let b = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(b.center(), Vec2::new(50.0, 25.0));
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(!b.contains(Vec2::new(100.0, 10.0)));
    }
}
