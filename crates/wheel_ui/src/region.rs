//! Bounding-box queries for trackable regions.

use std::cell::Cell;
use std::rc::Weak;

use crate::layout::Rectangle;

/// A handle to the area a tracker normalizes positions against.
pub trait Region {
    /// Current bounding box, or `None` once the backing region is gone.
    fn bounding_rect(&self) -> Option<Rectangle>;
}

impl Region for Rectangle {
    fn bounding_rect(&self) -> Option<Rectangle> {
        Some(*self)
    }
}

/// A region owned elsewhere. Layout updates flow through the cell, and the
/// handle goes stale when the owner drops it.
impl Region for Weak<Cell<Rectangle>> {
    fn bounding_rect(&self) -> Option<Rectangle> {
        self.upgrade().map(|rect| rect.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_weak_region_follows_owner() {
        let owner = Rc::new(Cell::new(Rectangle::new(0.0, 0.0, 10.0, 10.0)));
        let region = Rc::downgrade(&owner);
        assert_eq!(region.bounding_rect(), Some(Rectangle::new(0.0, 0.0, 10.0, 10.0)));

        owner.set(Rectangle::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(region.bounding_rect(), Some(Rectangle::new(5.0, 5.0, 20.0, 20.0)));

        drop(owner);
        assert_eq!(region.bounding_rect(), None);
    }
}
