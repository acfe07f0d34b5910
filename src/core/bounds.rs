use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    /// Dimensions past `i32::MAX` are clamped to it.
    pub fn new(width: usize, height: usize) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2::new(clamp_to_i32(width), clamp_to_i32(height)),
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn width(&self) -> usize {
        self.extent.x as usize
    }

    pub fn height(&self) -> usize {
        self.extent.y as usize
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Row-major offset of an in-bounds position.
    pub fn index_of(&self, pos: &Vec2) -> usize {
        pos.y as usize * self.width() + pos.x as usize
    }
}

fn clamp_to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_oversized_dimensions_clamp() {
        let bounds = BoundsOriginRoot::new(usize::MAX, 3);

        assert_eq!(bounds.extent, Vec2::new(i32::MAX, 3));
        assert!(bounds.contains(&Vec2::new(i32::MAX - 1, 2)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_area_does_not_overflow_i32() {
        let bounds = BoundsOriginRoot::new(70_000, 70_000);

        assert_eq!(bounds.area(), 4_900_000_000);
        assert_eq!(bounds.index_of(&Vec2::new(5, 69_999)), 69_999 * 70_000 + 5);
    }
}
