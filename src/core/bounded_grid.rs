use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area()];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &Vec2) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.bounds.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let i = self.bounds.index_of(index);
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_outside_bounds_is_none() {
        let grid = BoundedGrid::new(BoundsOriginRoot::new(3, 2), 0u8);

        assert_eq!(grid.get(&Vec2::new(2, 1)), Some(&0));
        assert_eq!(grid.get(&Vec2::new(3, 0)), None);
        assert_eq!(grid.get(&Vec2::new(0, 2)), None);
        assert_eq!(grid.get(&Vec2::new(-1, 0)), None);
        assert_eq!(grid.get(&Vec2::new(0, -1)), None);
    }
}
