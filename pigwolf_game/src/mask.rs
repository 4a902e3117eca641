use crate::point::Point;

/// A square grid of occupied/free cells. The dimension never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMask {
    dim: usize,
    cells: Vec<bool>,
}

impl TileMask {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![false; dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `(D div 2, D div 2)` cell that shape offsets are relative to.
    pub fn center(&self) -> Point {
        let half = (self.dim / 2) as i32;
        Point::new(half, half)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.dim && (p.y as usize) < self.dim
    }

    pub fn get(&self, p: Point) -> bool {
        self.contains(p) && self.cells[self.index(p)]
    }

    /// Marks `p` as occupied. Returns false, leaving the mask untouched, when `p` is outside.
    pub fn set(&mut self, p: Point) -> bool {
        if !self.contains(p) {
            return false;
        }
        let index = self.index(p);
        self.cells[index] = true;
        true
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|x| **x).count()
    }

    pub fn iter_set(&self) -> impl Iterator<Item = Point> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| Point::new((i / dim) as i32, (i % dim) as i32))
    }

    /// Cells occupied in both masks.
    pub fn shared_cells<'a>(&'a self, other: &'a TileMask) -> impl Iterator<Item = Point> + 'a {
        self.iter_set().filter(move |p| other.get(*p))
    }

    pub fn intersects(&self, other: &TileMask) -> bool {
        self.shared_cells(other).next().is_some()
    }

    fn index(&self, p: Point) -> usize {
        p.x as usize * self.dim + p.y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let mask = TileMask::new(4);
        assert_eq!(mask.dim(), 4);
        assert_eq!(mask.count_set(), 0);
        assert_eq!(mask.center(), Point::new(2, 2));
    }

    #[test]
    fn set_rejects_outside_cells() {
        let mut mask = TileMask::new(3);
        assert!(mask.set(Point::new(2, 2)));
        assert!(!mask.set(Point::new(3, 0)));
        assert!(!mask.set(Point::new(0, -1)));
        assert_eq!(mask.count_set(), 1);
        assert!(mask.get(Point::new(2, 2)));
        assert!(!mask.get(Point::new(-1, -1)));
    }

    #[test]
    fn iter_set_is_row_major() {
        let mut mask = TileMask::new(3);
        mask.set(Point::new(1, 2));
        mask.set(Point::new(0, 1));
        let cells: Vec<Point> = mask.iter_set().collect();
        assert_eq!(cells, vec![Point::new(0, 1), Point::new(1, 2)]);
    }

    #[test]
    fn intersection_needs_a_common_cell() {
        let mut a = TileMask::new(5);
        let mut b = TileMask::new(5);
        a.set(Point::new(1, 1));
        a.set(Point::new(1, 2));
        b.set(Point::new(2, 1));
        assert!(!a.intersects(&b));

        b.set(Point::new(1, 2));
        assert!(a.intersects(&b));
        assert_eq!(a.shared_cells(&b).collect::<Vec<_>>(), vec![Point::new(1, 2)]);
    }
}
