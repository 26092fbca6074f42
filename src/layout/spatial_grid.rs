// Spatial hash grid for overlap detection against the placed cloud.
//
// Every placement tests many candidate rectangles (spiral search, then one test
// per shift step). Bucketing placed rectangles by cell keeps each test close to
// O(1) instead of O(n) in the number of placed rectangles.

use std::collections::HashMap;

use crate::geometry::{RectI, SizeI};

/// Largest cell size the grid grows to.
const MAX_CELL_SIZE: i32 = 1 << 30;

/// A spatial hash grid for rectangle overlap queries.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    /// Size of each cell in the grid.
    cell_size: i32,
    /// Map from cell coordinates to the rectangles touching that cell.
    cells: HashMap<(i32, i32), Vec<RectI>>,
}

impl SpatialGrid {
    /// Cell size should be roughly the size of a typical placed rectangle.
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE), // Avoid division by zero
            cells: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Grow the cells so a rectangle of `size` spans at most two cells per axis.
    ///
    /// Rectangles already in the grid are rehashed; cells never shrink.
    pub fn fit(&mut self, size: SizeI) {
        let longest = size.w.max(size.h);
        if longest <= self.cell_size {
            return;
        }
        let grown = (longest as u32).next_power_of_two();
        let grown = grown.min(MAX_CELL_SIZE as u32) as i32;
        let old = std::mem::take(&mut self.cells);
        let old_cell_size = self.cell_size;
        self.cell_size = grown;

        // A rectangle sits in every cell it touches; reinsert it once, from the
        // cell holding its top-left corner.
        for ((cx, cy), rects) in old {
            for rect in rects {
                let home = (
                    rect.x.div_euclid(old_cell_size),
                    rect.y.div_euclid(old_cell_size),
                );
                if home == (cx, cy) {
                    self.insert(rect);
                }
            }
        }
        log::debug!("spatial grid cells grown from {old_cell_size} to {grown}");
    }

    /// Inclusive cell coordinate bounds covered by a rectangle's interior.
    fn cell_bounds(&self, rect: &RectI) -> (i32, i32, i32, i32) {
        let min_x = rect.x.div_euclid(self.cell_size);
        let max_x = (rect.right() - 1).div_euclid(self.cell_size);
        let min_y = rect.y.div_euclid(self.cell_size);
        let max_y = (rect.bottom() - 1).div_euclid(self.cell_size);
        (min_x, max_x, min_y, max_y)
    }

    pub fn insert(&mut self, rect: RectI) {
        let (min_x, max_x, min_y, max_y) = self.cell_bounds(&rect);
        for cx in min_x..=max_x {
            for cy in min_y..=max_y {
                self.cells.entry((cx, cy)).or_default().push(rect);
            }
        }
    }

    /// Exact answer: same result as testing `rect` against every inserted rectangle.
    pub fn overlaps_any(&self, rect: &RectI) -> bool {
        let (min_x, max_x, min_y, max_y) = self.cell_bounds(rect);
        for cx in min_x..=max_x {
            for cy in min_y..=max_y {
                if let Some(rects) = self.cells.get(&(cx, cy)) {
                    if rect.overlaps_any(rects) {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[cfg(test)]
    fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
