//! Row-major 2D grid and the row-banded parallel builder used by the generators.

use std::ops::Index;

/// Below this many cells a grid is filled on the calling thread.
const PARALLEL_CELL_THRESHOLD: usize = 16 * 1024;

/// A dense `width x height` grid stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "grid buffer length does not match {width}x{height}"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell on the calling thread.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// All cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterate over `(x, y, cell)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, cell))
    }

    /// Produce a new grid of the same shape by mapping every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}

/// Fill a grid by splitting its rows into contiguous bands, one per worker.
///
/// Every worker calls `init` once to build its own state (noise samplers are
/// not shared across threads), then evaluates `cell(&state, x, y)` for each
/// cell of its band. Bands are stitched back in row order, so the result is
/// identical to a serial fill.
pub(crate) fn build_rows<T, S, I, F>(width: usize, height: usize, init: I, cell: F) -> Grid<T>
where
    T: Send,
    I: Fn() -> S + Sync,
    F: Fn(&S, usize, usize) -> T + Sync,
{
    let workers = worker_count(width, height);
    if workers <= 1 {
        let state = init();
        return Grid::from_fn(width, height, |x, y| cell(&state, x, y));
    }

    let rows_per_worker = height.div_ceil(workers);
    let cells = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let init = &init;
                let cell = &cell;
                scope.spawn(move || {
                    let start = (worker * rows_per_worker).min(height);
                    let end = (start + rows_per_worker).min(height);
                    let state = init();
                    let mut band = Vec::with_capacity((end - start) * width);
                    for y in start..end {
                        for x in 0..width {
                            band.push(cell(&state, x, y));
                        }
                    }
                    band
                })
            })
            .collect();

        let mut cells = Vec::with_capacity(width * height);
        for handle in handles {
            match handle.join() {
                Ok(band) => cells.extend(band),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        cells
    });

    Grid::from_vec(width, height, cells)
}

fn worker_count(width: usize, height: usize) -> usize {
    if width * height < PARALLEL_CELL_THRESHOLD {
        return 1;
    }
    num_cpus::get().clamp(1, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.row(1), &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid[(2, 0)], (2, 0));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_indexed_iter_matches_positions() {
        let grid = Grid::from_fn(4, 3, |x, y| x * 10 + y);
        for (x, y, value) in grid.indexed_iter() {
            assert_eq!(*value, x * 10 + y);
        }
    }

    #[test]
    fn test_map_preserves_shape() {
        let grid = Grid::from_fn(5, 2, |x, _| x as f64);
        let doubled = grid.map(|v| v * 2.0);
        assert_eq!(doubled.width(), 5);
        assert_eq!(doubled.height(), 2);
        assert_eq!(doubled[(4, 1)], 8.0);
    }

    #[test]
    #[should_panic]
    fn test_from_vec_rejects_wrong_length() {
        let _ = Grid::from_vec(2, 2, vec![0u8; 3]);
    }

    #[test]
    fn test_parallel_build_matches_serial() {
        // Large enough to cross the threshold and fan out over workers.
        let (w, h) = (257, 131);
        let serial = Grid::from_fn(w, h, |x, y| (x * 31 + y * 17) % 97);
        let parallel = build_rows(w, h, || 97usize, |m, x, y| (x * 31 + y * 17) % *m);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_small_grid_stays_serial() {
        assert_eq!(worker_count(8, 8), 1);
    }
}
