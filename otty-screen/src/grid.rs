use std::ops::{Index, IndexMut, Range};

/// A single row of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub cells: Vec<char>,
}

impl GridRow {
    pub fn new(width: usize, fill: char) -> Self {
        Self {
            cells: vec![fill; width],
        }
    }

    pub fn clear(&mut self, fill: char) {
        self.cells.fill(fill);
    }

    /// Overwrites the cells in `range`, clipped to the row width.
    pub fn clear_range(&mut self, range: Range<usize>, fill: char) {
        let end = range.end.min(self.cells.len());
        let start = range.start.min(end);
        self.cells[start..end].fill(fill);
    }
}

impl Index<usize> for GridRow {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl IndexMut<usize> for GridRow {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

/// Fixed-size rows of characters, zero-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<GridRow>,
    columns: usize,
}

impl Grid {
    pub fn new(rows: usize, columns: usize, fill: char) -> Self {
        Self {
            rows: (0..rows).map(|_| GridRow::new(columns, fill)).collect(),
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridRow> {
        self.rows.iter()
    }

    pub fn clear(&mut self, fill: char) {
        for row in &mut self.rows {
            row.clear(fill);
        }
    }

    /// Moves every row in `range` up by one. The first row of the range
    /// lands at its end with its content intact.
    pub fn rotate_up(&mut self, range: Range<usize>) {
        if let Some(rows) = self.rows.get_mut(range) {
            if !rows.is_empty() {
                rows.rotate_left(1);
            }
        }
    }

    /// Moves every row in `range` down by one. The last row of the range
    /// lands at its start with its content intact.
    pub fn rotate_down(&mut self, range: Range<usize>) {
        if let Some(rows) = self.rows.get_mut(range) {
            if !rows.is_empty() {
                rows.rotate_right(1);
            }
        }
    }
}

impl Index<usize> for Grid {
    type Output = GridRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(rows: usize) -> Grid {
        let mut grid = Grid::new(rows, 2, ' ');
        for row in 0..rows {
            grid[row][0] = char::from(b'a' + row as u8);
        }
        grid
    }

    fn labels(grid: &Grid) -> String {
        grid.iter().map(|row| row[0]).collect()
    }

    #[test]
    fn rotate_up_only_touches_the_range() {
        let mut grid = labelled(5);
        grid.rotate_up(1..4);
        assert_eq!(labels(&grid), "acdbe");
    }

    #[test]
    fn rotate_down_only_touches_the_range() {
        let mut grid = labelled(5);
        grid.rotate_down(1..4);
        assert_eq!(labels(&grid), "adbce");
    }

    #[test]
    fn rotate_out_of_bounds_is_ignored() {
        let mut grid = labelled(3);
        grid.rotate_up(2..7);
        grid.rotate_down(3..3);
        assert_eq!(labels(&grid), "abc");
    }

    #[test]
    fn clear_range_is_clipped() {
        let mut row = GridRow::new(4, 'x');
        row.clear_range(2..10, '.');
        assert_eq!(row.cells, vec!['x', 'x', '.', '.']);

        row.clear_range(6..9, '-');
        assert_eq!(row.cells, vec!['x', 'x', '.', '.']);
    }
}
