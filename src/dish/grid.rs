//! Cell grid for the reflector dish.
//!
//! Cells are stored row-major in a flat `Vec<Cell>` so that cloning and
//! comparing whole dish states stays a pair of memcpy/memcmp-sized passes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = b'.',
    Movable = b'O',
    Fixed = b'#',
}

impl Cell {
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Cell> {
        match byte {
            b'.' => Some(Cell::Empty),
            b'O' => Some(Cell::Movable),
            b'#' => Some(Cell::Fixed),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

/// The four tilt directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0, // (x, y-1)
    West  = 1, // (x-1, y)
    South = 2, // (x, y+1)
    East  = 3, // (x+1, y)
}

impl Direction {
    /// Order of one spin cycle. Changing it changes the simulation.
    pub const SPIN: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// The `(dx, dy)` offset for this direction, with `y` growing downward.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::West  => (-1, 0),
            Direction::South => (0, 1),
            Direction::East  => (1, 0),
        }
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::West  => Direction::East,
            Direction::South => Direction::North,
            Direction::East  => Direction::West,
        }
    }
}

/// A rectangular dish of rocks. Dimensions are fixed after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells. Rows must be non-empty and equal width.
    pub fn from_rows<R>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: AsRef<[Cell]>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            if row == 0 {
                width = line.len();
            } else if line.len() != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
            height += 1;
        }
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Cell at `(x, y)` if in bounds.
    pub fn try_get(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of movable rocks.
    pub fn rock_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Movable).count()
    }

    /// Load on the north support beams: each rock weighs its distance from
    /// the south edge, counting its own row.
    pub fn north_load(&self) -> u64 {
        self.rows()
            .enumerate()
            .map(|(y, row)| {
                let rocks = row.iter().filter(|&&c| c == Cell::Movable).count() as u64;
                rocks * (self.height - y) as u64
            })
            .sum()
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let start = lines
            .iter()
            .position(|line| !line.is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(start, |last| last + 1);

        let mut rows = Vec::with_capacity(end - start);
        for (row, line) in lines[start..end].iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell = u8::try_from(ch)
                    .ok()
                    .and_then(Cell::from_byte)
                    .ok_or(Error::InvalidCell { row, col, found: ch })?;
                cells.push(cell);
            }
            rows.push(cells);
        }
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
