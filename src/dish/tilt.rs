//! Directional tilting of the dish.
//!
//! A tilt is a per-line compaction: each column (north/south) or row
//! (west/east) is walked starting at the edge the rocks roll toward, with a
//! cursor marking the next free slot. Every line is independent, so one tilt
//! touches each cell once.

use super::grid::{Cell, Direction, Grid};

/// First flat index, signed stride between consecutive cells, and length of
/// the `line`-th line walked from the edge `dir` points at.
#[inline]
fn line_span(w: usize, h: usize, dir: Direction, line: usize) -> (usize, isize, usize) {
    match dir {
        Direction::North => (line, w as isize, h),
        Direction::South => ((h - 1) * w + line, -(w as isize), h),
        Direction::West => (line * w, 1, w),
        Direction::East => (line * w + w - 1, -1, w),
    }
}

#[inline]
fn compact_line(cells: &mut [Cell], start: usize, stride: isize, len: usize) {
    let at = |i: usize| (start as isize + i as isize * stride) as usize;
    let mut free = 0usize;
    for i in 0..len {
        let idx = at(i);
        match cells[idx] {
            Cell::Fixed => free = i + 1,
            Cell::Movable => {
                if free != i {
                    cells[at(free)] = Cell::Movable;
                    cells[idx] = Cell::Empty;
                }
                free += 1;
            }
            Cell::Empty => {}
        }
    }
}

/// Roll every movable rock toward `dir` until it hits the edge, a fixed rock,
/// or another settled rock.
pub fn tilt(grid: &mut Grid, dir: Direction) {
    let (w, h) = (grid.width(), grid.height());
    let lines = match dir {
        Direction::North | Direction::South => w,
        Direction::West | Direction::East => h,
    };
    let cells = grid.cells_mut();
    for line in 0..lines {
        let (start, stride, len) = line_span(w, h, dir, line);
        compact_line(cells, start, stride, len);
    }
}

/// One spin cycle: tilt north, west, south, then east.
pub fn spin_cycle(grid: &mut Grid) {
    for dir in Direction::SPIN {
        tilt(grid, dir);
    }
}

impl Grid {
    #[inline]
    pub fn tilt(&mut self, dir: Direction) {
        tilt(self, dir);
    }

    #[inline]
    pub fn spin_cycle(&mut self) {
        spin_cycle(self);
    }

    /// Apply `n` spin cycles.
    pub fn spin(&mut self, n: u64) {
        for _ in 0..n {
            spin_cycle(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn north_tilt_stacks_against_fixed_rocks() {
        let mut g = grid(".O\n#.\n.O\nOO\n");
        tilt(&mut g, Direction::North);
        assert_eq!(g.to_string(), ".O\n#O\nOO\n..\n");
    }

    #[test]
    fn each_direction_compacts_toward_its_edge() {
        let base = grid("...\n.O.\n...\n");
        let cases = [
            (Direction::North, ".O.\n...\n...\n"),
            (Direction::West, "...\nO..\n...\n"),
            (Direction::South, "...\n...\n.O.\n"),
            (Direction::East, "...\n..O\n...\n"),
        ];
        for (dir, expected) in cases {
            let mut g = base.clone();
            tilt(&mut g, dir);
            assert_eq!(g.to_string(), expected, "{dir:?}");
        }
    }

    #[test]
    fn blocked_rock_does_not_move() {
        let mut g = grid("#\nO\n");
        let before = g.clone();
        tilt(&mut g, Direction::North);
        assert_eq!(g, before);

        let mut g = grid("OO.\n");
        tilt(&mut g, Direction::West);
        assert_eq!(g.to_string(), "OO.\n");
    }

    #[test]
    fn single_spin_cycle_matches_known_state() {
        let mut g = grid(concat!(
            "O....#....\n",
            "O.OO#....#\n",
            ".....##...\n",
            "OO.#O....O\n",
            ".O.....O#.\n",
            "O.#..O.#.#\n",
            "..O..#O..O\n",
            ".......O..\n",
            "#....###..\n",
            "#OO..#....\n",
        ));
        g.spin_cycle();
        assert_eq!(
            g.to_string(),
            concat!(
                ".....#....\n",
                "....#...O#\n",
                "...OO##...\n",
                ".OO#......\n",
                ".....OOO#.\n",
                ".O#...O#.#\n",
                "....O#....\n",
                "......OOOO\n",
                "#...O###..\n",
                "#..OO#....\n",
            )
        );
    }
}
