use std::{fmt, str::FromStr};

use crate::{tracer::PipeLoop, PipeError};

/// `(x, y)`, with `y` growing downwards
pub type Pos = (i64, i64);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

use Dir::*;

impl Dir {
    pub const ALL: [Dir; 4] = [Up, Right, Down, Left];

    pub fn step(self, (x, y): Pos) -> Pos {
        match self {
            Up => (x, y - 1),
            Right => (x + 1, y),
            Down => (x, y + 1),
            Left => (x - 1, y),
        }
    }

    /// Direction of travel from `a` to `b`, if they are 4-adjacent
    pub fn between(a: Pos, b: Pos) -> Option<Dir> {
        match (b.0 - a.0, b.1 - a.1) {
            (0, -1) => Some(Up),
            (1, 0) => Some(Right),
            (0, 1) => Some(Down),
            (-1, 0) => Some(Left),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Glyph {
    Horizontal,
    Vertical,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
    Ground,
    Start,
}

use Glyph::*;

impl Glyph {
    /// The direction we leave this pipe in, when entering it while moving `dir`.
    ///
    /// `None` means the pipe does not connect to where we came from.
    pub fn turn(self, dir: Dir) -> Option<Dir> {
        match (self, dir) {
            (Horizontal, Left | Right) => Some(dir),
            (Vertical, Up | Down) => Some(dir),
            (NorthEast, Left) => Some(Up),
            (NorthEast, Down) => Some(Right),
            (NorthWest, Right) => Some(Up),
            (NorthWest, Down) => Some(Left),
            (SouthWest, Right) => Some(Down),
            (SouthWest, Up) => Some(Left),
            (SouthEast, Left) => Some(Down),
            (SouthEast, Up) => Some(Right),
            _ => None,
        }
    }
}

impl TryFrom<char> for Glyph {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '-' => Ok(Horizontal),
            '|' => Ok(Vertical),
            'L' => Ok(NorthEast),
            'J' => Ok(NorthWest),
            '7' => Ok(SouthWest),
            'F' => Ok(SouthEast),
            '.' => Ok(Ground),
            'S' => Ok(Start),
            _ => Err(c),
        }
    }
}

impl From<Glyph> for char {
    fn from(glyph: Glyph) -> char {
        match glyph {
            Horizontal => '-',
            Vertical => '|',
            NorthEast => 'L',
            NorthWest => 'J',
            SouthWest => '7',
            SouthEast => 'F',
            Ground => '.',
            Start => 'S',
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeMap {
    grid: Vec<Vec<Glyph>>,
    w: i64,
    h: i64,
    start: Pos,
}

impl PipeMap {
    pub fn width(&self) -> i64 {
        self.w
    }

    pub fn height(&self) -> i64 {
        self.h
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn in_bounds(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && x < self.w && y < self.h
    }

    pub fn get(&self, pos: Pos) -> Option<Glyph> {
        if self.in_bounds(pos) {
            Some(self.grid[pos.1 as usize][pos.0 as usize])
        } else {
            None
        }
    }

    /// All cells, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.h).flat_map(move |y| (0..self.w).map(move |x| (x, y)))
    }

    /// Replaces every glyph that is not part of the loop with ground.
    pub fn simplify(&mut self, pipe_loop: &PipeLoop) {
        for (y, row) in self.grid.iter_mut().enumerate() {
            for (x, glyph) in row.iter_mut().enumerate() {
                if !pipe_loop.contains((x as i64, y as i64)) {
                    *glyph = Ground;
                }
            }
        }
    }
}

impl FromStr for PipeMap {
    type Err = PipeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut start = None;
        let mut grid: Vec<Vec<Glyph>> = vec![];

        for (y, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| {
                    Glyph::try_from(c).map_err(|c| PipeError::UnknownGlyph(c, (x as i64, y as i64)))
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(expected) = grid.first().map(Vec::len) {
                if row.len() != expected {
                    return Err(PipeError::RaggedRow {
                        row: y,
                        len: row.len(),
                        expected,
                    });
                }
            }

            for x in row.iter().enumerate().filter(|&(_, &g)| g == Start).map(|(x, _)| x) {
                let pos = (x as i64, y as i64);
                if start.replace(pos).is_some() {
                    return Err(PipeError::DuplicateStart(pos));
                }
            }

            grid.push(row);
        }

        if grid.is_empty() || grid[0].is_empty() {
            return Err(PipeError::Empty);
        }

        let start = start.ok_or(PipeError::NoStart)?;

        Ok(Self {
            h: grid.len() as i64,
            w: grid[0].len() as i64,
            grid,
            start,
        })
    }
}

impl fmt::Display for PipeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line = row.iter().map(|&g| char::from(g)).collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_and_start() {
        let map = "
.....
.S-7.
.|.|.
.L-J.
....."
            .parse::<PipeMap>()
            .unwrap();

        assert_eq!((map.width(), map.height()), (5, 5));
        assert_eq!(map.start(), (1, 1));
        assert_eq!(map.get((3, 1)), Some(SouthWest));
        assert_eq!(map.get((5, 1)), None);
        assert_eq!(map.get((-1, 0)), None);
        assert_eq!(map.positions().count(), 25);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("...\n...".parse::<PipeMap>(), Err(PipeError::NoStart));
        assert_eq!("".parse::<PipeMap>(), Err(PipeError::Empty));
        assert_eq!(
            "S-7\n|.\nL-J".parse::<PipeMap>(),
            Err(PipeError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        );
        assert_eq!(
            "S-7\n|x|\nL-J".parse::<PipeMap>(),
            Err(PipeError::UnknownGlyph('x', (1, 1)))
        );
        assert_eq!(
            "S-S\n|.|\nL-J".parse::<PipeMap>(),
            Err(PipeError::DuplicateStart((2, 0)))
        );
    }

    #[test]
    fn turn_table() {
        assert_eq!(Horizontal.turn(Right), Some(Right));
        assert_eq!(Horizontal.turn(Up), None);
        assert_eq!(NorthWest.turn(Right), Some(Up));
        assert_eq!(NorthWest.turn(Down), Some(Left));
        assert_eq!(NorthWest.turn(Left), None);
        assert_eq!(SouthEast.turn(Up), Some(Right));
        assert_eq!(Ground.turn(Up), None);
        assert_eq!(Start.turn(Up), None);
    }

    #[test]
    fn direction_between() {
        assert_eq!(Dir::between((2, 2), (2, 1)), Some(Up));
        assert_eq!(Dir::between((2, 2), (1, 2)), Some(Left));
        assert_eq!(Dir::between((2, 2), (3, 3)), None);

        for dir in Dir::ALL {
            assert_eq!(Dir::between((0, 0), dir.step((0, 0))), Some(dir));
        }
    }
}
