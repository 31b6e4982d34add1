use fxhash::FxHashMap;

use crate::{Dir, Glyph, PipeError, PipeMap, Pos};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// The closed pipe through the start, in traversal order.
///
/// The first position is the start; the final step back onto it is not repeated.
#[derive(Debug, Clone)]
pub struct PipeLoop {
    path: Vec<Pos>,
    index: FxHashMap<Pos, usize>,
}

impl PipeLoop {
    pub fn trace(map: &PipeMap) -> Result<Self, PipeError> {
        let start = map.start();
        let mut dir = exit_direction(map, start)?;
        let mut at = start;
        let mut path = vec![start];

        loop {
            at = dir.step(at);
            let glyph = map.get(at).ok_or(PipeError::OffGrid(at))?;
            if glyph == Glyph::Start {
                break;
            }

            dir = glyph
                .turn(dir)
                .ok_or(PipeError::BadTurn { glyph, pos: at, dir })?;
            path.push(at);

            // a pipe can't visit more cells than there are
            if path.len() as i64 > map.width() * map.height() {
                return Err(PipeError::Unclosed);
            }
        }

        let index = path.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        Ok(Self { path, index })
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index.contains_key(&pos)
    }

    /// Steps to the point on the loop that is farthest from the start
    pub fn farthest(&self) -> usize {
        self.len() / 2
    }

    fn neighbours_in_loop(&self, i: usize) -> (Pos, Pos) {
        let n = self.path.len();
        (self.path[(i + n - 1) % n], self.path[(i + 1) % n])
    }

    /// The direction the loop travels in when entering and when leaving `pos`
    pub fn directions_at(&self, pos: Pos) -> Option<(Dir, Dir)> {
        let i = *self.index.get(&pos)?;
        let (prev, next) = self.neighbours_in_loop(i);
        Some((Dir::between(prev, pos)?, Dir::between(pos, next)?))
    }

    /// The top-left point of the loop is always a corner shaped like `F`, so the
    /// direction we leave it in tells which way around we're going.
    pub fn orientation(&self) -> Result<Orientation, PipeError> {
        let (i, &top_left) = self
            .path
            .iter()
            .enumerate()
            .min_by_key(|&(_, &(x, y))| (y, x))
            .ok_or(PipeError::Unclosed)?;

        let (_, next) = self.neighbours_in_loop(i);

        match Dir::between(top_left, next) {
            Some(Dir::Right) => Ok(Orientation::Clockwise),
            Some(Dir::Down) => Ok(Orientation::CounterClockwise),
            _ => Err(PipeError::Orientation(top_left)),
        }
    }
}

/// First neighbour of the start (right, left, down, up) whose pipe connects back to it
fn exit_direction(map: &PipeMap, start: Pos) -> Result<Dir, PipeError> {
    [Dir::Right, Dir::Left, Dir::Down, Dir::Up]
        .into_iter()
        .find(|&dir| {
            map.get(dir.step(start))
                .is_some_and(|glyph| glyph.turn(dir).is_some())
        })
        .ok_or(PipeError::Stuck(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(input: &str) -> Result<PipeLoop, PipeError> {
        PipeLoop::trace(&input.parse::<PipeMap>()?)
    }

    #[test]
    fn square() {
        let pipe_loop = trace(
            "
S-7
|.|
L-J",
        )
        .unwrap();

        assert_eq!(
            pipe_loop.path(),
            &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
        );
        assert_eq!(pipe_loop.farthest(), 4);
        assert!(!pipe_loop.contains((1, 1)));
        assert_eq!(pipe_loop.orientation(), Ok(Orientation::Clockwise));
        assert_eq!(pipe_loop.directions_at((2, 0)), Some((Dir::Right, Dir::Down)));
        assert_eq!(pipe_loop.directions_at((0, 0)), Some((Dir::Up, Dir::Right)));
        assert_eq!(pipe_loop.directions_at((1, 1)), None);
    }

    #[test]
    fn counter_clockwise() {
        let pipe_loop = trace(
            "
F-7
|.|
S-J",
        )
        .unwrap();

        assert_eq!(pipe_loop.path()[6], (0, 0));
        assert_eq!(pipe_loop.orientation(), Ok(Orientation::CounterClockwise));
    }

    #[test]
    fn top_left_is_last() {
        let pipe_loop = trace(
            "
F-7
S.|
L-J",
        )
        .unwrap();

        // S leaves downwards, so F is visited last and its successor wraps around to S
        assert_eq!(pipe_loop.path().last(), Some(&(0, 0)));
        assert_eq!(pipe_loop.orientation(), Ok(Orientation::CounterClockwise));
    }

    #[test]
    fn consecutive_points_are_adjacent() {
        let pipe_loop = trace(
            "
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ",
        )
        .unwrap();

        let path = pipe_loop.path();
        assert_eq!(path.len(), 16);
        for (a, b) in path.iter().zip(path.iter().skip(1).chain([&path[0]])) {
            assert!(Dir::between(*a, *b).is_some(), "{a:?} -> {b:?}");
        }

        let mut visited = path.to_vec();
        visited.sort();
        visited.dedup();
        assert_eq!(visited.len(), path.len());
    }

    #[test]
    fn broken_pipes() {
        assert_eq!(trace("S.\n..").unwrap_err(), PipeError::Stuck((0, 0)));
        assert_eq!(trace("S-").unwrap_err(), PipeError::OffGrid((2, 0)));
        assert_eq!(
            trace("S7\n..").unwrap_err(),
            PipeError::BadTurn {
                glyph: Glyph::Ground,
                pos: (1, 1),
                dir: Dir::Down
            }
        );
        assert_eq!(
            trace("S7\n.-").unwrap_err(),
            PipeError::BadTurn {
                glyph: Glyph::Horizontal,
                pos: (1, 1),
                dir: Dir::Down
            }
        );
    }
}
