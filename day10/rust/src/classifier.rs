use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::{
    tracer::{Orientation, PipeLoop},
    Dir, PipeError, PipeMap, Pos,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    Inside,
    Outside,
}

/// For a loop cell on the given side of a candidate: the direction of travel
/// that puts the candidate inside a clockwise loop, and the one that puts it
/// inside a counter-clockwise loop.
const RULES: [(Dir, Dir, Dir); 4] = [
    (Dir::Right, Dir::Down, Dir::Up),
    (Dir::Down, Dir::Left, Dir::Right),
    (Dir::Left, Dir::Up, Dir::Down),
    (Dir::Up, Dir::Right, Dir::Left),
];

pub struct AreaClassifier<'a> {
    map: &'a PipeMap,
    pipe_loop: &'a PipeLoop,
    orientation: Orientation,
    inside: FxHashSet<Pos>,
    outside: FxHashSet<Pos>,
}

impl<'a> AreaClassifier<'a> {
    pub fn new(map: &'a PipeMap, pipe_loop: &'a PipeLoop) -> Result<Self, PipeError> {
        Ok(Self {
            map,
            pipe_loop,
            orientation: pipe_loop.orientation()?,
            inside: FxHashSet::default(),
            outside: FxHashSet::default(),
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn inside(&self) -> &FxHashSet<Pos> {
        &self.inside
    }

    pub fn outside(&self) -> &FxHashSet<Pos> {
        &self.outside
    }

    pub fn side_of(&self, pos: Pos) -> Option<Side> {
        if self.inside.contains(&pos) {
            Some(Side::Inside)
        } else if self.outside.contains(&pos) {
            Some(Side::Outside)
        } else {
            None
        }
    }

    fn is_candidate(&self, pos: Pos) -> bool {
        self.map.in_bounds(pos) && !self.pipe_loop.contains(pos) && self.side_of(pos).is_none()
    }

    fn mark(&mut self, pos: Pos, side: Side) {
        match side {
            Side::Inside => self.inside.insert(pos),
            Side::Outside => self.outside.insert(pos),
        };
    }

    /// Decides a single cell from the loop cells directly next to it, if it has any.
    pub fn rule(&self, pos: Pos) -> Option<Side> {
        let inside_if = |orientation: Orientation| {
            if self.orientation == orientation {
                Side::Inside
            } else {
                Side::Outside
            }
        };

        RULES.iter().find_map(|&(side, clockwise, counter_clockwise)| {
            let (incoming, outgoing) = self.pipe_loop.directions_at(side.step(pos))?;
            let crosses = |dir: Dir| incoming == dir || outgoing == dir;

            if crosses(clockwise) {
                Some(inside_if(Orientation::Clockwise))
            } else if crosses(counter_clockwise) {
                Some(inside_if(Orientation::CounterClockwise))
            } else {
                None
            }
        })
    }

    /// Applies the loop-side rules to every unclassified non-loop cell.
    ///
    /// Returns how many cells got classified.
    pub fn classify(&mut self) -> usize {
        let decided = self
            .map
            .positions()
            .filter(|&pos| self.is_candidate(pos))
            .filter_map(|pos| Some((pos, self.rule(pos)?)))
            .collect::<Vec<_>>();

        for &(pos, side) in &decided {
            self.mark(pos, side);
        }

        decided.len()
    }

    /// Spreads the known sides to every reachable unclassified non-loop cell.
    ///
    /// Returns how many cells got classified.
    pub fn flood_fill(&mut self) -> usize {
        let mut queue = self
            .inside
            .iter()
            .map(|&pos| (pos, Side::Inside))
            .chain(self.outside.iter().map(|&pos| (pos, Side::Outside)))
            .collect::<VecDeque<_>>();

        let mut filled = 0;

        while let Some((pos, side)) = queue.pop_front() {
            for dir in Dir::ALL {
                let next = dir.step(pos);
                if self.is_candidate(next) {
                    self.mark(next, side);
                    queue.push_back((next, side));
                    filled += 1;
                }
            }
        }

        filled
    }

    /// Number of enclosed cells
    pub fn run(mut self) -> usize {
        self.classify();
        self.flood_fill();
        self.inside.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(input: &str) -> (PipeMap, PipeLoop) {
        let mut map = input.parse::<PipeMap>().unwrap();
        let pipe_loop = PipeLoop::trace(&map).unwrap();
        map.simplify(&pipe_loop);
        (map, pipe_loop)
    }

    #[test]
    fn single_enclosed_cell() {
        for input in ["S-7\n|.|\nL-J", "F-7\n|.|\nS-J"] {
            let (map, pipe_loop) = classified(input);
            let mut classifier = AreaClassifier::new(&map, &pipe_loop).unwrap();

            assert_eq!(classifier.rule((1, 1)), Some(Side::Inside));
            assert_eq!(classifier.classify(), 1);
            assert_eq!(classifier.flood_fill(), 0);
            assert_eq!(classifier.side_of((1, 1)), Some(Side::Inside));
        }
    }

    #[test]
    fn far_away_cells_are_filled() {
        // the junk pipes in the corner don't touch the loop
        let (map, pipe_loop) = classified(
            "
.......
.S-7...
.|.|.F7
.L-J.LJ
.......",
        );

        let mut classifier = AreaClassifier::new(&map, &pipe_loop).unwrap();
        assert_eq!(classifier.orientation(), Orientation::Clockwise);

        classifier.classify();
        assert_eq!(classifier.side_of((5, 2)), None);
        assert_eq!(classifier.side_of((0, 1)), Some(Side::Outside));
        assert_eq!(classifier.side_of((0, 0)), None);

        classifier.flood_fill();
        assert_eq!(classifier.side_of((5, 2)), Some(Side::Outside));
        assert_eq!(classifier.side_of((6, 3)), Some(Side::Outside));
        assert_eq!(classifier.inside().len(), 1);
        assert_eq!(classifier.outside().len(), 35 - 8 - 1);
        assert_eq!(classifier.side_of((0, 0)), Some(Side::Outside));
    }

    #[test]
    fn fixed_point() {
        let (map, pipe_loop) = classified(
            "
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L",
        );

        let mut classifier = AreaClassifier::new(&map, &pipe_loop).unwrap();
        classifier.classify();
        classifier.flood_fill();

        let inside = classifier.inside().clone();
        let outside = classifier.outside().clone();

        assert_eq!(inside.len(), 10);
        assert!(inside.is_disjoint(&outside));
        assert_eq!(
            inside.len() + outside.len() + pipe_loop.len(),
            (map.width() * map.height()) as usize
        );

        assert_eq!(classifier.classify(), 0);
        assert_eq!(classifier.flood_fill(), 0);
        assert_eq!(classifier.inside(), &inside);
        assert_eq!(classifier.outside(), &outside);
    }
}
