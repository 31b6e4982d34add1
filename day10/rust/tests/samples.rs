use day10::{bonus, samples, solve, AreaClassifier, PipeError, PipeLoop, PipeMap};

#[test]
fn first_part_examples() {
    for (input, expected) in samples::FIRST_PART {
        assert_eq!(solve(input), Ok(expected), "{input}");
    }
}

#[test]
fn bonus_examples() {
    for (input, expected) in samples::BONUS {
        assert_eq!(bonus(input), Ok(expected), "{input}");
    }
}

#[test]
fn square_loop() {
    let input = "
S-7
|.|
L-J";

    assert_eq!(solve(input), Ok(4));
    assert_eq!(bonus(input), Ok(1));
}

#[test]
fn start_is_visited_once() {
    for (input, _) in samples::FIRST_PART.into_iter().chain(samples::BONUS) {
        let map = input.parse::<PipeMap>().unwrap();
        let pipe_loop = PipeLoop::trace(&map).unwrap();

        let path = pipe_loop.path();
        assert_eq!(path[0], map.start());
        assert_eq!(path.iter().filter(|&&p| p == map.start()).count(), 1);

        let last = path[path.len() - 1];
        let (dx, dy) = (last.0 - map.start().0, last.1 - map.start().1);
        assert_eq!(dx.abs() + dy.abs(), 1);
    }
}

#[test]
fn simplify_clears_junk() {
    let mut map = "
-L|F7
7S-7|
L|7||
-L-J|
L|-JF"
        .parse::<PipeMap>()
        .unwrap();

    let pipe_loop = PipeLoop::trace(&map).unwrap();
    map.simplify(&pipe_loop);

    assert_eq!(map.to_string(), ".....\n.S-7.\n.|.|.\n.L-J.\n.....\n");
}

#[test]
fn nested_pipes_without_connection() {
    // the inner ring is not connected to S, so it's just filler between the walls
    let input = "
S--------7
|........|
|.F----7.|
|.|....|.|
|.L----J.|
|........|
L--------J";

    let mut map = input.parse::<PipeMap>().unwrap();
    let pipe_loop = PipeLoop::trace(&map).unwrap();
    map.simplify(&pipe_loop);

    let mut classifier = AreaClassifier::new(&map, &pipe_loop).unwrap();
    classifier.classify();
    classifier.flood_fill();

    assert!(classifier.inside().is_disjoint(classifier.outside()));
    assert!(classifier.outside().is_empty());
    assert_eq!(classifier.inside().len(), 8 * 5);
    assert_eq!(bonus(input), Ok(40));
}

#[test]
fn outer_filler_is_outside() {
    let input = "
..........
.F7.......
.|L--7....
.|...|..F7
.L-S-J..LJ
..........";

    assert_eq!(bonus(input), Ok(3));
}

#[test]
fn errors_are_reported() {
    assert_eq!(solve("...\n.|."), Err(PipeError::NoStart));
    assert_eq!(solve(".S.\n..."), Err(PipeError::Stuck((1, 0))));
    assert_eq!(
        bonus("S-7\n|.\nL-J"),
        Err(PipeError::RaggedRow {
            row: 1,
            len: 2,
            expected: 3
        })
    );
}
