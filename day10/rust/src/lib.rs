pub mod classifier;
pub mod error;
pub mod grid;
pub mod samples;
pub mod tracer;

pub use classifier::{AreaClassifier, Side};
pub use error::PipeError;
pub use grid::{Dir, Glyph, PipeMap, Pos};
pub use tracer::{Orientation, PipeLoop};

/// Distance along the loop to the point farthest from the start
pub fn solve(input: &str) -> Result<usize, PipeError> {
    let map = input.parse::<PipeMap>()?;
    Ok(PipeLoop::trace(&map)?.farthest())
}

/// Number of cells enclosed by the loop
pub fn bonus(input: &str) -> Result<usize, PipeError> {
    let mut map = input.parse::<PipeMap>()?;
    let pipe_loop = PipeLoop::trace(&map)?;
    map.simplify(&pipe_loop);

    Ok(AreaClassifier::new(&map, &pipe_loop)?.run())
}
