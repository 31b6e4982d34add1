use thiserror::Error;

use crate::{Dir, Glyph, Pos};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipeError {
    #[error("empty input")]
    Empty,

    #[error("unexpected character {0:?} at {1:?}")]
    UnknownGlyph(char, Pos),

    #[error("row {row} is {len} wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("no start marker found")]
    NoStart,

    #[error("second start marker at {0:?}")]
    DuplicateStart(Pos),

    #[error("no pipe leads away from the start at {0:?}")]
    Stuck(Pos),

    #[error("entered `{glyph}` at {pos:?} while moving {dir:?}")]
    BadTurn { glyph: Glyph, pos: Pos, dir: Dir },

    #[error("walked off the grid at {0:?}")]
    OffGrid(Pos),

    #[error("pipe never returns to the start")]
    Unclosed,

    #[error("cannot determine loop orientation from its top-left corner {0:?}")]
    Orientation(Pos),
}
