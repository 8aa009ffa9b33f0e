use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;

use crate::direction::Cardinal;

/// A maximal run of unit steps in one direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Cardinal,
    pub klicks: usize,
}

impl Instruction {
    pub fn new(direction: Cardinal, klicks: usize) -> Instruction {
        Instruction { direction, klicks }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let plural = if self.klicks > 1 { "s" } else { "" };
        write!(
            f,
            "Head {} for {} klick{}.",
            self.direction, self.klicks, plural
        )
    }
}

/// Compresses a unit-step path into one [Instruction] per run of equal directions, in path
/// order. Consecutive points that are not exactly one axis-aligned step apart contribute nothing.
pub fn compress_path(path: &[Point]) -> Vec<Instruction> {
    path.iter()
        .tuple_windows()
        .filter_map(|(a, b)| Cardinal::between(a, b))
        .dedup_with_count()
        .map(|(klicks, direction)| Instruction::new(direction, klicks))
        .collect()
}

/// Replays instructions from `start`, producing every visited point including `start`. Inverse
/// of [compress_path] for unit-step paths. Replay stops at the first step that would leave the
/// `i32` plane.
pub fn expand_instructions(start: Point, instructions: &[Instruction]) -> Vec<Point> {
    let mut current = start;
    let mut path = vec![current];
    for instruction in instructions {
        for _ in 0..instruction.klicks {
            let Some(next) = instruction.direction.step(current) else {
                return path;
            };
            current = next;
            path.push(current);
        }
    }
    path
}
