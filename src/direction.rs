use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;

/// One of the four axis-aligned headings on the plane. North is `+y`, east is `+x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Order in which the search engine generates neighbours.
    pub const SEARCH_ORDER: [Cardinal; 4] =
        [Cardinal::East, Cardinal::West, Cardinal::North, Cardinal::South];
    /// Order in which safe directions are reported to an agent.
    pub const REPORT_ORDER: [Cardinal; 4] =
        [Cardinal::North, Cardinal::South, Cardinal::East, Cardinal::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Cardinal::North => (0, 1),
            Cardinal::East => (1, 0),
            Cardinal::South => (0, -1),
            Cardinal::West => (-1, 0),
        }
    }

    /// The neighbouring point one unit away in this direction, or [None] when it would leave
    /// the `i32` range.
    pub fn step(self, point: Point) -> Option<Point> {
        let (dx, dy) = self.delta();
        Some(Point::new(point.x.checked_add(dx)?, point.y.checked_add(dy)?))
    }

    /// Heading of a single unit step from `from` to `to`. Returns [None] for anything that is
    /// not exactly one unit on exactly one axis.
    pub fn between(from: &Point, to: &Point) -> Option<Cardinal> {
        match (to.x as i64 - from.x as i64, to.y as i64 - from.y as i64) {
            (1, 0) => Some(Cardinal::East),
            (-1, 0) => Some(Cardinal::West),
            (0, 1) => Some(Cardinal::North),
            (0, -1) => Some(Cardinal::South),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cardinal::North => "north",
            Cardinal::East => "east",
            Cardinal::South => "south",
            Cardinal::West => "west",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Cardinal::North => "North",
            Cardinal::East => "East",
            Cardinal::South => "South",
            Cardinal::West => "West",
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cardinal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Cardinal::North),
            "east" => Ok(Cardinal::East),
            "south" => Ok(Cardinal::South),
            "west" => Ok(Cardinal::West),
            _ => Err(()),
        }
    }
}

/// Fences only ever extend east or north from their anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FenceOrientation {
    East,
    North,
}

impl FromStr for FenceOrientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "east" => Ok(FenceOrientation::East),
            "north" => Ok(FenceOrientation::North),
            _ => Err(()),
        }
    }
}
