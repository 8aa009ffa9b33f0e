use core::fmt;

use grid_util::point::Point;

use crate::direction::{Cardinal, FenceOrientation};

/// The kind of hazard occupying a coordinate, rendered as a single letter on maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HazardTag {
    Guard,
    Fence,
    Sensor,
    Camera,
}

impl HazardTag {
    pub fn symbol(self) -> char {
        match self {
            HazardTag::Guard => 'G',
            HazardTag::Fence => 'F',
            HazardTag::Sensor => 'S',
            HazardTag::Camera => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HazardTag::Guard => "guard",
            HazardTag::Fence => "fence",
            HazardTag::Sensor => "sensor",
            HazardTag::Camera => "camera",
        }
    }
}

impl fmt::Display for HazardTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Variant-specific geometry of an [Obstacle]. All offsets are measured from the obstacle's
/// position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Occupies exactly its own coordinate.
    Guard,
    /// `length` collinear coordinates starting at the anchor, inclusive.
    Fence {
        orientation: FenceOrientation,
        length: u32,
    },
    /// Open disk: the boundary at exactly `radius` is not occupied.
    Sensor { radius: f32 },
    /// Infinite 90 degree cone bounded by the two diagonals around `facing`, boundary included.
    Camera { facing: Cardinal },
}

/// An immutable hazard anchored at a coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub position: Point,
    pub shape: Shape,
}

impl Obstacle {
    pub fn guard(position: Point) -> Obstacle {
        Obstacle {
            position,
            shape: Shape::Guard,
        }
    }

    pub fn fence(position: Point, orientation: FenceOrientation, length: u32) -> Obstacle {
        Obstacle {
            position,
            shape: Shape::Fence {
                orientation,
                length,
            },
        }
    }

    pub fn sensor(position: Point, radius: f32) -> Obstacle {
        Obstacle {
            position,
            shape: Shape::Sensor { radius },
        }
    }

    pub fn camera(position: Point, facing: Cardinal) -> Obstacle {
        Obstacle {
            position,
            shape: Shape::Camera { facing },
        }
    }

    pub fn tag(&self) -> HazardTag {
        match self.shape {
            Shape::Guard => HazardTag::Guard,
            Shape::Fence { .. } => HazardTag::Fence,
            Shape::Sensor { .. } => HazardTag::Sensor,
            Shape::Camera { .. } => HazardTag::Camera,
        }
    }

    /// Whether this obstacle covers `point`.
    pub fn occupies(&self, point: &Point) -> bool {
        // Offsets are widened so that anchors near the edge of the i32 range cannot overflow.
        let dx = point.x as i64 - self.position.x as i64;
        let dy = point.y as i64 - self.position.y as i64;
        match self.shape {
            Shape::Guard => dx == 0 && dy == 0,
            Shape::Fence {
                orientation,
                length,
            } => {
                let (along, across) = match orientation {
                    FenceOrientation::East => (dx, dy),
                    FenceOrientation::North => (dy, dx),
                };
                across == 0 && (0..length as i64).contains(&along)
            }
            Shape::Sensor { radius } => (dx as f64).hypot(dy as f64) < radius as f64,
            Shape::Camera { facing } => match facing {
                Cardinal::North => dx.abs() <= dy,
                Cardinal::South => dx.abs() <= -dy,
                Cardinal::East => dy.abs() <= dx,
                Cardinal::West => dy.abs() <= -dx,
            },
        }
    }

    /// The tag of this obstacle if it covers `point`.
    pub fn hazard_at(&self, point: &Point) -> Option<HazardTag> {
        if self.occupies(point) {
            Some(self.tag())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_occupies_only_itself() {
        let guard = Obstacle::guard(Point::new(3, -2));
        assert_eq!(guard.hazard_at(&Point::new(3, -2)), Some(HazardTag::Guard));
        for dir in Cardinal::SEARCH_ORDER {
            assert!(!guard.occupies(&dir.step(Point::new(3, -2)).unwrap()));
        }
    }

    #[test]
    fn fence_extent() {
        let fence = Obstacle::fence(Point::new(0, 0), FenceOrientation::East, 3);
        let covered = (-2..5)
            .flat_map(|x| (-2..3).map(move |y| Point::new(x, y)))
            .filter(|p| fence.occupies(p))
            .collect::<Vec<_>>();
        assert_eq!(
            covered,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );

        let north = Obstacle::fence(Point::new(5, 5), FenceOrientation::North, 2);
        assert!(north.occupies(&Point::new(5, 5)));
        assert!(north.occupies(&Point::new(5, 6)));
        assert!(!north.occupies(&Point::new(5, 7)));
        assert!(!north.occupies(&Point::new(5, 4)));
        assert!(!north.occupies(&Point::new(6, 5)));
    }

    #[test]
    fn sensor_boundary_is_open() {
        let sensor = Obstacle::sensor(Point::new(0, 0), 2.0);
        assert!(sensor.occupies(&Point::new(0, 0)));
        assert!(sensor.occupies(&Point::new(1, 1)));
        assert!(sensor.occupies(&Point::new(0, 1)));
        assert!(!sensor.occupies(&Point::new(2, 0)));
        assert!(!sensor.occupies(&Point::new(0, -2)));

        let fractional = Obstacle::sensor(Point::new(10, 10), 2.5);
        assert!(fractional.occupies(&Point::new(12, 10)));
        assert!(fractional.occupies(&Point::new(11, 12)));
        assert!(!fractional.occupies(&Point::new(12, 12)));

        // Single precision rounds this just below sqrt(2), so the diagonal stays clear.
        let narrow = Obstacle::sensor(Point::new(0, 0), 1.41421357);
        assert!(narrow.occupies(&Point::new(1, 0)));
        assert!(!narrow.occupies(&Point::new(1, 1)));
    }

    #[test]
    fn camera_cone() {
        let north = Obstacle::camera(Point::new(0, 0), Cardinal::North);
        assert!(north.occupies(&Point::new(0, 0)));
        assert!(north.occupies(&Point::new(0, 5)));
        assert!(north.occupies(&Point::new(3, 5)));
        assert!(north.occupies(&Point::new(-5, 5)));
        assert!(!north.occupies(&Point::new(6, 5)));
        assert!(!north.occupies(&Point::new(0, -1)));

        let south = Obstacle::camera(Point::new(0, 0), Cardinal::South);
        assert!(south.occupies(&Point::new(0, -5)));
        assert!(south.occupies(&Point::new(3, -5)));
        assert!(!south.occupies(&Point::new(6, -5)));
        assert!(!south.occupies(&Point::new(0, 5)));

        let east = Obstacle::camera(Point::new(1, 1), Cardinal::East);
        assert!(east.occupies(&Point::new(4, 4)));
        assert!(!east.occupies(&Point::new(3, 4)));

        let west = Obstacle::camera(Point::new(1, 1), Cardinal::West);
        assert!(west.occupies(&Point::new(-2, -2)));
        assert!(!west.occupies(&Point::new(2, 1)));
    }
}
