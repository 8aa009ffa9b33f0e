use core::fmt;
use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};

use crate::direction::{Cardinal, FenceOrientation};
use crate::obstacle::{HazardTag, Obstacle};

/// Answers whether a coordinate can be stepped on. The search engine learns about the world only
/// through this trait.
pub trait Walkable {
    fn is_walkable(&self, point: &Point) -> bool;
}

/// An [ObstacleField] shared between threads. Searches hold a read guard for their whole
/// duration and registrations take the write guard, so a search never observes a half-applied
/// registration.
pub type SharedField = Arc<RwLock<ObstacleField>>;

/// Append-only registry of obstacles on the unbounded plane. Registration order matters: when
/// regions overlap, the earliest registered obstacle determines the reported [HazardTag].
#[derive(Clone, Debug, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> ObstacleField {
        ObstacleField::default()
    }

    /// Appends an obstacle. There is no rejection and no deduplication.
    pub fn register(&mut self, obstacle: Obstacle) {
        debug!(
            "Registering {:?} obstacle #{} at {}",
            obstacle.tag(),
            self.obstacles.len(),
            obstacle.position
        );
        self.obstacles.push(obstacle);
    }
    pub fn register_guard(&mut self, x: i32, y: i32) {
        self.register(Obstacle::guard(Point::new(x, y)));
    }
    pub fn register_fence(&mut self, x: i32, y: i32, orientation: FenceOrientation, length: u32) {
        self.register(Obstacle::fence(Point::new(x, y), orientation, length));
    }
    pub fn register_sensor(&mut self, x: i32, y: i32, radius: f32) {
        self.register(Obstacle::sensor(Point::new(x, y), radius));
    }
    pub fn register_camera(&mut self, x: i32, y: i32, facing: Cardinal) {
        self.register(Obstacle::camera(Point::new(x, y), facing));
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Tag of the first registered obstacle covering `(x, y)`, or [None] if the coordinate is
    /// empty.
    pub fn query(&self, x: i32, y: i32) -> Option<HazardTag> {
        self.query_point(&Point::new(x, y))
    }
    pub fn query_point(&self, point: &Point) -> Option<HazardTag> {
        self.obstacles.iter().find_map(|o| o.hazard_at(point))
    }

    /// Directions in which the neighbouring coordinate is walkable, in North, South, East, West
    /// order. A step off the edge of the plane is never safe.
    pub fn safe_directions(&self, point: &Point) -> SmallVec<[Cardinal; 4]> {
        Cardinal::REPORT_ORDER
            .into_iter()
            .filter(|dir| dir.step(*point).is_some_and(|p| self.is_walkable(&p)))
            .collect()
    }

    /// Renders the rectangle with lower-left corner `origin` as rows of characters, top row
    /// first. Empty coordinates are drawn as `.`, occupied ones as their hazard letter.
    pub fn render(&self, origin: Point, width: u32, height: u32) -> Vec<String> {
        let (x0, y0) = (origin.x as i64, origin.y as i64);
        (0..height as i64)
            .rev()
            .map(|dy| {
                (0..width as i64)
                    .map(|dx| {
                        // Columns or rows beyond the i32 range cannot hold obstacles.
                        match (i32::try_from(x0 + dx), i32::try_from(y0 + dy)) {
                            (Ok(x), Ok(y)) => self.query(x, y).map_or('.', HazardTag::symbol),
                            _ => '.',
                        }
                    })
                    .collect::<String>()
            })
            .collect()
    }

    pub fn into_shared(self) -> SharedField {
        Arc::new(RwLock::new(self))
    }
}

impl Walkable for ObstacleField {
    fn is_walkable(&self, point: &Point) -> bool {
        self.query_point(point).is_none()
    }
}

impl fmt::Display for ObstacleField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Obstacles:")?;
        for obstacle in &self.obstacles {
            writeln!(f, "{} at {}: {:?}", obstacle.tag(), obstacle.position, obstacle.shape)?;
        }
        Ok(())
    }
}
