//! # hazard_pathfinding
//!
//! Obstacle avoidance on an unbounded integer plane. Guards, fences, sensors and cameras are
//! registered in an [ObstacleField](field::ObstacleField), which decides for any coordinate
//! whether it is occupied and by which hazard. An [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! search over the 4-neighbourhood, guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), finds routes around
//! them, and [compress_path](instructions::compress_path) turns a route into
//! "Head east for 2 klicks." style instructions.
//!
//! Because the plane has no border, a goal that is walled in can never be proven unreachable
//! from outside the wall. Searches are therefore bounded by
//! [SearchConfig::max_expansions](config::SearchConfig::max_expansions).
pub mod astar;
pub mod commands;
pub mod config;
pub mod direction;
pub mod error;
pub mod field;
pub mod instructions;
pub mod obstacle;
pub mod solver;

pub use config::SearchConfig;
pub use direction::{Cardinal, FenceOrientation};
pub use error::{CommandError, ConfigError, PathError};
pub use field::{ObstacleField, SharedField, Walkable};
pub use grid_util::point::Point;
pub use instructions::{compress_path, expand_instructions, Instruction};
pub use obstacle::{HazardTag, Obstacle, Shape};
pub use solver::AstarSolver;

/// Default bound on the number of nodes a single search may expand.
pub const DEFAULT_MAX_EXPANSIONS: usize = 200_000;

/// At most four successors per node on the 4-neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 4;
