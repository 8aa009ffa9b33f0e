use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;
use std::sync::PoisonError;

use crate::astar::astar_closed;
use crate::config::SearchConfig;
use crate::direction::Cardinal;
use crate::error::PathError;
use crate::field::{SharedField, Walkable};
use crate::N_SMALLVEC_SIZE;

/// Manhattan distance, widened to `i64` so opposite corners of the `i32` plane still fit.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i64 {
    (p1.x as i64 - p2.x as i64).abs() + (p1.y as i64 - p2.y as i64).abs()
}

/// A* on the 4-connected unbounded plane with unit step costs and the Manhattan heuristic.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }

    /// Walkable axis-aligned neighbours of `node`, each at cost 1, in east, west, north, south
    /// order.
    pub fn successors<W: Walkable + ?Sized>(
        &self,
        oracle: &W,
        node: &Point,
    ) -> SmallVec<[(Point, i64); N_SMALLVEC_SIZE]> {
        Cardinal::SEARCH_ORDER
            .into_iter()
            .filter_map(|dir| dir.step(*node))
            .filter(|p| oracle.is_walkable(p))
            .map(|p| (p, 1))
            .collect()
    }

    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i64 {
        manhattan_distance(p1, p2)
    }

    /// Number of unit steps along `path`.
    pub fn get_path_cost(&self, path: &[Point]) -> i64 {
        path.windows(2)
            .map(|w| manhattan_distance(&w[0], &w[1]))
            .sum()
    }

    /// Computes a path from `start` to `goal`, both included, that only steps on coordinates
    /// `oracle` reports as walkable. The start itself is not checked, so an agent standing in a
    /// hazard can still be routed out of it. The caller is expected to reject `start == goal`
    /// and a blocked goal beforehand.
    pub fn find_path<W: Walkable + ?Sized>(
        &self,
        oracle: &W,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        info!("Computing path from {} to {}", start, goal);
        let result = astar_closed(
            &start,
            |node| self.successors(oracle, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            self.config.max_expansions,
        );
        match &result {
            Ok((_, cost)) => info!("Found path of {} steps to {}", cost, goal),
            Err(e) => info!("{} is not reachable from {}: {}", goal, start, e),
        }
        result.map(|(path, _cost)| path)
    }

    /// Like [find_path](Self::find_path) on a field shared between threads. The read guard is
    /// held for the whole search, so concurrent registrations wait until it completes.
    pub fn find_path_shared(
        &self,
        field: &SharedField,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        // The field is append-only, so a guard left behind by a panicking writer is still
        // consistent.
        let guard = field.read().unwrap_or_else(PoisonError::into_inner);
        self.find_path(&*guard, start, goal)
    }
}
