/// Fuzzes the search engine on many random guard layouts. Every returned path must be a walkable
/// unit-step walk, and its length must match a breadth-first reference distance.
use hazard_pathfinding::{AstarSolver, ObstacleField, PathError, Point, SearchConfig, Walkable};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_field(n: i32, rng: &mut StdRng) -> ObstacleField {
    let mut field = ObstacleField::new();
    for x in 0..n {
        for y in 0..n {
            if rng.gen_bool(0.35) {
                field.register_guard(x, y);
            }
        }
    }
    field
}

/// Breadth-first distance restricted to the box `[-1, n]`. Guards only live in `[0, n)`, so the
/// one-wide free ring around them is enough for shortest paths.
fn reference_distance(field: &ObstacleField, n: i32, start: Point, goal: Point) -> Option<i64> {
    let in_box = |p: &Point| p.x >= -1 && p.y >= -1 && p.x <= n && p.y <= n;
    let mut dist: HashMap<Point, i64> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if p == goal {
            return Some(d);
        }
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let q = Point::new(p.x + dx, p.y + dy);
            if in_box(&q) && field.is_walkable(&q) && !dist.contains_key(&q) {
                dist.insert(q, d + 1);
                queue.push_back(q);
            }
        }
    }
    None
}

fn visualize_field(field: &ObstacleField, n: i32, start: &Point, end: &Point) {
    for y in (-1..=n).rev() {
        for x in -1..=n {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("E");
            } else if let Some(tag) = field.query(x, y) {
                print!("{}", tag);
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_walk(field: &ObstacleField, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert_eq!((w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs(), 1);
        assert!(field.is_walkable(&w[1]));
    }
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_FIELDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(0);
    // Goals walled in by guards are unreachable from outside; the bound keeps those cases short.
    let solver = AstarSolver::with_config(SearchConfig {
        max_expansions: Some(10_000),
    });
    let start = Point::new(-1, -1);
    for _ in 0..N_FIELDS {
        let field = random_field(N, &mut rng);
        let goal = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if !field.is_walkable(&goal) {
            continue;
        }
        let reference = reference_distance(&field, N, start, goal);
        let result = solver.find_path(&field, start, goal);
        if result.is_ok() != reference.is_some() {
            visualize_field(&field, N, &start, &goal);
        }
        match (result, reference) {
            (Ok(path), Some(distance)) => {
                assert_walk(&field, &path, start, goal);
                assert_eq!(solver.get_path_cost(&path), distance);
            }
            (Err(PathError::NoPathFound { .. }), None) => {}
            (result, reference) => panic!("search {:?} disagrees with {:?}", result, reference),
        }
    }
}

#[test]
fn fuzz_obstacle_free_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ObstacleField::new();
    let solver = AstarSolver::new();
    for _ in 0..200 {
        let start = Point::new(rng.gen_range(-50..50), rng.gen_range(-50..50));
        let goal = Point::new(rng.gen_range(-50..50), rng.gen_range(-50..50));
        let path = solver.find_path(&field, start, goal).unwrap();
        assert_walk(&field, &path, start, goal);
        let manhattan = ((start.x - goal.x).abs() + (start.y - goal.y).abs()) as i64;
        assert_eq!(solver.get_path_cost(&path), manhattan);
    }
}
