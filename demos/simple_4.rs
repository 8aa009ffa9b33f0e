use hazard_pathfinding::{compress_path, AstarSolver, ObstacleField, Point};

// In this example a path is found around a single guard
//  ___
// |   |
// |SGE|
// |   |
//  ___
// where
// - G marks the guard
// - S marks the start
// - E marks the end
//
// Movement is restricted to the 4-neighbourhood

fn main() {
    let mut field = ObstacleField::new();
    field.register_guard(1, 0);
    println!("{}", field);
    let start = Point::new(0, 0);
    let end = Point::new(2, 0);
    let path = AstarSolver::new().find_path(&field, start, end).unwrap();
    println!("Path:");
    for p in &path {
        println!("{:?}", p);
    }
    for instruction in compress_path(&path) {
        println!("{}", instruction);
    }
}
