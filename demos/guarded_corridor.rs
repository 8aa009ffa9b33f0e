use hazard_pathfinding::{
    compress_path, AstarSolver, Cardinal, FenceOrientation, ObstacleField, Point,
};

// A corridor between two fences, plugged by a sensor near its mouth, with a north-facing camera
// above it. The route has to leave the corridor and go around a fence. The map is printed
// before the route.
fn main() {
    let mut field = ObstacleField::new();
    field.register_fence(0, 2, FenceOrientation::East, 12);
    field.register_fence(0, -2, FenceOrientation::East, 12);
    field.register_camera(9, 6, Cardinal::North);
    field.register_sensor(3, 0, 1.5);
    for row in field.render(Point::new(-2, -4), 16, 12) {
        println!("{}", row);
    }
    let start = Point::new(-1, 0);
    let end = Point::new(13, 0);
    match AstarSolver::new().find_path(&field, start, end) {
        Ok(path) => {
            for instruction in compress_path(&path) {
                println!("{}", instruction);
            }
        }
        Err(e) => println!("{}", e),
    }
}
