use hazard_pathfinding::commands::Session;
use hazard_pathfinding::{AstarSolver, CommandError, ObstacleField, Point, SearchConfig};
use std::sync::Arc;
use std::thread;

fn run(session: &mut Session, line: &str) -> Result<String, String> {
    session.handle_line(line).map_err(|e| e.to_string())
}

#[test]
fn register_and_map() {
    let mut session = Session::default();
    assert_eq!(
        run(&mut session, "add guard 1 1"),
        Ok("Successfully added guard obstacle.".to_owned())
    );
    assert_eq!(
        run(&mut session, "add fence 0 3 east 4"),
        Ok("Successfully added fence obstacle.".to_owned())
    );
    assert_eq!(
        run(&mut session, "add sensor 3 0 1"),
        Ok("Successfully added sensor obstacle.".to_owned())
    );
    assert_eq!(
        run(&mut session, "add camera 0 0 west"),
        Ok("Successfully added camera obstacle.".to_owned())
    );
    let map = run(&mut session, "map -1 0 5 4").unwrap();
    assert_eq!(
        map,
        "Here is a map of obstacles in the selected region:\n\
         .FFFF\n\
         .....\n\
         C.G..\n\
         CC..S"
    );
}

#[test]
fn check_reports_safe_directions() {
    let mut session = Session::default();
    run(&mut session, "add guard 0 1").unwrap();
    run(&mut session, "add guard 1 0").unwrap();
    assert_eq!(
        run(&mut session, "check 0 0"),
        Ok("You can safely take any of the following directions:\nSouth\nWest".to_owned())
    );
    assert_eq!(
        run(&mut session, "check 0 1"),
        Err("Agent, your location is compromised. Abort mission.".to_owned())
    );
    run(&mut session, "add guard 0 -1").unwrap();
    run(&mut session, "add guard -1 0").unwrap();
    assert_eq!(
        run(&mut session, "check 0 0"),
        Err("You cannot safely move in any direction. Abort mission.".to_owned())
    );
}

#[test]
fn path_instructions() {
    let mut session = Session::default();
    assert_eq!(
        run(&mut session, "path 0 0 0 3"),
        Ok("The following path will take you to the objective:\nHead north for 3 klicks.".to_owned())
    );
    assert_eq!(
        run(&mut session, "path 0 0 -1 0"),
        Ok("The following path will take you to the objective:\nHead west for 1 klick.".to_owned())
    );
    assert_eq!(
        run(&mut session, "path 2 2 2 2"),
        Err("Agent, you are already at the objective.".to_owned())
    );
    run(&mut session, "add guard 4 4").unwrap();
    assert_eq!(
        run(&mut session, "path 0 0 4 4"),
        Err("The objective is blocked by an obstacle and cannot be reached.".to_owned())
    );
}

/// Fences forming a closed ring around the objective.
#[test]
fn enclosed_objective_has_no_safe_path() {
    let mut session = Session::new(AstarSolver::with_config(SearchConfig {
        max_expansions: Some(3_000),
    }));
    for line in [
        "add fence -2 -2 east 5",
        "add fence -2 2 east 5",
        "add fence -2 -1 north 3",
        "add fence 2 -1 north 3",
    ] {
        run(&mut session, line).unwrap();
    }
    assert_eq!(
        run(&mut session, "path 6 0 0 0"),
        Err("There is no safe path to the objective.".to_owned())
    );
    // From inside the ring the frontier empties on its own.
    assert!(matches!(
        session.handle_line("path 0 0 9 9"),
        Err(CommandError::NoSafePath(_))
    ));
}

#[test]
fn unknown_command() {
    let mut session = Session::default();
    assert_eq!(
        run(&mut session, "teleport 1 2"),
        Err("Invalid option: teleport\nType 'help' to see a list of commands.".to_owned())
    );
    assert!(run(&mut session, "help").unwrap().starts_with("Valid commands are:"));
    assert_eq!(
        run(&mut session, "exit foo"),
        Err("Invalid option: exit\nType 'help' to see a list of commands.".to_owned())
    );
}

/// Searches hold the read guard, so a concurrent writer either lands before or after a search.
#[test]
fn concurrent_registration_and_search() {
    let shared = ObstacleField::new().into_shared();
    let writer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for y in -20..=20 {
                shared.write().unwrap().register_guard(5, y);
            }
        })
    };
    let solver = AstarSolver::new();
    for _ in 0..10 {
        let path = solver
            .find_path_shared(&shared, Point::new(0, 0), Point::new(10, 0))
            .unwrap();
        assert_eq!(path.last(), Some(&Point::new(10, 0)));
    }
    writer.join().unwrap();
    let path = solver
        .find_path_shared(&shared, Point::new(0, 0), Point::new(10, 0))
        .unwrap();
    assert_eq!(solver.get_path_cost(&path), 10 + 2 * 21);
}
