//! Text command layer: parses agent commands and runs them against one [ObstacleField].
use grid_util::point::Point;
use log::debug;
use std::str::FromStr;

use crate::direction::{Cardinal, FenceOrientation};
use crate::error::{CommandError, CommandResult};
use crate::field::{ObstacleField, Walkable};
use crate::instructions::{compress_path, Instruction};
use crate::obstacle::Obstacle;
use crate::solver::AstarSolver;

pub const HELP: &str = "Valid commands are:
add guard <x> <y>: registers a guard obstacle
add fence <x> <y> <orientation> <length>: registers a fence obstacle. Orientation must be 'east' or 'north'.
add sensor <x> <y> <radius>: registers a sensor obstacle
add camera <x> <y> <direction>: registers a camera obstacle. Direction must be 'north', 'south', 'east' or 'west'.
check <x> <y>: checks whether a location and its surroundings are safe
map <x> <y> <width> <height>: draws a text-based map of registered obstacles
path <agent x> <agent y> <objective x> <objective y>: finds a path free of obstacles
help: displays this help message
exit: closes this program
";

const BAD_COORDINATES: &str = "Coordinates are not valid integers.";
const BAD_AGENT: &str = "Agent coordinates are not valid integers.";
const BAD_OBJECTIVE: &str = "Objective coordinates are not valid integers.";

/// A fully validated command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add(Obstacle),
    Check(Point),
    Map {
        origin: Point,
        width: u32,
        height: u32,
    },
    Path {
        agent: Point,
        objective: Point,
    },
    Help,
    Exit,
}

fn expect_args(tokens: &[&str], count: usize) -> CommandResult<()> {
    if tokens.len() == count {
        Ok(())
    } else {
        Err(CommandError::ArgumentCount)
    }
}

fn parse_point(x: &str, y: &str, message: &'static str) -> CommandResult<Point> {
    match (x.parse::<i32>(), y.parse::<i32>()) {
        (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
        _ => Err(CommandError::InvalidCoordinates(message)),
    }
}

fn parse_add(tokens: &[&str]) -> CommandResult<Obstacle> {
    let kind = tokens.get(1).ok_or(CommandError::MissingObstacleType)?;
    match *kind {
        "guard" => {
            expect_args(tokens, 4)?;
            let position = parse_point(tokens[2], tokens[3], BAD_COORDINATES)?;
            Ok(Obstacle::guard(position))
        }
        "fence" => {
            expect_args(tokens, 6)?;
            let position = parse_point(tokens[2], tokens[3], BAD_COORDINATES)?;
            let orientation = FenceOrientation::from_str(tokens[4])
                .map_err(|_| CommandError::InvalidOrientation)?;
            let length = tokens[5]
                .parse::<i32>()
                .ok()
                .filter(|&l| l > 0)
                .ok_or(CommandError::InvalidLength)?;
            Ok(Obstacle::fence(position, orientation, length.unsigned_abs()))
        }
        "sensor" => {
            expect_args(tokens, 5)?;
            let position = parse_point(tokens[2], tokens[3], BAD_COORDINATES)?;
            let radius = tokens[4]
                .parse::<f32>()
                .ok()
                .filter(|r| r.is_finite() && *r > 0.0)
                .ok_or(CommandError::InvalidRange)?;
            Ok(Obstacle::sensor(position, radius))
        }
        "camera" => {
            expect_args(tokens, 5)?;
            let position = parse_point(tokens[2], tokens[3], BAD_COORDINATES)?;
            let facing =
                Cardinal::from_str(tokens[4]).map_err(|_| CommandError::InvalidDirection)?;
            Ok(Obstacle::camera(position, facing))
        }
        _ => Err(CommandError::InvalidObstacleType),
    }
}

impl Command {
    /// Parses one input line. Tokens are separated by any amount of whitespace.
    pub fn parse(line: &str) -> CommandResult<Command> {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        let Some(&name) = tokens.first() else {
            return Err(CommandError::InvalidOption(String::new()));
        };
        match name {
            "add" => parse_add(&tokens).map(Command::Add),
            "check" => {
                expect_args(&tokens, 3)?;
                parse_point(tokens[1], tokens[2], BAD_COORDINATES).map(Command::Check)
            }
            "map" => {
                expect_args(&tokens, 5)?;
                let origin = parse_point(tokens[1], tokens[2], BAD_COORDINATES)?;
                let dimension = |s: &str| s.parse::<u32>().ok().filter(|&d| d > 0);
                match (dimension(tokens[3]), dimension(tokens[4])) {
                    (Some(width), Some(height)) => Ok(Command::Map {
                        origin,
                        width,
                        height,
                    }),
                    _ => Err(CommandError::InvalidDimensions),
                }
            }
            "path" => {
                expect_args(&tokens, 5)?;
                let agent = parse_point(tokens[1], tokens[2], BAD_AGENT)?;
                let objective = parse_point(tokens[3], tokens[4], BAD_OBJECTIVE)?;
                Ok(Command::Path { agent, objective })
            }
            "help" => Ok(Command::Help),
            // Only a bare `exit` ends the session.
            "exit" if tokens.len() == 1 => Ok(Command::Exit),
            other => Err(CommandError::InvalidOption(other.to_owned())),
        }
    }
}

/// Owns the obstacle field for the lifetime of an interactive session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub field: ObstacleField,
    pub solver: AstarSolver,
}

impl Session {
    pub fn new(solver: AstarSolver) -> Session {
        Session {
            field: ObstacleField::new(),
            solver,
        }
    }

    /// Parses and runs one line, returning the text to show the agent.
    pub fn handle_line(&mut self, line: &str) -> CommandResult<String> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> CommandResult<String> {
        debug!("Executing {:?}", command);
        match command {
            Command::Add(obstacle) => {
                let name = obstacle.tag().name();
                self.field.register(obstacle);
                Ok(format!("Successfully added {} obstacle.", name))
            }
            Command::Check(point) => self.check(point),
            Command::Map {
                origin,
                width,
                height,
            } => {
                let mut out = String::from("Here is a map of obstacles in the selected region:");
                for row in self.field.render(origin, width, height) {
                    out.push('\n');
                    out.push_str(&row);
                }
                Ok(out)
            }
            Command::Path { agent, objective } => {
                let instructions = self.plan(agent, objective)?;
                let mut out = String::from("The following path will take you to the objective:");
                for instruction in instructions {
                    out.push('\n');
                    out.push_str(&instruction.to_string());
                }
                Ok(out)
            }
            Command::Help => Ok(HELP.to_owned()),
            Command::Exit => Ok(String::new()),
        }
    }

    fn check(&self, point: Point) -> CommandResult<String> {
        if !self.field.is_walkable(&point) {
            return Err(CommandError::LocationCompromised);
        }
        let safe = self.field.safe_directions(&point);
        if safe.is_empty() {
            return Err(CommandError::NoSafeDirection);
        }
        let mut out = String::from("You can safely take any of the following directions:");
        for dir in safe {
            out.push('\n');
            out.push_str(dir.title());
        }
        Ok(out)
    }

    /// Validates the request, searches and compresses the result.
    pub fn plan(&self, agent: Point, objective: Point) -> CommandResult<Vec<Instruction>> {
        if agent == objective {
            return Err(CommandError::AlreadyAtObjective);
        }
        if !self.field.is_walkable(&objective) {
            return Err(CommandError::ObjectiveBlocked);
        }
        let path = self.solver.find_path(&self.field, agent, objective)?;
        Ok(compress_path(&path))
    }
}
