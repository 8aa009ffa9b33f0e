use thiserror::Error;

/// The only way a search can fail. Carries no partial path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no path found after expanding {expanded} nodes")]
    NoPathFound { expanded: usize },
}

/// Failures reported by the command layer. The message is what the agent sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid option: {0}\nType 'help' to see a list of commands.")]
    InvalidOption(String),

    #[error("You need to specify an obstacle type.")]
    MissingObstacleType,

    #[error("Invalid obstacle type.")]
    InvalidObstacleType,

    #[error("Incorrect number of arguments.")]
    ArgumentCount,

    #[error("{0}")]
    InvalidCoordinates(&'static str),

    #[error("Orientation must be 'east' or 'north'.")]
    InvalidOrientation,

    #[error("Length must be a valid integer greater than 0.")]
    InvalidLength,

    #[error("Range must be a valid positive number.")]
    InvalidRange,

    #[error("Direction must be 'north', 'south', 'east' or 'west'.")]
    InvalidDirection,

    #[error("Width and height must be valid positive integers.")]
    InvalidDimensions,

    #[error("Agent, your location is compromised. Abort mission.")]
    LocationCompromised,

    #[error("You cannot safely move in any direction. Abort mission.")]
    NoSafeDirection,

    #[error("Agent, you are already at the objective.")]
    AlreadyAtObjective,

    #[error("The objective is blocked by an obstacle and cannot be reached.")]
    ObjectiveBlocked,

    #[error("There is no safe path to the objective.")]
    NoSafePath(#[from] PathError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected a positive integer or 'none'")]
    InvalidValue { key: &'static str, value: String },
}

pub type CommandResult<T> = Result<T, CommandError>;
