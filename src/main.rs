use std::io::{self, BufRead, Write};

use hazard_pathfinding::commands::{Command, Session, HELP};
use hazard_pathfinding::{AstarSolver, SearchConfig};
use log::{error, info};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match SearchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}; using defaults", e);
            SearchConfig::default()
        }
    };
    info!("Search configuration: {:?}", config);
    let mut session = Session::new(AstarSolver::with_config(config));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Welcome to the Threat-o-tron 9000 Obstacle Avoidance System.\n"
    )?;
    writeln!(stdout, "{}", HELP)?;

    let mut lines = stdin.lock().lines();
    loop {
        writeln!(stdout, "Enter command:")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if matches!(Command::parse(&line), Ok(Command::Exit)) {
            break;
        }
        match session.handle_line(&line) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }
    writeln!(stdout, "Thank you for using the Threat-o-tron 9000.")?;
    Ok(())
}
