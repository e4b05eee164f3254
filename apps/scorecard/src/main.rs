use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use scorecard::bin_support::Runner;
use scorecard::config::{Config, LogFormat, OutputFormat};
use scorecard::{AppError, GameSession};
use tracing::{error, info};

mod telemetry;

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(about = "Two-team Spades scorecard for rounds 3 through 13")]
struct Args {
    /// Maroon team name (overrides SCORECARD_TEAM1_NAME)
    #[arg(long)]
    team1: Option<String>,

    /// Gold team name (overrides SCORECARD_TEAM2_NAME)
    #[arg(long)]
    team2: Option<String>,

    /// How `show` prints the scorecard (overrides SCORECARD_OUTPUT)
    #[arg(long)]
    output: Option<OutputFormat>,

    /// Log line format on stderr (overrides SCORECARD_LOG_FORMAT)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

fn run(args: Args, config: Config) -> Result<(), AppError> {
    let session = GameSession::with_names(
        args.team1.unwrap_or(config.team1_name),
        args.team2.unwrap_or(config.team2_name),
    );
    let output = args.output.unwrap_or(config.output);
    let mut runner = Runner::new(session, output, io::stdout().lock());
    let mut errors = io::stderr().lock();

    match args.script {
        Some(path) => {
            info!(script = %path.display(), "reading commands from script");
            let file = File::open(&path)?;
            runner.run(BufReader::new(file), &mut errors)?;
            // Scripts end by printing the final card.
            runner.execute(scorecard::bin_support::Command::Show)?;
        }
        None => runner.run(io::stdin().lock(), &mut errors)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    telemetry::init_tracing(args.log_format.unwrap_or(config.log_format));

    if let Err(e) = run(args, config) {
        error!(code = %e.code(), error = %e, "scorecard stopped");
        eprintln!("❌ [{}] {e}", e.code());
        std::process::exit(1);
    }
}
