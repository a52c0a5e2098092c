use crate::commands::{run_candidates, run_rubric, run_score, CandidatesCommand, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ospa_scorer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "OSPA Scorer",
    about = "Score Outstanding School Paper Adviser nominations and manage the candidate registry",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Look up the points for a single achievement or service
    Score(ScoreArgs),
    /// Print every rubric point table
    Rubric,
    /// Inspect, export, sync or delete stored candidates
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => {
            run_score(args);
            Ok(())
        }
        Command::Rubric => {
            run_rubric();
            Ok(())
        }
        Command::Candidates { command } => run_candidates(command).await,
    }
}
