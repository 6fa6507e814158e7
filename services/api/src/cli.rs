use crate::demo::{run_demo, run_dscr, run_fix_flip, DemoArgs, DscrArgs, FixFlipArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lendcore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lending Desk",
    about = "Demonstrate and run the investment lending mock API from the command line",
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
    /// Run a single underwriting calculation and print the analysis
    Underwrite {
        #[command(subcommand)]
        command: UnderwriteCommand,
    },
    /// Run an end-to-end CLI demo covering search, quoting, underwriting, and intake
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum UnderwriteCommand {
    /// Debt service coverage analysis for a rental loan
    Dscr(DscrArgs),
    /// Profit and return analysis for a fix & flip deal
    FixFlip(FixFlipArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Simulated backend delay applied before each mock API response
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Underwrite {
            command: UnderwriteCommand::Dscr(args),
        } => run_dscr(args),
        Command::Underwrite {
            command: UnderwriteCommand::FixFlip(args),
        } => run_fix_flip(args),
        Command::Demo(args) => run_demo(args),
    }
}
