//! Command-line entry point for the hospital record console.

use carebook::logging::init_cli_logger;
use carebook::HospitalCli;
use clap::Parser;
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "carebook", version, about = "Hospital patient and doctor record console")]
struct Args {
    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    tracing::debug!("starting session");

    let stdin = io::stdin();
    let mut cli = HospitalCli::new(stdin.lock(), io::stdout());

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session ended");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
