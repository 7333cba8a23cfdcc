use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use xcorr::cmd;
use xcorr::runtime::{self, LogLevel, LogMode};

pub const DEFAULT_LOG_PATH: &str = "xcorr.log";

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    // trace, debug, info, warn, error or off
    #[arg(long = "log-level", global = true, default_value = "info")]
    log_level: LogLevel,

    // terminal, path, both or discard
    #[arg(long = "log-mode", global = true, default_value = "terminal")]
    log_mode: LogMode,

    #[arg(long = "log-path", global = true, value_parser = clap::value_parser!(PathBuf), default_value = DEFAULT_LOG_PATH)]
    log_path: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    Run(cmd::RunCMD),
    Plan(cmd::PlanCMD),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = runtime::setup_global_logger(cli.log_level, cli.log_mode, cli.log_path.clone()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Run(mut cmd) => cmd.try_execute(),
        Commands::Plan(mut cmd) => cmd.try_execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
