pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "unibase",
    about = "Unibase wellness diagnosis CLI",
    long_about = "Run the questionnaire diagnosis offline and inspect effective configuration.",
    after_help = "Examples:\n  unibase diagnose --answers answers.json --pretty\n  unibase config"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a unibase.toml config file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Score a questionnaire answers file and print the diagnosis result")]
    Diagnose {
        #[arg(long, help = "Questionnaire answers JSON file, or `-` for stdin")]
        answers: PathBuf,
        #[arg(long, help = "Pretty-print the result JSON")]
        pretty: bool,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Diagnose { answers, pretty } => commands::diagnose::run(&answers, pretty),
        Command::Config => commands::config::run(cli.config.as_deref()),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
