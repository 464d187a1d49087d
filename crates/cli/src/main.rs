use std::process::ExitCode;

fn main() -> ExitCode {
    unibase_cli::run()
}
