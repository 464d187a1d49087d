use std::fs;
use std::io::{self, Read};
use std::path::Path;

use unibase_core::diagnosis::{diagnose, DiagnosisAnswers};

use super::{CommandResult, EXIT_INPUT, EXIT_VALIDATION};

const COMMAND: &str = "diagnose";

pub fn run(answers_path: &Path, pretty: bool) -> CommandResult {
    let raw = match read_input(answers_path) {
        Ok(raw) => raw,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "io",
                format!("could not read `{}`: {error}", answers_path.display()),
                EXIT_INPUT,
            )
        }
    };

    let answers: DiagnosisAnswers = match serde_json::from_str(&raw) {
        Ok(answers) => answers,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "parse",
                format!("answers are not a valid questionnaire: {error}"),
                EXIT_INPUT,
            )
        }
    };

    if let Err(error) = answers.validate_required() {
        return CommandResult::failure(COMMAND, "validation", error.to_string(), EXIT_VALIDATION);
    }

    let result = diagnose(&answers);
    let rendered =
        if pretty { serde_json::to_string_pretty(&result) } else { serde_json::to_string(&result) };

    match rendered {
        Ok(output) => CommandResult::output(output),
        Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), EXIT_INPUT),
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(path)
}
