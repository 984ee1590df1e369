use clap::{Arg, Command};
use collab_backend::db::models::project::ProjectCandidate;
use collab_backend::validation::validate_project;
use std::io::Read;
use std::process::ExitCode;

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> ExitCode {
    let matches = Command::new("validate_project")
        .about("Validate a project submission JSON file")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Path to the JSON submission, or - for stdin")
                .default_value("-"),
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .help("Pretty-print the result")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or("-");

    let input = match read_input(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            return ExitCode::from(2);
        }
    };

    let candidate: ProjectCandidate = match serde_json::from_str(&input) {
        Ok(candidate) => candidate,
        Err(e) => {
            eprintln!("Invalid JSON: {}", e);
            return ExitCode::from(2);
        }
    };

    let result = validate_project(&candidate);
    let output = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to encode result: {}", e);
            return ExitCode::from(2);
        }
    }

    if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
