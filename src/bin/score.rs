//! Offline scorer for LifeBeat patient parameters.
//!
//! Reads one JSON object of patient parameters and prints the fallback
//! model's response as pretty JSON, exactly as `/api/predict-ml` would
//! return it with no primary model configured.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin score -- [patient.json] [--no-validate]
//! echo '{"age": 58, ...}' | cargo run --bin score
//! ```

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use lifebeat::adapters::FALLBACK_MODEL_NAME;
use lifebeat::application::Assessment;
use lifebeat::domain::{score, PatientParameters};
use lifebeat::{LifeBeatError, Result};

fn usage() -> LifeBeatError {
    LifeBeatError::Config("Usage: score [<patient.json>] [--no-validate]".to_string())
}

struct Args {
    input: Option<PathBuf>,
    validate: bool,
}

fn parse_args() -> Result<Args> {
    let mut input: Option<PathBuf> = None;
    let mut validate = true;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--no-validate" => validate = false,
            "-h" | "--help" => return Err(usage()),
            _ if arg.starts_with("--") => return Err(usage()),
            _ => {
                if input.is_none() {
                    input = Some(PathBuf::from(arg));
                } else {
                    return Err(usage());
                }
            }
        }
    }

    Ok(Args { input, validate })
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let raw = read_input(args.input.as_ref())?;
    let params: PatientParameters = serde_json::from_str(&raw)?;

    if args.validate {
        params.validate()?;
    }

    let assessment = Assessment {
        report: score(&params),
        model_source: FALLBACK_MODEL_NAME.to_string(),
        fallback: true,
    };

    println!("{}", serde_json::to_string_pretty(&assessment.to_response())?);
    Ok(())
}
