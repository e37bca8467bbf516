use std::process::ExitCode;

use random_integration::core::{Result, Settings};
use random_integration::{run_case, TestCase};

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    for case in TestCase::builtin()? {
        let report = run_case(&case, &settings)?;
        println!("{report}\n");
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("random-integration: {e}");
            ExitCode::FAILURE
        }
    }
}
