//! dev-env - Shell environment generation for `dev.yml`

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = dev_env::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
