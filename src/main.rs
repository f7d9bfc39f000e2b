use std::process::ExitCode;

mod cli_bin;

use cli_bin::{args::ParsedArgs, commands};

fn main() -> ExitCode {
    env_logger::init();

    let args = ParsedArgs::try_parse().unwrap_or_else(|e| e.exit());

    match commands::execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[!] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
