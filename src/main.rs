//! `sha256sum` binary
//!
//! Prints the SHA-256 digest of a file.
//!
//! Usage:
//!   sha256sum <path>

use std::env;
use std::fs;
use std::process::ExitCode;

use cryptal_sha256::hash::sha256;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let message = match fs::read(&args[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", sha256(&message));

    ExitCode::SUCCESS
}

fn print_usage() {
    eprintln!("Usage: sha256sum <path>");
}
