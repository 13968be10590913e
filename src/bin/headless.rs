//! Headless driver
//!
//! Reads a binary command stream from stdin, decodes it against an
//! in-memory display, and prints a JSON snapshot of the resulting screen
//! to stdout. Useful for golden testing and for inspecting streams without
//! a terminal.

use std::io::{self, Read};
use std::process::ExitCode;

use glyphstream::core::Snapshot;
use glyphstream::render::HeadlessDisplay;
use glyphstream::Session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = Vec::new();
    io::stdin().read_to_end(&mut stream)?;

    let mut session = Session::new(HeadlessDisplay::new());
    session.run(&stream)?;

    let snapshot = Snapshot::capture(session.screen());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
