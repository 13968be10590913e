//! Glyphstream demo driver
//!
//! Plays a small built-in command stream and renders it to the console.

use std::process::ExitCode;

use log::{error, info};

use glyphstream::render::ConsoleDisplay;
use glyphstream::Session;

/// The demo stream: a 20x10 screen with a character, a line, and a caption.
fn demo_stream() -> Vec<u8> {
    let mut stream = vec![
        0x01, 20, 10, 0x01, // screen setup: 20x10, color mode 1
        0x02, 5, 5, 12, b'A', // 'A' at (5, 5), bright blue
        0x03, 2, 2, 10, 8, 14, b'*', // line (2,2)-(10,8), bright cyan stars
        0x04, 1, 1, 10, // text at (1, 1), bright green
    ];
    stream.extend_from_slice(b"Hello");
    stream.push(0xFF); // end of stream
    stream
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Playing demo stream");
    let mut session = Session::new(ConsoleDisplay::new());
    session.run(&demo_stream())?;
    session.render()?;
    session.display_mut().flush()?;
    Ok(())
}
