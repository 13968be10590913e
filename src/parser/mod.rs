//! Binary command stream parsing
//!
//! Converts the wire format into `Command` values. One byte of opcode
//! selects the operation; argument bytes follow immediately. All argument
//! validation that does not need screen state happens here.

pub mod command;
pub mod decoder;

pub use command::Command;
pub use decoder::Decoder;

use crate::error::StreamError;

/// Decode a whole stream up to `End` or stream exhaustion.
pub fn decode(stream: &[u8]) -> Result<Vec<Command>, StreamError> {
    let mut decoder = Decoder::new(stream);
    let mut commands = Vec::new();
    while let Some(command) = decoder.next_command()? {
        let end = matches!(command, Command::End);
        commands.push(command);
        if end {
            break;
        }
    }
    Ok(commands)
}
