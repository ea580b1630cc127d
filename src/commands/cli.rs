// src/commands/cli.rs
use std::io::{BufRead, Write};
use log::{debug, error};
use thiserror::Error;

use super::common::{Command, CommandExecutor};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid capacity")]
    InvalidCapacity,
    #[error("Invalid hours")]
    InvalidHours,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Decodes one input line. Blank lines yield `Ok(None)`.
pub fn parse_command_line(line: &str) -> Result<Option<Command>, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match *verb {
        "create_parking_lot" => {
            if args.len() != 1 {
                return Err(ParseError::Usage("create_parking_lot {capacity}"));
            }
            let capacity = args[0].parse().map_err(|_| ParseError::InvalidCapacity)?;
            Command::CreateParkingLot { capacity }
        },
        "park" => {
            if args.len() != 1 {
                return Err(ParseError::Usage("park {car_number}"));
            }
            Command::Park { registration_number: args[0].to_string() }
        },
        "leave" => {
            if args.len() != 2 {
                return Err(ParseError::Usage("leave {car_number} {hours}"));
            }
            let hours = args[1].parse().map_err(|_| ParseError::InvalidHours)?;
            Command::Leave { registration_number: args[0].to_string(), hours }
        },
        "status" => {
            if !args.is_empty() {
                return Err(ParseError::Usage("status"));
            }
            Command::Status
        },
        _ => return Err(ParseError::UnknownCommand(line.to_string())),
    };

    Ok(Some(command))
}

/// Runs one command and writes its outcome. Rejections are reported, not returned.
pub fn execute_command<E: CommandExecutor, W: Write>(
    executor: &mut E,
    command: Command,
    output: &mut W
) -> std::io::Result<()> {
    debug!("Executing {:?}", command);
    match executor.execute_command(command) {
        Ok(message) => writeln!(output, "{}", message),
        Err(e) => {
            debug!("Command rejected: {}", e);
            writeln!(output, "{}", e)
        }
    }
}

pub fn execute_line<E: CommandExecutor, W: Write>(
    executor: &mut E,
    line: &str,
    output: &mut W
) -> std::io::Result<()> {
    match parse_command_line(line) {
        Ok(Some(command)) => execute_command(executor, command, output),
        Ok(None) => Ok(()),
        Err(e) => writeln!(output, "{}", e),
    }
}

/// Feeds every line of `input` through the executor in order.
///
/// Lines are raw bytes; invalid UTF-8 is replaced rather than rejected.
/// A read failure is reported on `output` and ends the run; lines already
/// executed keep their effects.
pub fn run_lines<E: CommandExecutor, R: BufRead, W: Write>(
    executor: &mut E,
    mut input: R,
    output: &mut W
) -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(strip_line_ending(&buf));
                execute_line(executor, &line, output)?;
            },
            Err(e) => {
                error!("Failed to read command: {}", e);
                writeln!(output, "Error reading file: {}", e)?;
                break;
            }
        }
    }
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

pub fn run_commands<E: CommandExecutor, W: Write>(
    executor: &mut E,
    commands: Vec<Command>,
    output: &mut W
) -> Result<(), Box<dyn std::error::Error>> {
    for command in commands {
        execute_command(executor, command, output)?;
    }
    Ok(())
}
