//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod coordinates_command;
pub mod parse_command;
pub mod fragment_command;

pub use command_traits::{Command, CommandFactory};
pub use coordinates_command::CoordinatesCommand;
pub use parse_command::ParseCommand;
pub use fragment_command::FragmentCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::{MapError, MapResult};

/// Factory for creating command instances based on CLI arguments
pub struct SopotCommandFactory;

impl SopotCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SopotCommandFactory
    }
}

impl Default for SopotCommandFactory {
    fn default() -> Self {
        SopotCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for SopotCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MapResult<Box<dyn Command + 'a>> {
        if args.contains_id("fragment") {
            Ok(Box::new(FragmentCommand::new(args, logger)?))
        } else if args.contains_id("coordinates") {
            Ok(Box::new(CoordinatesCommand::new(args, logger)?))
        } else if args.contains_id("parse") {
            Ok(Box::new(ParseCommand::new(args, logger)?))
        } else {
            Err(MapError::GenericError(
                "Nothing to do. Use --coordinates, --parse or --fragment".to_string()))
        }
    }
}

/// Split a comma-separated argument into exactly `expected` trimmed parts
pub(crate) fn split_list<'s>(value: &'s str, expected: usize, what: &str) -> MapResult<Vec<&'s str>> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(MapError::GenericError(format!(
            "{} must have {} comma-separated values, got '{}'", what, expected, value)));
    }
    Ok(parts)
}
