//! Single coordinate parsing command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::CoordinateFormatParser;
use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;

/// Command for parsing one free-form coordinate value
pub struct ParseCommand<'a> {
    /// Value to parse
    raw: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ParseCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let raw = args.get_one::<String>("parse")
            .ok_or_else(|| MapError::GenericError("Missing value to parse".to_string()))?
            .clone();

        Ok(ParseCommand { raw, logger })
    }
}

impl<'a> Command for ParseCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let parsed = CoordinateFormatParser::parse(&self.raw)?;
        info!("Parsed '{}' as {}", self.raw, parsed);

        println!("{}", parsed);
        self.logger.log(&format!("{} -> {}", self.raw, parsed))?;
        Ok(())
    }
}
