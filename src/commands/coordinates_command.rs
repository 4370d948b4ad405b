//! Coordinate resolution command
//!
//! Resolves an `X,Y` pair into pixel, decimal and DMS form.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::split_list;
use crate::coordinate::CoordinateResolver;
use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;

/// Command for resolving a coordinate pair
pub struct CoordinatesCommand<'a> {
    /// Raw X (longitude) input
    raw_x: String,
    /// Raw Y (latitude) input
    raw_y: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CoordinatesCommand<'a> {
    /// Create a new coordinates command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let value = args.get_one::<String>("coordinates")
            .ok_or_else(|| MapError::GenericError("Missing coordinate pair".to_string()))?;

        let parts = split_list(value, 2, "Coordinate pair")?;

        Ok(CoordinatesCommand {
            raw_x: parts[0].to_string(),
            raw_y: parts[1].to_string(),
            logger,
        })
    }
}

impl<'a> Command for CoordinatesCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        info!("Resolving coordinates x='{}', y='{}'", self.raw_x, self.raw_y);

        let coordinates = CoordinateResolver::default().resolve(&self.raw_x, &self.raw_y);
        if !coordinates.is_complete() {
            self.logger.log(&format!("Partially resolved ({}, {})", self.raw_x, self.raw_y))?;
        }

        print!("{}", coordinates);
        self.logger.log(&coordinates.to_string())?;
        Ok(())
    }
}
