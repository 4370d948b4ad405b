//! Map fragment extraction command
//!
//! This module implements the command for cutting a rectangle out of the
//! map raster and emitting it as base64-encoded PNG.

use std::fs;
use clap::ArgMatches;
use log::info;

use crate::api::SopotMap;
use crate::commands::command_traits::Command;
use crate::commands::split_list;
use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;

/// Command for extracting a map fragment
pub struct FragmentCommand<'a> {
    /// Path to the map raster
    input_file: String,
    /// Corner points as (x1, y1, x2, y2)
    corners: (i32, i32, i32, i32),
    /// File receiving the base64 text; stdout if absent
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> FragmentCommand<'a> {
    /// Create a new fragment command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new FragmentCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| MapError::GenericError("Missing map raster path".to_string()))?
            .clone();
        info!("Map raster: {}", input_file);

        let value = args.get_one::<String>("fragment")
            .ok_or_else(|| MapError::GenericError("Missing fragment corners".to_string()))?;

        let mut corners = [0i32; 4];
        for (slot, part) in corners.iter_mut().zip(split_list(value, 4, "Fragment")?) {
            *slot = part.parse::<i32>().map_err(|e| MapError::bad_int(part, e))?;
        }
        let [x1, y1, x2, y2] = corners;

        let output_file = args.get_one::<String>("output").cloned();
        info!("Output file: {:?}", output_file);

        Ok(FragmentCommand {
            input_file,
            corners: (x1, y1, x2, y2),
            output_file,
            logger,
        })
    }
}

impl<'a> Command for FragmentCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let map = SopotMap::open(&self.input_file)?;
        let (x1, y1, x2, y2) = self.corners;
        let base64 = map.map_fragment(x1, y1, x2, y2)?;

        match &self.output_file {
            Some(path) => {
                fs::write(path, &base64)?;
                info!("Wrote {} base64 characters to {}", base64.len(), path);
            }
            None => println!("{}", base64),
        }

        self.logger.log(&format!("Fragment ({}, {}) - ({}, {}) extracted", x1, y1, x2, y2))?;
        Ok(())
    }
}
