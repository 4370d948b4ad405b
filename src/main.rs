use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use sopotmap::utils::logger::Logger;
use sopotmap::commands::{CommandFactory, SopotCommandFactory};

fn main() {
    let matches = ClapCommand::new("sopotmap")
        .version("0.1")
        .about("Map pixels to geographic coordinates and cut fragments from the Sopot map")
        .arg(
            Arg::new("input")
                .help("Map raster (PNG); required for --fragment")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("coordinates")
                .long("coordinates")
                .help("Resolve an 'x,y' pair given as pixels, decimal degrees or DMS")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .conflicts_with_all(["parse", "fragment"])
                .required(false),
        )
        .arg(
            Arg::new("parse")
                .long("parse")
                .help("Parse a single value such as '500px', '54.45' or '54°27'26.5\" N'")
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .conflicts_with("fragment")
                .required(false),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .help("Cut the rectangle between two corners as base64 PNG")
                .value_name("X1,Y1,X2,Y2")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the fragment's base64 text to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    let logger = match Logger::new("sopotmap.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("sopotmap-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = SopotCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
