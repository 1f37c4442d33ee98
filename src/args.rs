use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the extpack tool
#[derive(Debug)]
pub struct Args {
    /// Print skipped hidden files and the assembled file list
    pub verbose: bool,

    /// Directory to package (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Archive output path, overrides the configured archive name
    pub output: Option<PathBuf>,

    /// Explicit configuration file
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("extpack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package a browser extension into a zip archive for store submission")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("DIR")
                    .help("Directory containing the extension files"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("FILE")
                    .help("Archive file to create (relative to the extension directory)"),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Path to a packaging config file (defaults to extpack.toml if present)"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output"),
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            config: matches.get_one::<String>("config").map(PathBuf::from),
        }
    }
}
