use clap::{App, Arg};
use log::{info, LevelFilter};
use std::default;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub print_board: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub ticks: u32,
    pub flip: Vec<String>,
}

impl CliConfig {
    pub fn new() -> Self {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS");

        let args = App::new("Pigwolf")
            .version(version)
            .author(authors)
            .arg(
                Arg::with_name("PRINT_BOARD")
                    .short("b")
                    .help("If specified, the board is printed after every rebuild"),
            )
            .arg(
                Arg::with_name("VERBOSE")
                    .short("v")
                    .help("If specified, debug output is logged"),
            )
            .arg(
                Arg::with_name("QUIET")
                    .short("q")
                    .conflicts_with("VERBOSE")
                    .help("If specified, only warnings and errors are logged"),
            )
            .arg(
                Arg::with_name("TICKS")
                    .short("t")
                    .takes_value(true)
                    .validator(|v| v.parse::<u32>().map(|_| ()).map_err(|e| e.to_string()))
                    .help("Number of ticks to simulate (default 1)"),
            )
            .arg(
                Arg::with_name("FLIP")
                    .short("f")
                    .takes_value(true)
                    .multiple(true)
                    .number_of_values(1)
                    .help("Name of a pig whose house is flipped once per tick"),
            )
            .get_matches_from(args);

        let ticks = args
            .value_of("TICKS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(1);
        let flip = args
            .values_of("FLIP")
            .map(|names| names.map(String::from).collect())
            .unwrap_or_default();

        Self {
            print_board: args.is_present("PRINT_BOARD"),
            verbose: args.is_present("VERBOSE"),
            quiet: args.is_present("QUIET"),
            ticks,
            flip,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &CliConfig::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| PRINT_BOARD: {}", self.print_board);
        info!("| VERBOSE: {}", self.verbose);
        info!("| QUIET: {}", self.quiet);
        info!("| TICKS: {}", self.ticks);
        info!("| FLIP: {:?}", self.flip);
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            print_board: false,
            verbose: false,
            quiet: false,
            ticks: 1,
            flip: Vec::new(),
        }
    }
}
