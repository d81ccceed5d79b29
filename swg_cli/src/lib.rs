use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::default;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub rounds: Option<u32>,
    pub batch: bool,
    pub seed: Option<u64>,
    pub verbose: bool,
}

fn validate_rounds(val: String) -> Result<(), String> {
    match val.parse::<u32>() {
        Ok(0) => Err(String::from("rounds must be at least 1")),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a round count", val)),
    }
}

fn validate_seed(val: String) -> Result<(), String> {
    val.parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a seed", val))
}

impl CliConfig {
    pub fn new() -> Self {
        Self::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS");

        let args = App::new("Snake, Water & Gun")
            .version(version)
            .author(authors)
            .arg(
                Arg::with_name("ROUNDS")
                    .short("r")
                    .long("rounds")
                    .takes_value(true)
                    .validator(validate_rounds)
                    .help("If specified, the game ends after this many rounds"),
            )
            .arg(Arg::with_name("BATCH").short("b").long("batch").help(
                "If specified, no prompt is shown and the first invalid option ends the game",
            ))
            .arg(
                Arg::with_name("SEED")
                    .short("s")
                    .long("seed")
                    .takes_value(true)
                    .validator(validate_seed)
                    .help("If specified, the computer's choices are drawn from this seed"),
            )
            .arg(
                Arg::with_name("VERBOSE")
                    .short("v")
                    .long("verbose")
                    .help("If specified, every round is logged"),
            )
            .get_matches_from_safe(args)?;

        Ok(Self::from_matches(&args))
    }

    fn from_matches(args: &ArgMatches) -> Self {
        let rounds = args.value_of("ROUNDS").and_then(|x| x.parse().ok());
        let seed = args.value_of("SEED").and_then(|x| x.parse().ok());

        Self {
            rounds,
            batch: args.is_present("BATCH"),
            seed,
            verbose: args.is_present("VERBOSE"),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
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
        info!("| ROUNDS: {:?}", self.rounds);
        info!("| BATCH: {}", self.batch);
        info!("| SEED: {:?}", self.seed);
        info!("| VERBOSE: {}", self.verbose);
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            rounds: None,
            batch: false,
            seed: None,
            verbose: false,
        }
    }
}
