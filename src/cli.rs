use crate::rules::HighlightRules;
use crate::{AUTHOR, VERSION};

use clap::{App, Arg, ArgMatches};
use failure::Error;

/// Create the base set of clap options common to all cli commands
pub fn base_opts<'a, 'b>() -> App<'a, 'b> {
    App::new("livenav")
        .version(VERSION)
        .author(AUTHOR)
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .help("Path to a rules file"),
        )
}

/// Load the rules named by `--config`, or the stock rules if there wasn't one. Unlike most config
/// files, not having one is perfectly normal.
pub fn load_rules(matches: &ArgMatches<'_>) -> Result<HighlightRules, Error> {
    match matches.value_of("config") {
        Some(path) => {
            info!("Loading rules from {}", path);
            HighlightRules::from_file(path)
        }
        None => Ok(HighlightRules::default()),
    }
}

/// Setup logging for livenav. This sets the log level to INFO if unset and configures the logging
/// facade favoured by livenav's clis.
pub fn init_logging() {
    if ::std::env::var_os("RUST_LOG").is_none() {
        ::std::env::set_var("RUST_LOG", "INFO");
    }
    pretty_env_logger::init();
}

/// Run a given closure with logging configured, and deal with any errors. This allows you to have
/// a fairly simple main, eg:
///
/// ```
/// use livenav::cli::run;
///
/// fn main() {
///     run(|| {
///         // Do stuff here, including using the ? operator with reckless abandon.
///         // ...
///         // You must however return Ok(())
///         Ok(())
///     });
/// }
/// ```
pub fn run(main: fn() -> Result<(), Error>) {
    init_logging();
    if let Err(e) = main() {
        error!("Error running livenav");
        error!("{:?}", e);
        if ::std::env::var("RUST_BACKTRACE").is_ok() {
            error!("{:?}", e.backtrace());
        }
        ::std::process::exit(1);
    }
}
