//! roadstream-cli
//! ==============
//!
//! Command-line tools built on [`roadstream-core`]:
//!
//! ```text
//! extract_roads <input-path>                     # NDJSON road features on stdout
//! build_road_catalog <input-path> <output-path>  # sorted names/refs catalog
//! ```
//!
//! Inputs ending in `.xz` or `.gz` are decompressed while they are read.
//! Both tools take `--chunk-size <BYTES>` and `-v` flags; logs go to stderr.
//!
//! This library only holds the argument parsing and logging setup the two
//! binaries share.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use clap::Parser;
use log::LevelFilter;

/// Exit status for a wrong argument count or unknown flag.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Parses the command line, exiting with [`USAGE_EXIT_CODE`] and the usage
/// text on stderr when it is wrong. `--help` and `--version` still exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(err) => err.exit(),
    }
}

/// Routes `log` records to stderr. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
