#![deny(unused_crate_dependencies)]


use std::{io, path::PathBuf};

use clap::Parser;
use log::LevelFilter;
use run::InterpreterError;

use crate::version::VERSION;

pub mod repl;
pub mod run;
pub mod version;

fn report_interpreter_error(err: &InterpreterError) {
    eprintln!("error: {}", err);
}

fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[derive(Parser)]
#[command(name = "gloom", disable_version_flag = true)]
struct Cli {
    /// The file to run. Starts a REPL if omitted.
    filename: Option<String>,

    /// A directory to search for imported modules. May be repeated.
    #[arg(short = 'I', long = "include", default_value = ".")]
    include: Vec<PathBuf>,

    /// How deeply bodies may nest before evaluation is abandoned.
    #[arg(long, default_value_t = gloom_eval::Config::default().max_depth)]
    max_depth: usize,

    /// Log more. Repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the current version.
    #[clap(long = "version")]
    version: bool,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

/// The entrypoint to the CLI.
///
/// It's defined in this library to avoid false positives associated with the
/// [`#![deny(unused_crate_dependencies)]` attribute](https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html#unused-crate-dependencies).
pub fn main() -> io::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(verbosity(cli.verbose))
        .parse_default_env()
        .init();

    if cli.version {
        println!("gloom {}", VERSION);
        return Ok(());
    }

    match cli.filename {
        Some(filename) => {
            let config = run::Config {
                filename,
                search_paths: cli.include,
                max_depth: cli.max_depth,
                stdout: None,
            };

            match run::run_interpreter(config) {
                Ok(()) => Ok(()),
                Err(err) => {
                    report_interpreter_error(&err);
                    std::process::exit(1)
                }
            }
        }
        None => repl::run(cli.include, cli.max_depth),
    }
}
