use std::{env, process};

use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use subcommander::dispatch;
use subcommander::exitcode;

fn main() {
    setup_logging();

    let mut argv = env::args();
    let argv0 = match argv.next() {
        Some(argv0) => argv0,
        None => {
            eprintln!("{}", "cannot determine invoked program name".red());
            process::exit(exitcode::OSERR);
        }
    };
    let args: Vec<String> = argv.collect();

    // run() only ever comes back with an error; on success the process
    // image has been replaced.
    match dispatch::run(&argv0, args) {
        Ok(never) => match never {},
        Err(e) => {
            eprintln!("{}", textwrap::fill(&e.to_string(), 78).red());
            process::exit(e.exit_code());
        }
    }
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter),
        )
        .init();
}
