// src/bin/copydetect.rs
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};

use copydetect_core::cli::{self, ArgumentsBuilder};
use copydetect_core::config;
use copydetect_core::exit::CopyDetectExit;

fn main() -> CopyDetectExit {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            CopyDetectExit::for_error(&e)
        }
    }
}

fn run() -> Result<CopyDetectExit> {
    let defaults = config::load_config_file(Path::new("."))?;
    let args = ArgumentsBuilder::new()
        .with_config_file(defaults)
        .build(std::env::args_os())?;

    init_logging(args.verbose);

    if args.help {
        print!("{}", cli::help_text());
        return Ok(CopyDetectExit::Success);
    }
    if args.version {
        println!("{}", cli::version_text());
        return Ok(CopyDetectExit::Success);
    }

    cli::handle_scan(&args)
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "copydetect=debug,copydetect_core=debug"
    } else {
        "copydetect=info,copydetect_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
