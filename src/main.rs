// SPDX-License-Identifier: MPL-2.0
use masonry_gallery::app::{self, Flags, Startup};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: masonry_gallery [OPTIONS] [DIR]

Arguments:
  [DIR]               Serve images from this directory instead of a server

Options:
  --server URL        Resource server base URL
  --group-size N      Boxes realized per batch
  --page N            Page to open (1-based)
  --manifest FILE     File listing one image name per line
  --eager             Load every image right away
  -h, --help          Print help
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let startup = match Startup::prepare(flags) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(%err, "cannot open gallery");
            return ExitCode::FAILURE;
        }
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Flags {
        server: args.opt_value_from_str("--server")?,
        group_size: args.opt_value_from_str("--group-size")?,
        page: args.opt_value_from_str("--page")?,
        manifest: args.opt_value_from_str("--manifest")?,
        eager: args.contains("--eager"),
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    }))
}
