// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use viewing_room::app::{self, Flags};
use viewing_room::catalog;
use viewing_room::gallery::Layout;

const HELP: &str = "\
Viewing Room - walk through an artwork catalog

USAGE:
  viewing_room [OPTIONS]

OPTIONS:
  --lang <id>            Interface language (e.g. en-US, fr)
  --catalog <path>       Catalog file replacing the built-in one
  --layout <name>        bookends | plain
  --data-dir <path>      Directory for the session file
  --config-dir <path>    Directory for settings.toml
  -h, --help             Print this help
";

struct Args {
    lang: Option<String>,
    catalog: Option<PathBuf>,
    layout: Option<Layout>,
    data_dir: Option<String>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str("--catalog")?,
        layout: args.opt_value_from_str("--layout")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let (catalog, catalog_warning) = match catalog::load(args.catalog.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang: args.lang,
        catalog_warning,
        layout: args.layout,
        data_dir: args.data_dir,
        config_dir: args.config_dir,
    };

    match app::run(flags, catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
