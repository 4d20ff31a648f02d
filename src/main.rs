use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use tailwind_colors::output;
use tailwind_colors::styling::{eprintln, error_message, hint_message};
use tailwind_colors::{Options, OptionsError, Palette, SrgbConverter, export};

mod cli;

use cli::Cli;

fn main() {
    // Help, version and usage errors exit here (0 for help/version, 2 otherwise)
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        print_error(&err);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = Options::resolve(cli.into_raw_options())?;
    log::debug!("Resolved options: {options:?}");

    let palette = match &options.palette {
        Some(path) => Palette::load(path)?,
        None => Palette::tailwind().context("Built-in palette is corrupt")?,
    };

    let mut status = output::handler(options.silent);
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    export::run(
        &options,
        &palette,
        &SrgbConverter,
        &mut stdout,
        status.as_mut(),
    )
}

/// Errors are printed regardless of `--silent`.
fn print_error(err: &anyhow::Error) {
    if let Some(invalid) = err.downcast_ref::<OptionsError>() {
        eprintln!("{}", error_message(invalid.to_string()));
        eprintln!("{}", hint_message(invalid.accepted_line()));
        if let Some(suggestion) = invalid.suggestion() {
            eprintln!("{}", hint_message(format!("Did you mean '{suggestion}'?")));
        }
        return;
    }

    eprintln!("{}", error_message(format!("{err:#}")));
}
