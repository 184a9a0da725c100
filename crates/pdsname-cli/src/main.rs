mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser as _;

use cli::{Cli, Command, KindArg, OutputFormat, PathOrStdin};

use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Routes core rejection reasons to stderr: `--verbose` shows every decision,
/// `--quiet` only errors. `RUST_LOG` overrides both.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.format.into(), cli.no_color, cli.quiet);

    match &cli.command {
        Command::Check { names, file, kind } => {
            let content = match file {
                Some(source) => io::read_input(source, cli.max_file_size)?,
                None => String::new(),
            };
            let mut all: Vec<&str> = names.iter().map(String::as_str).collect();
            all.extend(io::name_lines(&content));
            if all.is_empty() {
                return Err(CliError::InvalidArgument {
                    detail: "no names given".to_owned(),
                });
            }
            log::debug!("checking {} names", all.len());
            cmd::check::run(&all, *kind, &config)
        }
        Command::Explain { name, kind } => cmd::explain::run(name, *kind, &config),
        Command::Version => {
            println!("{}", pdsname_core::version());
            Ok(())
        }
    }
}
