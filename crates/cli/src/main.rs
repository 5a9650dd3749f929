mod cmd;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use cmd::{GenerateArgs, cmd_generate};
use demogen_lib::registry::Registry;

/// Build the results reporter demo pages.
#[derive(Parser, Debug)]
#[command(name = "demogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,

  #[command(flatten)]
  generate: GenerateArgs,
}

fn main() -> Result<ExitCode> {
  let choices = Registry::builtin().sorted_names().join(", ");
  let matches = Cli::command()
    .mut_arg("reports", |arg| {
      arg.help(format!(
        "The name of one or more reports to generate. Defaults to generating all reports. \
         Built-in reports: {}. With --registry, the names come from that file instead.",
        choices
      ))
    })
    .get_matches();
  let cli = match Cli::from_arg_matches(&matches) {
    Ok(cli) => cli,
    Err(e) => e.exit(),
  };

  init_logging(cli.verbose);

  cmd_generate(&cli.generate)
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}
