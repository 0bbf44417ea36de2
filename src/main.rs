//! simple-http: send one GET, POST or PUT and print the response body.

use std::path::Path;
use std::process::ExitCode;

use simple_http::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::Outcome;

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let outcome = match &cli.command {
        Some(Command::Init { output }) => write_template(output),
        _ => send(&cli),
    };

    outcome.into()
}

fn write_template(output: &Path) -> Outcome {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return Outcome::BadConfig;
    }
    println!("Configuration template written to: {}", output.display());
    Outcome::Done
}

/// Resolves the configuration, performs the request on a single-threaded
/// runtime and prints whatever the run produced.
#[cfg(not(tarpaulin_include))]
fn send(cli: &Cli) -> Outcome {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if let Some(hint) = app::config_hint(&e) {
                eprintln!("\n{hint}");
            }
            return Outcome::BadConfig;
        }
    };

    app::init_logging(config.verbose);
    tracing::debug!("{config}");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return Outcome::Failed;
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(output) => {
            println!("{output}");
            Outcome::Done
        }
        Err(e) => {
            tracing::error!("{e}");
            Outcome::Failed
        }
    }
}
