//! Command line inspector for the pastel token sets.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tokens::{DocumentStore, TokenError, TokenStore};

#[derive(Debug, Parser)]
#[command(name = "inspector", about = "Inspect and validate the pastel token sets", version, long_about = None)]
struct InspectorCli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the registered theme modes in order.
    Modes,
    /// Check structural parity across all modes.
    Validate,
    /// Print token documents as JSON, one mode or all combined.
    Export {
        /// Mode slug, e.g. `light`; prints every mode keyed by slug when
        /// omitted.
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,
        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
    /// Write every mode's document under the given directory.
    Save {
        /// Target directory; one `<mode>.json` file per mode.
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Load documents from the given directory and validate them.
    Check {
        /// Directory holding one `<mode>.json` file per mode.
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = InspectorCli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("inspector: {error}");
            if let TokenError::StructuralMismatch { violations } = &error {
                for violation in violations {
                    eprintln!("  {violation}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: InspectorCli) -> Result<(), TokenError> {
    match cli.command {
        Command::Modes => {
            let store = TokenStore::new().verified()?;
            for mode in store.modes() {
                println!("{mode}");
            }
            Ok(())
        }
        Command::Validate => {
            let report = TokenStore::new().validate();
            tracing::debug!(violations = report.violations().len(), "parity check finished");
            report.into_result()?;
            println!("token sets are structurally aligned");
            Ok(())
        }
        Command::Export { mode, compact } => {
            let store = TokenStore::new().verified()?;
            let document = match mode {
                Some(name) => store.to_document(store.mode_from_str(&name)?)?,
                None => {
                    let mut combined = serde_json::Map::new();
                    for mode in store.modes() {
                        combined.insert(mode.as_str().to_owned(), store.to_document(mode)?);
                    }
                    Value::Object(combined)
                }
            };
            let rendered = if compact {
                serde_json::to_string(&document)?
            } else {
                serde_json::to_string_pretty(&document)?
            };
            println!("{rendered}");
            Ok(())
        }
        Command::Save { dir } => {
            let store = TokenStore::new().verified()?;
            let documents = DocumentStore::new(dir);
            documents.save(&store)?;
            tracing::info!(dir = %documents.dir().display(), "token documents written");
            Ok(())
        }
        Command::Check { dir } => {
            let store = DocumentStore::new(dir).load()?;
            println!(
                "loaded {} mode(s), structurally aligned",
                store.modes().count()
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        InspectorCli::command().debug_assert();
    }
}
