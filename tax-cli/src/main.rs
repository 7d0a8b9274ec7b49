use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};

use tax_cli::state::{InputField, InputForm};
use tax_cli::{config, csv_loader, logging, report};
use tax_core::TaxCalculator;
use tax_store_toml::TomlFileStore;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Japanese personal income tax calculator (所得税).
///
/// Keeps the raw text of each input in a TOML store, so values set with
/// `set` are still there on the next `show`.
#[derive(Debug, Parser)]
#[command(name = "jp-tax", version)]
struct Cli {
    /// File holding the stored inputs.
    #[arg(long, global = true, default_value = "jp-tax-inputs.toml")]
    store: PathBuf,

    /// Calculator config (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,tax_core=trace`.
    /// Ignored when `RUST_LOG` is set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the breakdown for the stored inputs.
    Show,
    /// Store raw text for one field, then show the breakdown.
    Set {
        field: InputField,
        /// Raw text, e.g. `3,000,000`. Anything unparsable counts as 0.
        value: String,
    },
    /// Restore every field to its default.
    Reset,
    /// Print the progressive rate schedule.
    Rates,
    /// Calculate every row of a CSV file.
    Batch { file: PathBuf },
}

// ─── commands ────────────────────────────────────────────────────────────────

/// Opens the input store, starting from defaults when it cannot be read.
fn open_form(cli: &Cli) -> InputForm<TomlFileStore> {
    let store = match TomlFileStore::open(&cli.store) {
        Ok(store) => {
            debug!(path = %store.path().display(), "opened input store");
            store
        }
        Err(error) => {
            error!(path = %cli.store.display(), %error, "failed to read input store, using defaults");
            TomlFileStore::empty(&cli.store)
        }
    };
    InputForm::load(store)
}

fn print_inputs(form: &InputForm<TomlFileStore>) {
    println!("Inputs");
    for &field in InputField::all() {
        println!("  {:<44}{:>16}", field.label(), form.text(field));
    }
    println!();
}

fn show(
    form: &InputForm<TomlFileStore>,
    calculator: &TaxCalculator,
) {
    let breakdown = form.breakdown(calculator);
    print_inputs(form);
    print!(
        "{}",
        report::render_breakdown(&form.inputs(), &breakdown, calculator.config())
    );
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    let config = config::load_config(cli.config.as_deref())?;
    let calculator = TaxCalculator::new(config);

    match cli.command.as_ref().unwrap_or(&Command::Show) {
        Command::Show => {
            let form = open_form(&cli);
            show(&form, &calculator);
        }
        Command::Set { field, value } => {
            let mut form = open_form(&cli);
            if !form.set(*field, value) {
                warn!(field = ?field, "value not saved; it applies to this run only");
            }
            show(&form, &calculator);
        }
        Command::Reset => {
            let mut form = open_form(&cli);
            if !form.reset() {
                warn!("some defaults could not be saved");
            }
            info!(path = %cli.store.display(), "inputs reset to defaults");
            show(&form, &calculator);
        }
        Command::Rates => {
            print!("{}", report::render_rate_schedule());
        }
        Command::Batch { file } => {
            let scenarios = csv_loader::load_from_file(file)
                .with_context(|| format!("cannot load batch '{}'", file.display()))?;
            info!(count = scenarios.len(), "loaded batch scenarios");

            let results: Vec<_> = scenarios
                .into_iter()
                .map(|scenario| {
                    let breakdown = calculator.calculate(&scenario.inputs);
                    (scenario, breakdown)
                })
                .collect();
            print!("{}", report::render_batch(&results));
        }
    }

    Ok(())
}
