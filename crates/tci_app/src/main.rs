//! Transcript Coding Importer - command-line front end
//!
//! Imports a WebVTT transcript and materializes its annotation tracks
//! into a JSON track document. All business logic lives in `tci_core`;
//! this binary only wires configuration, logging, file selection, and
//! the concrete store together.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use tci_core::config::ConfigManager;
use tci_core::import::{ImportOptions, ImportSummary, Importer, InputSelector};
use tci_core::logging::{init_tracing, LogLevel};
use tci_core::models::TrackSchema;
use tci_core::store::{AnnotationStore, JsonStore, MemoryStore};

/// Command-line arguments for tci
#[derive(Parser, Debug)]
#[command(name = "tci")]
#[command(about = "Import WebVTT transcripts as time-aligned annotation tracks")]
#[command(version)]
struct Args {
    /// Transcript file to import (.vtt)
    input: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, default_value = ".config/tci.toml", env = "TCI_CONFIG")]
    config: PathBuf,

    /// Override the configured output folder
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the full pipeline without writing anything to disk
    #[arg(long)]
    dry_run: bool,

    /// Debug logging plus full error chains on failure
    #[arg(short, long, env = "TCI_VERBOSE")]
    verbose: bool,
}

/// Selector that hands the pipeline the positional argument.
struct ArgSelector {
    input: Option<PathBuf>,
}

impl InputSelector for ArgSelector {
    fn pick(&self) -> Option<PathBuf> {
        self.input.clone()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if args.verbose {
                eprintln!("Error: {e:?}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = ConfigManager::new(&args.config);
    config
        .load_or_create()
        .with_context(|| format!("loading config from '{}'", args.config.display()))?;

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::from_settings_str(&config.settings().logging.level)
    };
    init_tracing(level, config.settings().logging.show_timestamps);
    debug!(config = %args.config.display(), "Configuration loaded");

    if let Some(output) = &args.output {
        config.settings_mut().paths.output_folder = output.display().to_string();
    }

    // File selection is the only cancellation point: declining to pick
    // aborts the run with a message, not an error.
    let selector = ArgSelector {
        input: args.input.clone(),
    };
    let Some(input) = selector.pick() else {
        println!("No input file selected; nothing imported.");
        let supported: Vec<String> = tci_core::transcript::descriptors()
            .iter()
            .filter(|d| d.importable)
            .map(|d| format!("{} (.{})", d.label, d.extension))
            .collect();
        println!("Supported formats: {}", supported.join(", "));
        return Ok(());
    };

    let options = config.settings().import.to_options();
    let schema = TrackSchema::split_transcript();

    let summary;
    let mut document_path = None;
    if args.dry_run {
        let mut store = MemoryStore::new();
        summary = import_into(&mut store, &input, options, schema)?;
    } else {
        config
            .ensure_directories()
            .context("creating output directory")?;
        let mut store = JsonStore::new(&config.settings().paths.output_folder, &input);
        document_path = Some(store.output_path().to_path_buf());
        summary = import_into(&mut store, &input, options, schema)?;
    }

    report(&summary, document_path.as_deref(), args.dry_run);

    config.settings_mut().paths.last_input_path = input.display().to_string();
    if let Err(e) = config.save() {
        warn!("Failed to remember last input path: {e}");
    }

    Ok(())
}

fn import_into(
    store: &mut dyn AnnotationStore,
    input: &std::path::Path,
    options: ImportOptions,
    schema: TrackSchema,
) -> Result<ImportSummary> {
    let mut importer = Importer::new(options, schema, store);
    let summary = importer
        .import_path(input)
        .with_context(|| format!("importing '{}'", input.display()))?;
    Ok(summary)
}

fn report(summary: &ImportSummary, document_path: Option<&std::path::Path>, dry_run: bool) {
    println!(
        "Imported {} cues from '{}' ({})",
        summary.cue_count,
        summary.input_path.display(),
        summary.format_label
    );
    println!(
        "  batches: {} (chunk size {})",
        summary.batch_count, summary.chunk_size
    );
    println!("  tracks:  {}", summary.tracks_created.join(", "));
    match document_path {
        Some(path) => println!("  document: {}", path.display()),
        None if dry_run => println!("  dry run - nothing written"),
        None => {}
    }
    println!("  elapsed: {} ms", summary.elapsed_ms);
}
