//! Compare command
//!
//! Usage: colcmp-cli compare <FILE> <FILE>... [--name <NAME>]... [--format text|json]

use crate::config::{FileConfig, LogProfile, OutputFormat, Overrides, Settings};
use crate::header::read_header;
use clap::Args;
use colcmp_core::compare::{compare, render_report, ColumnComparison, CompareOptions};
use colcmp_core::errors::{ExError, ExErrorKind};
use colcmp_core::logging_facility;
use colcmp_core::Table;
use colcmp_core_types::RunId;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Delimited files whose header rows are compared
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Display name for each file, in order (repeat once per file)
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Use file stems as names when --name is not given
    #[arg(long)]
    pub names_from_files: bool,

    /// Field delimiter (single ASCII character, `\t` for tab)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress the text report
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (default: ./colcmp.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log profile for stderr diagnostics
    #[arg(long = "log", value_enum)]
    pub log_profile: Option<LogProfile>,
}

impl CompareArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            delimiter: self.delimiter.clone(),
            format: self.format,
            quiet: self.quiet,
            names_from_files: self.names_from_files,
            log_profile: self.log_profile,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(file_config, &args.overrides())?;

    if let Some(profile) = settings.log_profile.profile() {
        logging_facility::init(profile);
    }

    let run_id = RunId::new();
    let _span = tracing::info_span!("colcmp_run", run_id = %run_id).entered();

    run(&args, &settings).map_err(|e| e.with_run_id(run_id).into())
}

fn run(args: &CompareArgs, settings: &Settings) -> Result<(), ExError> {
    let tables = args
        .files
        .iter()
        .map(|path| read_header(path, settings.delimiter))
        .collect::<Result<Vec<Table>, ExError>>()?;

    let names = effective_names(args, settings);

    // Let the core print the report only when nothing else goes to stdout.
    let core_prints = settings.format == OutputFormat::Text
        && !settings.quiet
        && args.output.is_none();

    let options = CompareOptions {
        names,
        emit_report: core_prints,
    };
    let result = compare(&tables, &options)?;

    if core_prints {
        return Ok(());
    }

    match render(&result, settings)? {
        Some(rendered) => emit(&rendered, args.output.as_deref()),
        None => Ok(()),
    }
}

fn effective_names(args: &CompareArgs, settings: &Settings) -> Option<Vec<String>> {
    if !args.names.is_empty() {
        return Some(args.names.clone());
    }
    if settings.names_from_files {
        return Some(args.files.iter().map(|p| file_label(p)).collect());
    }
    None
}

fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render(result: &ColumnComparison, settings: &Settings) -> Result<Option<String>, ExError> {
    match settings.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            Ok(Some(json))
        }
        OutputFormat::Text if settings.quiet => Ok(None),
        OutputFormat::Text => Ok(Some(render_report(result))),
    }
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<(), ExError> {
    let stdout = std::io::stdout();
    emit_to(rendered, output, &mut stdout.lock())
}

fn emit_to<W: Write>(rendered: &str, output: Option<&Path>, out: &mut W) -> Result<(), ExError> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("write_output")
                    .with_path(path.display().to_string())
                    .with_message(e.to_string())
            })?;
            writeln!(out, "✓ Written to {}", path.display()).map_err(stdout_error)?;
        }
        None => out.write_all(rendered.as_bytes()).map_err(stdout_error)?,
    }
    out.flush().map_err(stdout_error)
}

fn stdout_error(e: io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op("write_output")
        .with_message(format!("failed writing to stdout: {}", e))
}
