use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use ops_gate::interfaces::csv::decision_writer::DecisionWriter;
use ops_gate::interfaces::health_check::OpsHealthCheck;
use ops_gate::interfaces::json::decision_writer::ReportWriter;
use ops_gate::interfaces::json::event_reader::EventReader;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// `{"decisions": [...]}` object
    Json,
    /// `event_id,decision,reason` table
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input events JSON file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Output format for the decision report
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log filter used when RUST_LOG is not set. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let source: Box<dyn Read> = match cli.input {
        Some(path) if path.as_os_str() != "-" => Box::new(File::open(path).into_diagnostic()?),
        _ => Box::new(io::stdin().lock()),
    };

    // Validate and run before touching stdout so a rejected batch prints nothing
    let raw_events = EventReader::new(source).raw_events().into_diagnostic()?;
    let report = OpsHealthCheck::default()
        .run(&raw_events)
        .into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Json => ReportWriter::new(stdout.lock())
            .pretty(cli.pretty)
            .write_report(&report)
            .into_diagnostic()?,
        OutputFormat::Csv => DecisionWriter::new(stdout.lock())
            .write_decisions(&report.decisions)
            .into_diagnostic()?,
    }

    Ok(())
}
