use clap::{Parser, ValueEnum};
use safedoc::{
    EngineConfig, MonospaceMeasurer, PipelineError, ReportGenerator, SafetyReport,
};
use safedoc_render_core::JsonLinesSink;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Page count, per-page contents and warnings
    Summary,
    /// The full placement plan and generation report as JSON
    Plan,
    /// Recorded draw calls, one JSON object per line
    Commands,
}

/// Paginate a safety report and print the resulting plan.
#[derive(Debug, Parser)]
#[command(name = "safedoc", version, about)]
struct Cli {
    /// Safety report JSON file
    report: PathBuf,

    /// Engine configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    log::info!("Loading report from {}", cli.report.display());
    let report = SafetyReport::from_json(&fs::read_to_string(&cli.report)?)?;

    // No font files are loaded here; text is measured with the monospace estimate.
    let measurer = MonospaceMeasurer::new(config.monospace_advance);
    let generator = ReportGenerator::new(config)?;
    let outcome = generator.generate(&report, &measurer)?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Summary => write_summary(&mut out, &outcome)?,
        OutputFormat::Plan => {
            serde_json::to_writer_pretty(&mut out, &outcome)?;
            writeln!(out)?;
        }
        OutputFormat::Commands => {
            let mut sink = JsonLinesSink::new(&mut out, generator.config().base_font.clone());
            generator.render(&outcome, &mut sink)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_summary(out: &mut dyn Write, outcome: &safedoc::LayoutOutcome) -> io::Result<()> {
    let plan = &outcome.plan;
    writeln!(out, "{} page(s)", plan.page_count)?;
    for (index, page) in plan.pages().iter().enumerate() {
        let blocks = page.iter().filter(|p| p.block_id().is_some()).count();
        let used = page.last().map_or(0.0, |p| p.bottom()) - plan.geometry.content_top();
        writeln!(
            out,
            "  page {:>3}: {:>3} block(s), {:>6.1}pt of {:.1}pt used",
            index + 1,
            blocks,
            used,
            plan.geometry.content_height()
        )?;
    }
    if outcome.report.warnings.is_empty() {
        writeln!(out, "no warnings")?;
    } else {
        writeln!(out, "{} warning(s):", outcome.report.warnings.len())?;
        for warning in &outcome.report.warnings {
            writeln!(out, "  - {}", warning)?;
        }
    }
    Ok(())
}
