//! fitpdf - Fit translated text back into original page geometry
//!
//! Reads a style-aware extraction layer (JSON) and, optionally, a
//! translation mapping, runs the fit pass, and writes the per-region fit
//! results for the document writer plus the full render log for
//! operators.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use boxfit_core::api::{FitOptions, apply_translations, fit_document};
use boxfit_core::error::{FitError, Result};
use boxfit_core::layout::FitParams;
use boxfit_core::model::{DocumentInput, TranslationMap};
use boxfit_core::report::{FitResult, FitStatus, RenderLog, validate_coverage};
use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Fit translated text into the original layout of an extracted document.
#[derive(Parser, Debug)]
#[command(name = "fitpdf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the extraction layer JSON (pages with region geometry)
    input: PathBuf,

    /// Path to the translation mapping JSON (region id to translated text).
    /// Without it the input's own content is fitted as-is.
    #[arg(short = 't', long)]
    translations: Option<PathBuf>,

    /// Output file for the fit results ("-" for stdout)
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Write the full render log (entries, reasons, summary) to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// The number of worker threads (0 = all available cores)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Process regions sequentially instead of fanning out
    #[arg(long = "no-parallel", action = ArgAction::SetTrue)]
    no_parallel: bool,

    // === Fit parameters ===
    /// Minimum font size the fit search may reach
    #[arg(long = "min-size", default_value = "3.0")]
    min_size: f64,

    /// Line-edge spread tolerance for alignment inference (layout units)
    #[arg(long = "alignment-tolerance", default_value = "5.0")]
    alignment_tolerance: f64,

    /// First-line indent detection threshold (layout units)
    #[arg(long = "indent-threshold", default_value = "15.0")]
    indent_threshold: f64,

    /// Body boxes narrower than this use the small-text starting size
    #[arg(long = "narrow-width", default_value = "130.0")]
    narrow_width: f64,

    /// Boxes shorter than this use the small-text starting size and
    /// compressed leading
    #[arg(long = "short-height", default_value = "20.0")]
    short_height: f64,

    /// Starting-size cap for tight-space boxes
    #[arg(long = "tight-cap", default_value = "7.0")]
    tight_cap: f64,

    /// Start from the extracted style-hint sizes instead of type defaults
    #[arg(long = "honor-style-hints", action = ArgAction::SetTrue)]
    honor_style_hints: bool,
}

fn build_params(args: &Args) -> FitParams {
    FitParams {
        min_size: args.min_size,
        alignment_tolerance: args.alignment_tolerance,
        indent_threshold: args.indent_threshold,
        narrow_width: args.narrow_width,
        short_height: args.short_height,
        tight_cap: args.tight_cap,
        honor_style_hints: args.honor_style_hints,
        ..FitParams::default()
    }
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| FitError::Serialization(e.to_string()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn page_summary(doc: &DocumentInput, log: &RenderLog) {
    for page in &doc.pages {
        let mut fit = 0;
        let mut forced = 0;
        let mut skipped = 0;
        for region in &page.regions {
            match log.get(&region.id).map(|e| e.result.status) {
                Some(FitStatus::Fit) => fit += 1,
                Some(FitStatus::Forced) => forced += 1,
                Some(FitStatus::Skipped) | None => skipped += 1,
            }
        }
        eprintln!(
            "Page {}: {} regions ({} fit, {} forced, {} skipped)",
            page.page_index + 1,
            page.regions.len(),
            fit,
            forced,
            skipped
        );
    }
}

fn run(args: &Args) -> Result<()> {
    let input = std::fs::read_to_string(&args.input)?;
    let mut doc: DocumentInput = serde_json::from_str(&input)
        .map_err(|e| FitError::InvalidInput(format!("malformed extraction layer: {e}")))?;

    if let Some(path) = &args.translations {
        let data = std::fs::read_to_string(path)?;
        let translations: TranslationMap = serde_json::from_str(&data)
            .map_err(|e| FitError::InvalidInput(format!("malformed translation mapping: {e}")))?;
        apply_translations(&mut doc, &translations);
    }

    let options = FitOptions {
        params: build_params(args),
        threads: (args.threads > 0).then_some(args.threads),
        parallel: !args.no_parallel,
    };

    let log = fit_document(&doc, &options)?;

    // Fit results for the document writer, in document order.
    let results: Vec<&FitResult> = log.results().collect();
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        Box::new(BufWriter::new(File::create(&args.outfile)?))
    };
    write_json(&mut output, &results)?;

    // Full render log for operators.
    if let Some(path) = &args.log_file {
        let mut writer = BufWriter::new(File::create(path)?);
        write_json(&mut writer, &log)?;
    }

    page_summary(&doc, &log);
    let report = validate_coverage(&doc.region_ids(), &log);
    eprintln!(
        "{} regions: {} fit, {} forced, {} skipped ({:.1}% coverage)",
        report.total_regions,
        report.fit,
        report.forced,
        report.skipped,
        report.coverage_percent()
    );

    Ok(())
}

fn main() {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error processing {}: {}", args.input.display(), e);
        std::process::exit(1);
    }
}
