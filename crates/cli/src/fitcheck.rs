//! fitcheck - Validate render coverage against the extraction layer
//!
//! Cross-checks a render log produced by fitpdf against the extraction
//! input it was fed, reports coverage, and exits nonzero when the pass
//! falls below the gate threshold - suitable for automated pass/fail
//! gating in a pipeline.

use std::path::PathBuf;

use boxfit_core::error::{FitError, Result};
use boxfit_core::model::DocumentInput;
use boxfit_core::report::{DEFAULT_COVERAGE_THRESHOLD, RenderLog, validate_coverage};
use clap::{ArgAction, Parser};

/// Validate that every extracted region was placed by the fit pass.
#[derive(Parser, Debug)]
#[command(name = "fitcheck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the extraction layer JSON the pass was run on
    input: PathBuf,

    /// Path to the render log JSON written by fitpdf
    log: PathBuf,

    /// Minimum coverage percentage required to pass
    #[arg(short = 'T', long, default_value_t = DEFAULT_COVERAGE_THRESHOLD)]
    threshold: f64,

    /// Emit the coverage report as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn run(args: &Args) -> Result<bool> {
    let input = std::fs::read_to_string(&args.input)?;
    let doc: DocumentInput = serde_json::from_str(&input)
        .map_err(|e| FitError::InvalidInput(format!("malformed extraction layer: {e}")))?;

    let log_data = std::fs::read_to_string(&args.log)?;
    let log: RenderLog = serde_json::from_str(&log_data)
        .map_err(|e| FitError::InvalidInput(format!("malformed render log: {e}")))?;

    let report = validate_coverage(&doc.region_ids(), &log);
    let passed = report.passes(args.threshold);

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| FitError::Serialization(e.to_string()))?;
        println!("{rendered}");
        return Ok(passed);
    }

    println!("Rendering validation report");
    println!("===========================");
    println!("total regions extracted:  {}", report.total_regions);
    println!("fit:                      {}", report.fit);
    println!("forced:                   {}", report.forced);
    println!("skipped:                  {}", report.skipped);
    println!("missing (not attempted):  {}", report.missing.len());
    println!("coverage:                 {:.1}%", report.coverage_percent());

    if !report.forced_ids.is_empty() {
        println!();
        println!("forced regions:");
        for id in &report.forced_ids {
            let reason = log
                .get(id)
                .and_then(|e| e.reason.as_deref())
                .unwrap_or("no reason recorded");
            println!("  {id}: {reason}");
        }
    }

    if !report.missing.is_empty() {
        println!();
        println!("missing regions (never attempted):");
        for id in &report.missing {
            println!("  {id}");
        }
    }

    println!();
    if passed {
        println!("PASS: coverage >= {:.1}%", args.threshold);
    } else {
        println!("FAIL: coverage < {:.1}% or regions missing", args.threshold);
    }

    Ok(passed)
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
