//! collapse-verify binary
//!
//! Runs the verification corpus — all of it, one part, or one chapter —
//! prints per-check verdicts with their interpretation, and exits non-zero
//! if anything missed its tolerance.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use collapse_chapters::{find, in_part, registry, Chapter, ChapterError, ChapterReport};

#[derive(Parser)]
#[command(name = "collapse-verify", version, about = "Verify collapse-framework constant derivations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run verification chapters (the default)
    Run(RunArgs),
    /// List registered chapters
    List,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Restrict to one part (1-4)
    #[arg(long, conflicts_with = "chapter")]
    part: Option<u8>,

    /// Run a single chapter, e.g. 2.3
    #[arg(long, value_name = "PART.NUMBER")]
    chapter: Option<String>,

    /// Write the reports as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Only print failures and the summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Chapter(#[from] ChapterError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collapse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::List) => {
            list_chapters();
            Ok(true)
        }
        Some(Command::Run(args)) => run(args),
        None => run(RunArgs::default()),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn list_chapters() {
    for chapter in registry() {
        println!("{:>5}  {}", chapter.id.to_string(), chapter.title);
    }
}

fn select(args: &RunArgs) -> Result<Vec<&'static Chapter>, CliError> {
    if let Some(spec) = &args.chapter {
        let id = spec.parse()?;
        return Ok(vec![find(id)?]);
    }
    if let Some(part) = args.part {
        return Ok(in_part(part)?);
    }
    Ok(registry().iter().collect())
}

fn run(args: RunArgs) -> Result<bool, CliError> {
    let chapters = select(&args)?;
    tracing::info!(chapters = chapters.len(), "running verification corpus");
    let reports: Vec<ChapterReport> = chapters.iter().map(|c| c.run()).collect();

    for report in &reports {
        render(report, args.quiet);
    }
    render_summary(&reports);

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(path, json)?;
        println!("report written to {}", path.display());
    }

    Ok(reports.iter().all(ChapterReport::all_passed))
}

fn render(report: &ChapterReport, quiet: bool) {
    if !quiet {
        println!("=== CHAPTER {}: {} ===", report.id, report.title.to_uppercase());
    }

    for check in &report.checks {
        let verdict = if check.passed() { "PASS" } else { "FAIL" };
        if quiet && check.passed() {
            continue;
        }
        println!(
            "  [{}] {}: computed {:e}, expected {:e} ({:?})",
            verdict, check.name, check.computed, check.expected, check.tolerance
        );
        if !quiet {
            println!("         {}", check.commentary);
        }
    }

    if !quiet {
        println!(
            "  {}/{} checks passed",
            report.passed_count(),
            report.len()
        );
        println!();
    }
}

fn render_summary(reports: &[ChapterReport]) {
    let chapters_passed = reports.iter().filter(|r| r.all_passed()).count();
    let checks: usize = reports.iter().map(ChapterReport::len).sum();
    let checks_passed: usize = reports.iter().map(ChapterReport::passed_count).sum();

    println!("=== VERIFICATION SUMMARY ===");
    for report in reports {
        let status = if report.all_passed() { "PASS" } else { "FAIL" };
        println!("  {:>5}  {}  {}", report.id.to_string(), status, report.title);
    }
    println!(
        "OVERALL RESULT: {} ({}/{} chapters, {}/{} checks)",
        if chapters_passed == reports.len() {
            "ALL TESTS PASS"
        } else {
            "SOME TESTS FAILED"
        },
        chapters_passed,
        reports.len(),
        checks_passed,
        checks
    );
}
