mod input;
mod output;
mod roster;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "roster2csv", about = "Convert a TU course-roster PDF or text extract into a flat CSV")]
struct Cli {
    /// Log level when RUST_LOG is unset (e.g. debug, info, warn)
    #[arg(long, default_value = "warn", global = true)]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a roster and write one CSV row per enrolled student
    Convert {
        /// Input roster (PDF, or text already extracted with pdftotext)
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Per-course enrollment summary (for eyeballing suspicious rosters)
    Overview {
        /// Input roster (PDF or text)
        #[arg(short, long)]
        input: PathBuf,
        /// Only show courses with fewer than this many students
        #[arg(short, long)]
        under: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log)),
        )
        .init();

    match cli.command {
        Commands::Convert { input, output } => {
            let records = load_records(&input)?;
            let students: usize = records.iter().map(|r| r.students.len()).sum();
            let rows = roster::table::build_rows(&records);
            output::write_csv_file(&rows, &output)?;
            println!(
                "Parsed {} courses, {} students; wrote {} rows to {}",
                records.len(),
                students,
                rows.len(),
                output.display()
            );
            Ok(())
        }
        Commands::Overview { input, under } => {
            let records = load_records(&input)?;
            let shown: Vec<_> = records
                .iter()
                .enumerate()
                .filter(|(_, r)| under.map_or(true, |max| r.students.len() < max))
                .collect();
            if shown.is_empty() {
                println!("No matching courses.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<10} | {:<4} | {:<24} | {:>8}",
                "#", "Course", "Sec", "Instructor", "Students"
            );
            println!("{}", "-".repeat(62));
            for (i, r) in &shown {
                println!(
                    "{:>3} | {:<10} | {:<4} | {:<24} | {:>8}",
                    i,
                    r.header.course.as_deref().unwrap_or("-"),
                    r.header.section.as_deref().unwrap_or("-"),
                    truncate(r.header.instructor.as_deref().unwrap_or("-"), 24),
                    r.students.len()
                );
            }
            println!("\n{} of {} courses shown", shown.len(), records.len());
            Ok(())
        }
    }
}

/// Convert the input to text if needed, then run the parsing pipeline.
fn load_records(input: &Path) -> Result<Vec<roster::CourseRecord>> {
    let is_pdf = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    let text_path = if is_pdf {
        input::convert_pdf_to_text(input)?
    } else {
        input.to_path_buf()
    };

    let pages = input::read_pages(&text_path)?;
    info!(pages = pages.len(), "roster read");
    Ok(roster::parse_document(pages))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
