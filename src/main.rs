use std::path::PathBuf;

use clap::Parser;

use job_fixture::error::{FixtureError, Result};
use job_fixture::job;

/// Create a deterministic sports-team test job for the photo rename
/// workflow.
#[derive(Debug, Parser)]
#[command(author, version, about = "Creates a sports-team test job folder")]
struct Args {
    /// Base directory the job folder is created under (default: Desktop)
    #[arg(short, long)]
    path: Option<PathBuf>,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();

    let base_path = match args.path {
        Some(path) => path,
        None => dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .ok_or(FixtureError::NoOutputDir)?,
    };
    if base_path.exists() && !base_path.is_dir() {
        return Err(FixtureError::NotADirectory(base_path));
    }

    let summary = job::create_sports_test_job(&base_path)?;

    println!(
        "\n✅ Sports test job created successfully!\n\n\
         📁 Location: {}\n\
         🖼️ Images: {} + conflict + invalid name\n\
         🧾 CSV: {} with {} rows\n\n\
         Open this folder as your job in the app and follow {}.",
        summary.job_path.display(),
        summary.shot_count,
        job::MANIFEST_NAME,
        summary.row_count,
        job::INSTRUCTIONS_NAME,
    );

    Ok(())
}
