//! Job assembly.
//!
//! Builds the full test-job folder in one fixed sequence: destructive reset,
//! directory skeleton, roster images, edge-case fixtures, roster CSV,
//! instructions file. Any failure aborts the run; re-running wipes whatever
//! a previous run left behind, so there are no merge semantics.

use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::manifest;
use crate::render::canvas::{IMAGE_HEIGHT, IMAGE_WIDTH};
use crate::render::Renderer;
use crate::roster::{self, TEAMS};
use crate::seeder;

/// Fixed RNG seed; the whole fixture is reproducible from this one value.
const FIXTURE_SEED: u64 = 207;

/// Name of the job folder created under the base path.
pub const JOB_NAME: &str = "2025_Youth_Baseball_League_TEST";

/// Subdirectories the workflow app expects inside a job folder. Only
/// `Extracted` receives content; the rest stay empty for the app to fill.
pub const JOB_SUBDIRS: [&str; 4] = ["Extracted", "Output", "Finished Teams", "For Upload"];

/// Roster CSV filename at the job root.
pub const MANIFEST_NAME: &str = "roster.csv";

/// Operator-facing instructions file at the job root.
pub const INSTRUCTIONS_NAME: &str = "TEST_INSTRUCTIONS.md";

/// What a finished run produced, for the operator summary.
#[derive(Debug, Clone)]
pub struct JobSummary {
    /// Where the job folder was created
    pub job_path: PathBuf,
    /// Roster images rendered (excludes the two seeded edge cases)
    pub shot_count: usize,
    /// Data rows in the roster CSV, duplicates included
    pub row_count: usize,
    /// Filename of the seeded rename-conflict image
    pub conflict_name: String,
}

/// Generate the complete sports-team test job under `base_path`.
pub fn create_sports_test_job(base_path: &Path) -> Result<JobSummary> {
    let job_path = base_path.join(JOB_NAME);

    // All-or-nothing replacement: a leftover fixture is wiped, never merged
    if job_path.exists() {
        fs::remove_dir_all(&job_path)?;
    }

    println!("Creating sports test job at: {}", job_path.display());

    for sub in JOB_SUBDIRS {
        fs::create_dir_all(job_path.join(sub))?;
    }
    let extracted = job_path.join("Extracted");

    let mut rng = ChaCha8Rng::seed_from_u64(FIXTURE_SEED);
    let renderer = Renderer::new();

    let records = roster::build_roster(&mut rng);
    for record in &records {
        renderer.render(
            &extracted.join(&record.original_filename),
            IMAGE_WIDTH,
            IMAGE_HEIGHT,
            &record.team,
            Some(&record.subtitle()),
        )?;
    }
    println!("🖼️ Rendered {} roster images", records.len());

    let first_shot = records.first().expect("seed roster is never empty");
    let conflict_name = seeder::seed_edge_cases(&renderer, &extracted, first_shot)?;

    let row_count = manifest::write_manifest(&job_path.join(MANIFEST_NAME), &records)?;

    write_instructions(&job_path.join(INSTRUCTIONS_NAME), &conflict_name)?;

    Ok(JobSummary {
        job_path,
        shot_count: records.len(),
        row_count,
        conflict_name,
    })
}

/// Write the human-readable instructions file: what the job contains and a
/// manual checklist for exercising the workflow app against it.
fn write_instructions(path: &Path, conflict_name: &str) -> Result<()> {
    let team_names: Vec<&str> = TEAMS.iter().map(|(team, _)| *team).collect();

    let text = format!(
        "# Sports Team Test Job\n\
         \n\
         This job matches the workflow app's expected structure and naming rules.\n\
         \n\
         ## Structure\n\
         - `Extracted/` (images here for renaming)\n\
         - `Output/` (empty)\n\
         - `Finished Teams/` (empty)\n\
         - `For Upload/` (empty)\n\
         - `{manifest}` in job root\n\
         \n\
         ## What's inside\n\
         - Teams: {teams}\n\
         - Players per team: 5\n\
         - Poses per player: 2-4 (varied to trigger pose count validation)\n\
         - Seeded conflict file in `Extracted/`: `{conflict}`\n\
         - Invalid filename in `Extracted/`: `{invalid}`\n\
         \n\
         ## How to test\n\
         1) Select this folder as the job folder in the app.\n\
         2) In Rename Files:\n\
            - Data Source: CSV (auto, since `{manifest}` exists)\n\
            - Source Folder: Extracted\n\
         3) Run Preflight Validation\n\
            - Should report write access ok\n\
            - CSV format valid\n\
            - Warnings for invalid filename\n\
         4) Analyze Files\n\
            - Thumbnails and previews should show every placeholder\n\
            - The conflict file should flag its rename target as taken\n\
         5) Execute Rename\n\
            - Try Dry Run + export report first\n\
            - Then enable Backup and run actual rename\n\
         6) Undo from history if desired\n\
         \n\
         Tip: To test Filename mode, temporarily rename `{manifest}` and Analyze\n\
         again. Files are camera-style, so filename mode will not rename unless\n\
         using existing TEAM_Player_Pose format.\n",
        manifest = MANIFEST_NAME,
        teams = team_names.join(", "),
        conflict = conflict_name,
        invalid = seeder::INVALID_FIXTURE_NAME,
    );

    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_name_the_seeded_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INSTRUCTIONS_NAME);

        write_instructions(&path, "Tigers_John Doe_1.JPG").unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.contains("Tigers_John Doe_1.JPG"));
        assert!(text.contains(seeder::INVALID_FIXTURE_NAME));
        assert!(text.contains(MANIFEST_NAME));
        for (team, _) in TEAMS {
            assert!(text.contains(team), "missing team {team}");
        }
    }
}
