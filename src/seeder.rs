//! Adversarial fixtures seeded alongside the roster images.
//!
//! Two extra images land in `Extracted/` that no roster row points at:
//! one whose name equals a future rename target (so the app's rename step
//! finds the target already taken) and one whose name a portable-filename
//! validator must reject.

use std::path::Path;

use crate::error::Result;
use crate::render::canvas::{IMAGE_HEIGHT, IMAGE_WIDTH};
use crate::render::Renderer;
use crate::roster::ShotRecord;

/// Seeded filename with characters illegal on common filesystems.
pub const INVALID_FIXTURE_NAME: &str = "IMG:INVALID<>NAME.JPG";

/// The name the workflow app's rename step computes for a shot:
/// `<group>_<first> <last>_<pose>.JPG`.
pub fn expected_rename_target(record: &ShotRecord) -> String {
    format!(
        "{}_{} {}_{}.JPG",
        record.team, record.first_name, record.last_name, record.pose_index
    )
}

/// Render both edge-case images into the extracted directory.
///
/// The conflict image takes the rename target of `first_shot` (by contract
/// the roster's first record), so the original camera file and its future
/// rename target coexist before any rename runs. Returns the conflict
/// filename for the instructions file and summary.
pub fn seed_edge_cases(
    renderer: &Renderer,
    extracted: &Path,
    first_shot: &ShotRecord,
) -> Result<String> {
    let conflict_name = expected_rename_target(first_shot);
    renderer.render(
        &extracted.join(&conflict_name),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        &first_shot.team,
        Some(&format!("{} (Existing)", first_shot.full_name())),
    )?;

    renderer.render(
        &extracted.join(INVALID_FIXTURE_NAME),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        "Invalid",
        Some("Filename"),
    )?;

    Ok(conflict_name)
}
