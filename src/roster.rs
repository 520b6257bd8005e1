//! Roster expansion: teams -> players -> posed shots.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::camera;

/// Fixed seed roster. Every player name is exactly "First Last"; the split
/// in [`build_roster`] relies on that.
pub const TEAMS: [(&str, [&str; 5]); 3] = [
    ("Tigers", ["John Doe", "Amy Smith", "Carlos Reyes", "Mia Chen", "Evan Patel"]),
    ("Hawks", ["Liam Johnson", "Noah Davis", "Olivia Lee", "Emma Brown", "Ava Wilson"]),
    ("Sharks", ["Mason Clark", "Lucas Martinez", "Sophia Taylor", "Isabella Moore", "Mia Anderson"]),
];

/// Per-player pose counts, drawn uniformly. Listing 2 twice makes it twice
/// as likely as 3 or 4, so short sessions dominate the fixture.
const POSE_COUNT_CHOICES: [u32; 4] = [2, 2, 3, 4];

/// One shot: a single pose of a single player, tied to the camera-style
/// file it will be rendered as.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    /// Team name, also the group column the renamer prefixes with
    pub team: String,
    pub first_name: String,
    pub last_name: String,
    /// 1-based pose index within this player's shots
    pub pose_index: u32,
    /// Camera-style filename, unique across the whole fixture
    pub original_filename: String,
}

impl ShotRecord {
    /// "First Last" as it appears in the seed roster
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Caption drawn under the team name on the placeholder image
    pub fn subtitle(&self) -> String {
        format!("{} - Pose {}", self.full_name(), self.pose_index)
    }
}

/// Expand the seed roster into shot records, in team-then-player-then-pose
/// order.
///
/// Draw order per player is fixed (one pose-count draw, then one pattern
/// draw per pose) and is part of the reproducibility contract: downstream
/// callers pick "the first record" when seeding the rename conflict, so the
/// ordering here must stay stable.
pub fn build_roster(rng: &mut ChaCha8Rng) -> Vec<ShotRecord> {
    let mut records = Vec::new();
    let mut counter: u32 = 1;

    for (team, players) in TEAMS {
        for player in players {
            let (first, last) = player
                .split_once(' ')
                .expect("seed roster names must be exactly 'First Last'");
            let pose_count = POSE_COUNT_CHOICES[rng.random_range(0..POSE_COUNT_CHOICES.len())];

            for pose_index in 1..=pose_count {
                let original_filename = camera::next_camera_name(rng, counter);
                counter += 1;

                records.push(ShotRecord {
                    team: team.to_string(),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    pose_index,
                    original_filename,
                });
            }
        }
    }

    records
}
