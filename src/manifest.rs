//! Roster table serialization.
//!
//! The workflow app only reads columns 0, 1, 2 and 7 of the CSV (original
//! filename, first name, last name, group). Those positions are a fixed
//! contract and must never shift; the remaining columns exist because real
//! exports always carry at least 8.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::roster::ShotRecord;

/// Header row, kept for human readability; the app addresses columns by
/// index, not by name.
pub const CSV_HEADER: [&str; 8] = [
    "original", "first", "last", "col4", "col5", "col6", "team", "group",
];

/// Leading rows appended again at the end to bulk up rename-target volume.
pub const DUPLICATED_ROWS: usize = 5;

/// Write the roster table to `path`, truncating any previous file.
///
/// One row per shot in roster order, then the first [`DUPLICATED_ROWS`]
/// rows repeated verbatim. Returns the number of data rows written.
pub fn write_manifest(path: &Path, records: &[ShotRecord]) -> Result<usize> {
    let mut rows: Vec<[String; 8]> = records.iter().map(csv_row).collect();
    let duplicated: Vec<[String; 8]> = rows.iter().take(DUPLICATED_ROWS).cloned().collect();
    rows.extend(duplicated);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", CSV_HEADER.join(","))?;
    for row in &rows {
        writeln!(writer, "{}", row.join(","))?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Column layout: [0]=original, [1]=first, [2]=last, [3..=5]=unused,
/// [6]=team (ignored by the renamer), [7]=group (the rename prefix).
fn csv_row(record: &ShotRecord) -> [String; 8] {
    [
        record.original_filename.clone(),
        record.first_name.clone(),
        record.last_name.clone(),
        String::new(),
        String::new(),
        String::new(),
        record.team.clone(),
        record.team.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::roster::build_roster;

    fn write_sample(dir: &Path) -> (Vec<ShotRecord>, Vec<String>) {
        let mut rng = ChaCha8Rng::seed_from_u64(207);
        let records = build_roster(&mut rng);
        let path = dir.join("roster.csv");
        write_manifest(&path, &records).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        (records, lines)
    }

    #[test]
    fn header_and_row_count_match_the_contract() {
        let dir = tempfile::tempdir().unwrap();
        let (records, lines) = write_sample(dir.path());

        assert_eq!(lines[0], "original,first,last,col4,col5,col6,team,group");
        assert_eq!(lines.len(), 1 + records.len() + DUPLICATED_ROWS);
    }

    #[test]
    fn contract_columns_hold_filename_names_and_group() {
        let dir = tempfile::tempdir().unwrap();
        let (records, lines) = write_sample(dir.path());

        for (record, line) in records.iter().zip(lines.iter().skip(1)) {
            let cols: Vec<&str> = line.split(',').collect();
            assert_eq!(cols.len(), 8);
            assert_eq!(cols[0], record.original_filename);
            assert_eq!(cols[1], record.first_name);
            assert_eq!(cols[2], record.last_name);
            assert_eq!(cols[7], record.team);
        }
    }

    #[test]
    fn duplicated_tail_is_an_exact_copy_of_the_first_rows() {
        let dir = tempfile::tempdir().unwrap();
        let (records, lines) = write_sample(dir.path());

        let data = &lines[1..];
        let head = &data[..DUPLICATED_ROWS];
        let tail = &data[records.len()..];
        assert_eq!(head, tail);
    }

    #[test]
    fn rewrites_from_scratch_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");

        let mut rng = ChaCha8Rng::seed_from_u64(207);
        let records = build_roster(&mut rng);
        write_manifest(&path, &records).unwrap();
        let full = std::fs::read_to_string(&path).unwrap();

        write_manifest(&path, &records[..3]).unwrap();
        let short = std::fs::read_to_string(&path).unwrap();

        assert!(short.len() < full.len());
        // Only 3 records, so only 3 rows are available to duplicate
        assert_eq!(short.lines().count(), 1 + 3 + DUPLICATED_ROWS.min(3));
    }
}
