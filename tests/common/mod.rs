#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use msa_windows::{Alignment, SeqRecord};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

/// Compare `actual` with `tests/snapshots/<name>`.
///
/// Line endings and trailing whitespace are ignored, so snapshots survive
/// editors that add or strip a final newline. With
/// `MSA_WINDOWS_UPDATE_SNAPSHOTS` set the snapshot is rewritten instead.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var_os("MSA_WINDOWS_UPDATE_SNAPSHOTS").is_some() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("snapshot {} unreadable: {err}", path.display()));
    let expected = normalize(&expected);
    let actual = normalize(actual);
    if expected == actual {
        return;
    }

    let line = expected
        .lines()
        .zip(actual.lines())
        .position(|(want, got)| want != got)
        .unwrap_or_else(|| expected.lines().count().min(actual.lines().count()));
    panic!(
        "snapshot {} differs at line {} (set MSA_WINDOWS_UPDATE_SNAPSHOTS=1 to regenerate)\n\
         expected: {:?}\n  actual: {:?}",
        path.display(),
        line + 1,
        expected.lines().nth(line),
        actual.lines().nth(line),
    );
}

fn normalize(input: &str) -> String {
    input
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Path to a file under `tests/data`.
pub fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Build an alignment from `(id, residues)` pairs.
pub fn alignment(rows: &[(&str, &str)]) -> Alignment {
    Alignment::new(
        rows.iter()
            .map(|(id, seq)| SeqRecord::new(*id, *seq))
            .collect(),
    )
    .expect("rows share one length")
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output directory")
        .map(|entry| {
            entry
                .expect("directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
