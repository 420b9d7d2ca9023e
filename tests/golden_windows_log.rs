mod common;

use common::{assert_snapshot, data_file};
use msa_windows::pipeline::WINDOWS_LOG;
use msa_windows::{split_file, SplitConfig};

#[test]
fn windows_log_matches_golden() {
    let dir = tempfile::tempdir().unwrap();
    let config = SplitConfig {
        write_window_log: true,
        ..SplitConfig::regular(10, 10)
    };
    let report = split_file(data_file("primates.fasta"), None, dir.path(), config)
        .expect("split succeeds");
    assert_eq!(report.windows_written(), 4);

    let written = std::fs::read_to_string(dir.path().join(WINDOWS_LOG)).unwrap();
    assert!(written.ends_with('\n'));
    assert_snapshot("windows/primates_w10_s10.log", &written);

    let mut rendered = Vec::new();
    report.log.write_windows(&mut rendered).unwrap();
    assert_eq!(String::from_utf8(rendered).unwrap(), written);
}
