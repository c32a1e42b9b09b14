//! Integration tests for lsq


use std::fs::File;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use harness::{TestDir, run_lsq, sorted_lines};
use predicates::prelude::*;

/// `a` (mode 644), hidden `.b`, empty subdirectory `c`.
fn sample_tree() -> TestDir {
    let dir = TestDir::new();
    dir.add_file("a", "alpha");
    dir.set_mode("a", 0o644);
    dir.add_file(".b", "hidden");
    dir.add_dir("c");
    dir
}

fn lsq_cmd() -> Command {
    Command::cargo_bin("lsq").expect("binary should build")
}

#[test]
fn test_default_listing_hides_dot_files() {
    let dir = sample_tree();
    let (stdout, stderr, success) = run_lsq(dir.path(), &[]);
    assert!(success, "lsq should succeed");
    assert!(stderr.is_empty(), "unexpected stderr: {}", stderr);
    assert_eq!(sorted_lines(&stdout), vec!["a", "c"]);
}

#[test]
fn test_explicit_path_argument() {
    let dir = sample_tree();
    let parent = dir.path().parent().unwrap();
    let name = dir.path().file_name().unwrap().to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_lsq(parent, &[&name]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec!["a", "c"]);
}

#[test]
fn test_all_flag_shows_dot_entries() {
    let dir = sample_tree();
    let (stdout, _stderr, success) = run_lsq(dir.path(), &["-a"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec![".", "..", ".b", "a", "c"]);
}

#[test]
fn test_almost_all_flag() {
    let dir = sample_tree();
    let (stdout, _stderr, success) = run_lsq(dir.path(), &["--almost-all"]);
    assert!(success);
    assert_eq!(sorted_lines(&stdout), vec![".b", "a", "c"]);
}

#[test]
fn test_last_hidden_flag_wins() {
    let dir = sample_tree();

    let (stdout, _, _) = run_lsq(dir.path(), &["-a", "-A"]);
    assert_eq!(sorted_lines(&stdout), vec![".b", "a", "c"]);

    let (stdout, _, _) = run_lsq(dir.path(), &["-A", "-a"]);
    assert_eq!(sorted_lines(&stdout), vec![".", "..", ".b", "a", "c"]);
}

#[test]
fn test_repeated_flags_are_accepted() {
    let dir = sample_tree();
    let (stdout, stderr, success) = run_lsq(dir.path(), &["-l", "-l", "-RR", "-a", "-a"]);
    assert!(success, "stderr: {}", stderr);
    assert!(stderr.is_empty());
    assert_eq!(stdout.lines().filter(|l| l.ends_with(" a")).count(), 1);
    assert!(stdout.contains("
./c:
"), "got {:?}", stdout);
}

#[test]
fn test_long_format_with_all() {
    let dir = sample_tree();
    let (stdout, _stderr, success) = run_lsq(dir.path(), &["-a", "-l"]);
    assert!(success);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "output: {}", stdout);
    for line in &lines {
        let mode = &line[..10];
        assert!(
            mode.chars().skip(1).all(|c| "rwxsStT-".contains(c)),
            "bad mode string in {:?}",
            line
        );
        assert_eq!(&line[10..11], " ");
    }

    let a = lines.iter().find(|l| l.ends_with(" a")).unwrap();
    assert!(a.starts_with("-rw-r--r--   1 "), "got {:?}", a);
    // size column is 9 wide, followed by a space and the timestamp
    assert!(a.contains("         5 "), "got {:?}", a);

    let c = lines.iter().find(|l| l.ends_with(" c")).unwrap();
    assert!(c.starts_with('d'));
    assert!(lines.iter().any(|l| l.ends_with(" .")));
    assert!(lines.iter().any(|l| l.ends_with(" ..")));
}

#[test]
fn test_long_format_timestamp_styles() {
    let dir = TestDir::new();
    let old = dir.add_file("old", "");
    let recent = dir.add_file("recent", "");

    // 2015-11-24 12:34:00 UTC
    let long_ago = UNIX_EPOCH + Duration::from_secs(1_448_368_440);
    File::options()
        .write(true)
        .open(&old)
        .unwrap()
        .set_modified(long_ago)
        .unwrap();
    File::options()
        .write(true)
        .open(&recent)
        .unwrap()
        .set_modified(SystemTime::now())
        .unwrap();

    let (stdout, _stderr, success) = run_lsq(dir.path(), &["-l"]);
    assert!(success);
    let old_line = stdout.lines().find(|l| l.ends_with(" old")).unwrap();
    assert!(old_line.contains(" 11/24  2015 old"), "got {:?}", old_line);

    let recent_line = stdout.lines().find(|l| l.ends_with(" recent")).unwrap();
    let stamp = &recent_line[recent_line.len() - " recent".len() - 11..recent_line.len() - " recent".len()];
    assert_eq!(&stamp[2..3], "/");
    assert_eq!(&stamp[8..9], ":", "expected clock time in {:?}", recent_line);
}

#[test]
fn test_classify_suffixes() {
    let dir = TestDir::new();
    dir.add_file("run.sh", "#!/bin/sh\n");
    dir.set_mode("run.sh", 0o755);
    dir.add_file("notes", "");
    dir.set_mode("notes", 0o644);
    dir.add_dir("src");
    dir.add_symlink("notes", "link");

    let (stdout, _stderr, success) = run_lsq(dir.path(), &["-F"]);
    assert!(success);
    assert_eq!(
        sorted_lines(&stdout),
        vec!["link@", "notes", "run.sh*", "src/"]
    );
}

#[test]
fn test_symlink_arrow_in_long_format() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "x");
    dir.add_symlink("target.txt", "good");
    dir.add_symlink("nowhere", "dangling");

    let (stdout, stderr, success) = run_lsq(dir.path(), &["-l"]);
    assert!(success);
    assert!(stderr.is_empty(), "broken links are not errors: {}", stderr);
    assert!(stdout.contains(" good -> target.txt\n"));
    assert!(stdout.contains(" dangling -> nowhere\n"));

    let (stdout, _, _) = run_lsq(dir.path(), &[]);
    assert!(!stdout.contains("->"));
}

#[test]
fn test_recursive_headers() {
    let dir = TestDir::new();
    dir.add_file("top", "");
    dir.add_file("c/mid", "");
    dir.add_file("c/d/deep", "");

    let (stdout, _stderr, success) = run_lsq(dir.path(), &["-R"]);
    assert!(success);

    // root listing comes first and has no header
    assert!(!stdout.starts_with('\n'));
    let c_header = stdout.find("\n./c:\n").expect("missing ./c header");
    let d_header = stdout.find("\n./c/d:\n").expect("missing ./c/d header");
    assert!(c_header < d_header);
    assert!(stdout[..c_header].lines().any(|l| l == "top"));
    assert!(stdout[d_header..].ends_with("\n./c/d:\ndeep\n"));
    assert_eq!(stdout.matches(":\n").count(), 2);
}

#[test]
fn test_recursive_does_not_follow_symlinked_dirs() {
    let dir = TestDir::new();
    dir.add_file("real/file", "");
    dir.add_symlink("real", "alias");

    let (stdout, _stderr, success) = run_lsq(dir.path(), &["-R"]);
    assert!(success);
    assert!(stdout.contains("\n./real:\n"));
    assert!(!stdout.contains("./alias:"));
}

#[test]
fn test_color_ignored_when_not_a_terminal() {
    let dir = sample_tree();
    lsq_cmd()
        .arg("-C")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_unknown_flag_fails_without_listing() {
    let dir = sample_tree();
    lsq_cmd()
        .arg("-z")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_directory_reports_but_succeeds() {
    let dir = TestDir::new();
    lsq_cmd()
        .arg("does-not-exist")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("lsq: does-not-exist: "));
}

#[test]
fn test_help_lists_flags() {
    lsq_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--almost-all")
                .and(predicate::str::contains("--long-format"))
                .and(predicate::str::contains("--recursive")),
        );
}
