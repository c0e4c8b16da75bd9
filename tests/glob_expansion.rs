// tests/glob_expansion.rs

use std::fs;
use std::path::PathBuf;

use pollwatch::errors::PollwatchError;
use pollwatch::fs::mock::MockFileSystem;
use pollwatch::fs::RealFileSystem;
use pollwatch::watch::expand_pattern;

fn touch(path: &std::path::Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x").unwrap();
}

#[test]
fn star_matches_files_in_one_directory_only() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.txt"));
    touch(&dir.path().join("b.txt"));
    touch(&dir.path().join("c.md"));
    touch(&dir.path().join("sub/d.txt"));

    let pattern = format!("{}/*.txt", dir.path().display());
    let matches = expand_pattern(&RealFileSystem, &pattern).unwrap();

    assert_eq!(
        matches,
        vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
    );
}

#[test]
fn double_star_descends_into_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.txt"));
    touch(&dir.path().join("sub/d.txt"));
    touch(&dir.path().join("sub/deeper/e.txt"));
    touch(&dir.path().join("sub/deeper/f.rs"));

    let pattern = format!("{}/**/*.txt", dir.path().display());
    let matches = expand_pattern(&RealFileSystem, &pattern).unwrap();

    assert_eq!(
        matches,
        vec![
            dir.path().join("a.txt"),
            dir.path().join("sub/d.txt"),
            dir.path().join("sub/deeper/e.txt"),
        ]
    );
}

#[test]
fn literal_path_matches_itself() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("only.txt");
    touch(&file);

    let matches = expand_pattern(&RealFileSystem, &file.display().to_string()).unwrap();
    assert_eq!(matches, vec![file]);
}

#[test]
fn pattern_in_a_middle_component() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("one/x.cfg"));
    touch(&dir.path().join("two/x.cfg"));
    touch(&dir.path().join("two/y.cfg"));

    let pattern = format!("{}/*/x.cfg", dir.path().display());
    let matches = expand_pattern(&RealFileSystem, &pattern).unwrap();
    assert_eq!(
        matches,
        vec![dir.path().join("one/x.cfg"), dir.path().join("two/x.cfg")]
    );
}

#[test]
fn no_match_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.nothing", dir.path().display());

    match expand_pattern(&RealFileSystem, &pattern) {
        Err(PollwatchError::NoMatches(p)) => assert_eq!(p, pattern),
        other => panic!("expected NoMatches, got {:?}", other),
    }
}

#[test]
fn invalid_syntax_is_an_error() {
    match expand_pattern(&RealFileSystem, "src/[abc") {
        Err(PollwatchError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "src/[abc"),
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn relative_pattern_yields_relative_paths() {
    let fs = MockFileSystem::new();
    fs.add_file("a.txt", 1);
    fs.add_file("b.txt", 1);
    fs.add_file("notes/c.txt", 1);

    let matches = expand_pattern(&fs, "*.txt").unwrap();
    assert_eq!(matches, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);

    let nested = expand_pattern(&fs, "notes/*.txt").unwrap();
    assert_eq!(nested, vec![PathBuf::from("notes/c.txt")]);
}

#[cfg(unix)]
#[test]
fn recursive_glob_stops_at_symlink_cycles() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.txt"));
    std::os::unix::fs::symlink(".", dir.path().join("self")).unwrap();

    let pattern = format!("{}/**/*.txt", dir.path().display());
    let matches = expand_pattern(&RealFileSystem, &pattern).unwrap();

    assert_eq!(matches, vec![dir.path().join("a.txt")]);
}

#[cfg(unix)]
#[test]
fn symlinked_directory_outside_the_root_is_still_walked() {
    let outside = tempfile::tempdir().unwrap();
    touch(&outside.path().join("x.txt"));

    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();

    let pattern = format!("{}/**/*.txt", dir.path().display());
    let matches = expand_pattern(&RealFileSystem, &pattern).unwrap();

    assert_eq!(matches, vec![dir.path().join("linked/x.txt")]);
}
