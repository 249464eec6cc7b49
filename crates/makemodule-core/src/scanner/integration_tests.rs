//! Integration tests for the scanner module

use std::fs;
use tempfile::TempDir;

use super::{ScanMode, Scanner};

#[test]
fn test_full_scan_of_project_layout() {
    let tmp = TempDir::new().unwrap();

    // tests/unit with one shared file and two unit-test directories
    let unit = tmp.path().join("tests/unit");
    fs::create_dir_all(unit.join("App")).unwrap();
    fs::create_dir_all(unit.join("clex")).unwrap();
    fs::write(unit.join("gtest_main_run_all.cpp"), "main").unwrap();
    fs::write(unit.join("App").join("App_test.cpp"), "app").unwrap();
    fs::write(unit.join("clex").join("Clex_test.cpp"), "clex").unwrap();

    // include/casm with a nested header directory
    let include = tmp.path().join("include/casm");
    fs::create_dir_all(include.join("clex")).unwrap();
    fs::write(include.join("clex").join("Clex.hpp"), "hpp").unwrap();

    let scanner = Scanner::new(tmp.path());

    assert_eq!(
        scanner.files("tests/unit", ScanMode::Flat).unwrap(),
        vec!["tests/unit/gtest_main_run_all.cpp".to_string()]
    );
    assert_eq!(
        scanner.subdirectories("tests/unit").unwrap(),
        vec!["tests/unit/App".to_string(), "tests/unit/clex".to_string()]
    );
    assert_eq!(scanner.files("tests/unit", ScanMode::Recursive).unwrap().len(), 3);
    assert_eq!(
        scanner.directories("include/casm").unwrap(),
        vec!["include/casm".to_string(), "include/casm/clex".to_string()]
    );
}

#[test]
fn test_scan_missing_directories() {
    let tmp = TempDir::new().unwrap();
    let scanner = Scanner::new(tmp.path());

    assert!(scanner.files("src/casm", ScanMode::Recursive).unwrap().is_empty());
    assert!(scanner.files("tests/unit", ScanMode::Flat).unwrap().is_empty());
    assert!(scanner.subdirectories("tests/unit").unwrap().is_empty());
    assert!(scanner.directories("include/casm").unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_listed() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("include/casm");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("real.hpp"), "real").unwrap();
    std::os::unix::fs::symlink(dir.join("real.hpp"), dir.join("alias.hpp")).unwrap();

    let scanner = Scanner::new(tmp.path());
    let files = scanner.files("include/casm", ScanMode::Flat).unwrap();

    assert_eq!(
        files,
        vec![
            "include/casm/alias.hpp".to_string(),
            "include/casm/real.hpp".to_string(),
        ]
    );
}
