use std::{error::Error, process::Command};

use assert_cmd::prelude::*;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;

#[test]
fn generates_records() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.child("test_ancestry_data.txt");

    Command::cargo_bin("gen-test-data")?
        .arg("-o")
        .arg(output.path())
        .args(["-n", "100", "--seed", "7", "--quiet-progress"])
        .assert()
        .success();

    output.assert(predicate::str::starts_with("#AncestryDNA raw data export\n"));
    output.assert(predicate::str::contains("#RSID\tCHROMOSOME\tPOSITION\tGENOTYPE\n"));
    let contents = std::fs::read_to_string(output.path())?;
    assert_eq!(contents.lines().count(), 103);
    assert!(contents
        .lines()
        .skip(3)
        .all(|line| line.starts_with("rs") && line.split('\t').count() == 4));
    Ok(())
}

#[test]
fn seeded_runs_match() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let mut bodies = Vec::new();
    for name in ["a.txt", "b.txt"] {
        let output = temp_dir.child(name);
        Command::cargo_bin("gen-test-data")?
            .arg("-o")
            .arg(output.path())
            .args(["-n", "50", "--seed", "2456", "--quiet-progress"])
            .assert()
            .success();
        let contents = std::fs::read_to_string(output.path())?;
        bodies.push(contents.lines().skip(3).collect::<Vec<_>>().join("\n"));
    }
    assert_eq!(bodies[0], bodies[1]);
    Ok(())
}
