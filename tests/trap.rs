use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "alien_invasion";

#[test]
fn trapped_alien_surfaces_fatal_no_move_error() -> Result<(), Box<dyn std::error::Error>> {
    // The lone alien seeds at foo, walks into the dead end, and then no
    // legal move exists anywhere in the map.
    let mut f = NamedTempFile::new()?;
    writeln!(f, "foo north=deadend")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "--aliens",
        "1",
        "--map",
        f.path().to_str().unwrap(),
        "--seed",
        "7",
        "--suppress-events",
    ]);

    cmd.assert().failure().stderr(contains("NoLegalMove"));

    Ok(())
}

#[test]
fn lone_alien_run_ends_at_move_threshold() -> Result<(), Box<dyn std::error::Error>> {
    // A single alien bouncing between two cities can never fight, so the
    // run must end once it exhausts its move budget.
    let mut f = NamedTempFile::new()?;
    writeln!(f, "foo north=bar\nbar south=foo")?;

    let out_dir = tempfile::tempdir()?;
    let out_path = out_dir.path().join("survivors.txt");

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "--aliens",
        "1",
        "--map",
        f.path().to_str().unwrap(),
        "--out",
        out_path.to_str().unwrap(),
        "--seed",
        "99",
        "--min-moves",
        "50",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("destroyed_aliens=0"))
        .stdout(contains("survivors=2"));

    let survivors = std::fs::read_to_string(&out_path)?;
    assert_eq!(survivors.lines().count(), 2);
    assert!(survivors.contains("{city: "));

    Ok(())
}
