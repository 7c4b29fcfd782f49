use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "agent_grid";

#[test]
fn walled_off_agent_reports_stuck() -> Result<(), Box<dyn std::error::Error>> {
    // Agent 1 can never reach A. Agent 2 only gets to B by stepping aside,
    // which does not count as progress.
    let mut f = NamedTempFile::new()?;
    writeln!(f, "A#12")?;
    writeln!(f, " #B ")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([f.path().to_str().unwrap(), "0", "--quiet", "--no-color"]);

    cmd.assert()
        .success()
        .stderr(contains("Some agents got stuck :("))
        .stdout(contains("ticks=1"))
        .stdout(contains("finished=1"));

    Ok(())
}

#[test]
fn head_on_corridor_runs_until_tick_limit() -> Result<(), Box<dyn std::error::Error>> {
    // 1 and 2 face each other in a one-wide corridor with their goals behind
    // the other agent. Every tick they step back by rotation and forward
    // again directly, so the run never deadlocks on its own.
    let mut f = NamedTempFile::new()?;
    writeln!(f, "#######")?;
    writeln!(f, "B 1 2 A")?;
    writeln!(f, "#######")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        f.path().to_str().unwrap(),
        "0",
        "--quiet",
        "--no-color",
        "--max-ticks",
        "50",
    ]);

    cmd.assert()
        .success()
        .stderr(contains("Tick limit reached after 50 ticks"))
        .stdout(contains("finished=0"));

    Ok(())
}
