// ir-names binary smoke tests.

use anyhow::{Context, Result};
use ircatalog::{BUILD_CONFIG_SCHEMA_VERSION, PROTOCOL_ROSTER};
use serde_json::{Value, json};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn ir_names() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ir-names"))
}

#[test]
fn lookup_prints_the_sentinel_for_ordinal_zero() -> Result<()> {
    let output = ir_names().args(["lookup", "0"]).output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?.trim(), "UNUSED");
    Ok(())
}

#[test]
fn dump_honours_the_build_config() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        json!({
            "schema_version": BUILD_CONFIG_SCHEMA_VERSION,
            "decode": ["NEC"]
        })
        .to_string()
        .as_bytes(),
    )?;

    let output = ir_names()
        .arg("--config")
        .arg(file.path())
        .arg("dump")
        .output()?;
    assert!(output.status.success());

    let records: Vec<Value> = serde_json::from_slice(&output.stdout).context("parsing dump")?;
    assert_eq!(records.len(), PROTOCOL_ROSTER.len());
    let nec = records
        .iter()
        .find(|r| r["tag"] == "NEC")
        .context("NEC record")?;
    assert_eq!(nec["name"], "NEC");
    assert_eq!(nec["compiled_in"], true);
    let sony = records
        .iter()
        .find(|r| r["tag"] == "SONY")
        .context("SONY record")?;
    assert_eq!(sony["name"], "?");
    assert_eq!(sony["compiled_in"], false);
    Ok(())
}

#[test]
fn packed_emits_a_double_nul_terminated_blob() -> Result<()> {
    let output = ir_names().arg("packed").output()?;
    assert!(output.status.success());
    assert!(output.stdout.starts_with(b"UNUSED\0"));
    assert_eq!(&output.stdout[output.stdout.len() - 2..], &[0, 0]);
    Ok(())
}

#[test]
fn bad_config_path_fails_with_context() -> Result<()> {
    let output = ir_names()
        .args(["--config", "/nonexistent/config.json", "lookup", "1"])
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("reading build config"), "stderr: {stderr}");
    Ok(())
}
