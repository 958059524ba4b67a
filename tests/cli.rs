use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn phonebook(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_phonebook")).args(args).output()?)
}

fn same_tokens(a: &str, b: &str) -> bool {
    a.split_whitespace().eq(b.split_whitespace())
}

#[test]
fn list_formats_in_registration_order() -> Result<()> {
    let out = phonebook(&["--list_formats"])?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout)?, "Registered formats:\nyaml\njson\n");
    Ok(())
}

#[test]
fn list_formats_ignores_format_flags() -> Result<()> {
    let out = phonebook(&["--yaml", "missingfile.yaml", "--list_formats"])?;
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)?.starts_with("Registered formats:"));
    Ok(())
}

#[test]
fn list_formats_as_json() -> Result<()> {
    let out = phonebook(&["--list_formats", "--output", "json"])?;
    let value: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["formats"][0]["name"], "yaml");
    assert_eq!(value["formats"][1]["name"], "json");
    Ok(())
}

#[test]
fn every_listed_format_round_trips() -> Result<()> {
    let listing = String::from_utf8(phonebook(&["--list_formats"])?.stdout)?;
    for format in listing.lines().skip(1) {
        let path = fixture(&format!("test_file.{format}"));
        let flag = format!("--{format}");
        let out = phonebook(&[&flag, path.to_str().unwrap()])?;
        assert!(out.status.success(), "{format}");
        let printed = String::from_utf8(out.stdout)?;
        assert!(same_tokens(&printed, &std::fs::read_to_string(&path)?), "{format}: {printed}");
    }
    Ok(())
}

#[test]
fn output_follows_registration_order_not_flag_order() -> Result<()> {
    let yaml = fixture("test_file.yaml");
    let json = fixture("test_file.json");
    let out = phonebook(&["--json", json.to_str().unwrap(), "--yaml", yaml.to_str().unwrap()])?;
    assert!(out.status.success());

    let expected = format!(
        "{}\n{}",
        std::fs::read_to_string(&yaml)?,
        std::fs::read_to_string(&json)?
    );
    let printed = String::from_utf8(out.stdout)?;
    assert!(same_tokens(&printed, &expected), "{printed}");
    assert!(printed.starts_with("- name: Alice"));
    Ok(())
}

#[test]
fn missing_file_fails_without_output() -> Result<()> {
    let out = phonebook(&["--yaml", "missingfile.yaml"])?;
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr)?.contains("missingfile.yaml"));
    Ok(())
}

#[test]
fn malformed_file_fails_without_output() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(file, "{{\"name\": ")?;
    let out = phonebook(&["--json", file.path().to_str().unwrap()])?;
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty());
    Ok(())
}

#[test]
fn invalid_utf8_is_malformed_not_io() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    file.write_all(b"- name: \xff\xfe\n")?;
    let out = phonebook(&["--yaml", file.path().to_str().unwrap()])?;
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty());
    Ok(())
}

#[test]
fn error_envelope_as_json() -> Result<()> {
    let out = phonebook(&["--output", "json", "--yaml", "missingfile.yaml"])?;
    let value: serde_json::Value = serde_json::from_slice(&out.stderr)?;
    assert_eq!(value["ok"], false);
    assert_eq!(value["error"]["code"], "io_error");
    Ok(())
}

#[test]
fn unknown_format_flag_is_usage_error() -> Result<()> {
    let out = phonebook(&["--csv", "test_file.csv"])?;
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    Ok(())
}

#[test]
fn no_flags_prints_nothing() -> Result<()> {
    let out = phonebook(&[])?;
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    Ok(())
}
