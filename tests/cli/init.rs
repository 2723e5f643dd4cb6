use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["replaceSource"], Value::Bool(true));
    assert!(
        parsed["warningSuffix"].is_string(),
        "Config should have 'warningSuffix' field"
    );
    assert!(
        content.contains("\n  \"replaceSource\""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .glot-migrate.json\n");
    assert!(test.root().join(".glot-migrate.json").exists());

    let content = test.read_file(".glot-migrate.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glot-migrate.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .glot-migrate.json already exists\n");
    assert_eq!(test.read_file(".glot-migrate.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/messages.ts", r#"export default { title: "Hello" };"#)?;

    let output = test
        .migrate_command("src/messages.ts", "messages/en.json")
        .output()?;
    assert!(
        output.status.success(),
        "Migrate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.read_file("src/messages.ts")?.starts_with("MIGRATED TO "));

    Ok(())
}
