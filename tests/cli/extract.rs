use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_translation_calls() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/page.tsx",
        r#"
export function Header() {
    const t = useTranslations('header');
    return <nav>{t('home') || 'Home'} {t('about') || 'About us'}</nav>;
}
"#,
    )?;

    let output = test.extract_command("src/app/page.tsx").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output).trim_end(), @r#"
    {
      "header.home": "Home",
      "header.about": "About us"
    }
    "#);

    Ok(())
}

#[test]
fn test_extract_default_export() -> Result<()> {
    let test = CliTest::with_file(
        "src/messages.js",
        r#"
export default {
    greeting: 'Hello',
    nested: { items: ['a', 'b'], enabled: true, missing: undefined },
};
"#,
    )?;

    let output = test.extract_command("src/messages.js").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output).trim_end(), @r#"
    {
      "greeting": "Hello",
      "nested": {
        "items": [
          "a",
          "b"
        ],
        "enabled": true,
        "missing": null
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_extract_writes_nothing() -> Result<()> {
    let code = "export default { title: 'Hello' };\n";
    let test = CliTest::with_file("src/messages.ts", code)?;

    test.extract_command("src/messages.ts").output()?;

    assert_eq!(test.read_file("src/messages.ts")?, code);

    Ok(())
}

#[test]
fn test_extract_nothing() -> Result<()> {
    let test = CliTest::with_file("src/util.ts", "export const answer = 42;\n")?;

    let output = test.extract_command("src/util.ts").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "{}\n");
    assert_eq!(
        stderr(&output),
        "No extractable data found in src/util.ts\n"
    );

    Ok(())
}
