use glot_migrate::{config::Config, mcp::GlotMigrateServer, mcp::types::MigrateFileParams};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, default_server, extract_tool_error_text, extract_tool_result_text};

const PAGE_SOURCE: &str = r#"
export default function Page() {
    const t = useTranslations('pages.home');
    return <h1>{t('title') || 'Welcome'}</h1>;
}
"#;

// ============================================================================
// migrate_file tests
// ============================================================================

#[tokio::test]
async fn test_migrate_file_merges_and_replaces_source() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_source("app/page.tsx", PAGE_SOURCE).unwrap();
    fixture
        .write_locale_file("en", &json!({"pages.home.title": "Old", "common": {"ok": "OK"}}))
        .unwrap();
    let server = default_server();

    let params = Parameters(MigrateFileParams {
        source_path: fixture.path("app/page.tsx"),
        target_path: fixture.path("messages/en.json"),
    });

    let result = server.migrate_file(params).await.unwrap();
    let summary = extract_tool_result_text(&result);

    assert_eq!(
        summary,
        format!(
            "Merged 1 entry into {} (translation calls); source file replaced with migration marker",
            fixture.locale_path("en").display()
        )
    );
    assert_eq!(
        fixture.read_locale_file("en").unwrap(),
        json!({"pages.home.title": "Welcome", "common": {"ok": "OK"}})
    );
    assert!(
        fixture
            .read_source("app/page.tsx")
            .unwrap()
            .starts_with("MIGRATED TO ")
    );
}

#[tokio::test]
async fn test_migrate_file_creates_missing_catalog() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_source("src/strings.ts", "export default { a: { b: 'c' } };")
        .unwrap();
    let server = default_server();

    let params = Parameters(MigrateFileParams {
        source_path: fixture.path("src/strings.ts"),
        target_path: fixture.path("locales/fr/common.json"),
    });

    let result = server.migrate_file(params).await.unwrap();
    extract_tool_result_text(&result);

    let written = std::fs::read_to_string(fixture.root_path().join("locales/fr/common.json")).unwrap();
    assert_eq!(written, "{\n  \"a\": {\n    \"b\": \"c\"\n  }\n}\n");
}

#[tokio::test]
async fn test_migrate_file_respects_server_config() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_source("app/page.tsx", PAGE_SOURCE).unwrap();
    let server = GlotMigrateServer::new(Config {
        replace_source: false,
        ..Config::default()
    });

    let params = Parameters(MigrateFileParams {
        source_path: fixture.path("app/page.tsx"),
        target_path: fixture.path("messages/en.json"),
    });

    let result = server.migrate_file(params).await.unwrap();
    let summary = extract_tool_result_text(&result);

    assert!(summary.ends_with("source file left unchanged (replacement disabled)"));
    assert_eq!(fixture.read_source("app/page.tsx").unwrap(), PAGE_SOURCE);
}

#[tokio::test]
async fn test_migrate_file_nothing_to_extract() {
    let fixture = McpTestFixture::new().unwrap();
    let code = "export const answer = 42;";
    fixture.write_source("src/answer.ts", code).unwrap();
    let server = default_server();

    let params = Parameters(MigrateFileParams {
        source_path: fixture.path("src/answer.ts"),
        target_path: fixture.path("messages/en.json"),
    });

    let result = server.migrate_file(params).await.unwrap();
    let summary = extract_tool_result_text(&result);

    assert!(summary.starts_with("No extractable data found"));
    assert_eq!(fixture.read_source("src/answer.ts").unwrap(), code);
    assert!(!fixture.locale_path("en").exists());
}

#[tokio::test]
async fn test_migrate_file_missing_source_is_tool_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = default_server();

    let params = Parameters(MigrateFileParams {
        source_path: fixture.path("src/missing.ts"),
        target_path: fixture.path("messages/en.json"),
    });

    let result = server.migrate_file(params).await.unwrap();
    let message = extract_tool_error_text(&result);

    assert!(message.starts_with("Failed to read source file"));
    assert!(!fixture.locale_path("en").exists());
}
