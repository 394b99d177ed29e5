use anyhow::Result;
use chrono::NaiveDate;
use domain_tracker::utils::validation::Validate;
use domain_tracker::{ExpiryEngine, OutputFormat, ReportRenderer, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const DOMAINS_FILE: &str = r#"
[tracker]
name = "Portfolio"

[display]
date_format = "%Y/%m/%d"
output_format = "tsv"

[[domains]]
id = 1
name = "seven.net"
owner = "Sam Seven"
start_date = "2024-06-17"

[[domains]]
id = 2
name = "redemption.io"
owner = "Rachel Rays"
start_date = "2024-06-12T00:00:00"

[[domains]]
id = 2
name = "longlived.org"
owner = "Lou Long"
start_date = "2025-01-01"
"#;

#[test]
fn test_file_to_tsv_export() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(DOMAINS_FILE.as_bytes())?;

    let config = TomlConfig::from_file(temp_file.path())?;
    config.validate()?;
    assert_eq!(config.title(), Some("Portfolio"));

    let store = config.build_store();
    // Duplicate ids are loaded as-is.
    assert_eq!(store.len(), 3);

    let now = NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let engine = ExpiryEngine::new(&store);
    let renderer = ReportRenderer::new(config.display.date_format.clone());

    let mut buf = Vec::new();
    renderer.write_export(&mut buf, &engine, now, config.display.output_format)?;
    let text = String::from_utf8(buf)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(config.display.output_format, OutputFormat::Tsv);
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "1\tseven.net\tSam Seven\t2024/06/17\t2025/06/17\tNo\tYes\tNo\tNo\t7 Days"
    );
    assert_eq!(
        lines[2],
        "2\tredemption.io\tRachel Rays\t2024/06/12\t2025/06/12\tNo\tNo\tYes\tYes\tRedemption"
    );
    assert_eq!(
        lines[3],
        "2\tlonglived.org\tLou Long\t2025/01/01\t2026/01/01\tNo\tNo\tNo\tNo\tActive"
    );
    Ok(())
}

#[test]
fn test_unparseable_file_is_rejected() {
    let result = TomlConfig::from_toml_str("[[domains]]\nid = \"one\"\n");
    assert!(result.is_err());
}
