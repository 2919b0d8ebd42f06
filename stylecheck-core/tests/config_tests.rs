// stylecheck-core/tests/config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use stylecheck_core::FilterConfig;

#[test]
fn load_from_file_reads_both_lists() -> Result<()> {
    let yaml_content = r#"
include:
  - '\.cpp$'
  - '\.h$'
exclude:
  - '^external/'
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let config = FilterConfig::load_from_file(file.path())?;
    assert_eq!(config.include.len(), 2);
    assert_eq!(config.exclude, vec!["^external/".to_string()]);

    let filters = config.compile()?;
    assert!(filters.matches("src/widget.cpp"));
    assert!(!filters.matches("external/widget.cpp"));
    assert!(!filters.matches("src/widget.cc"));
    Ok(())
}

#[test]
fn missing_lists_fall_back_to_defaults() -> Result<()> {
    let yaml_content = r#"
exclude:
  - '^build/'
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let config = FilterConfig::load_from_file(file.path())?;
    // include defaults to match-everything
    let filters = config.compile()?;
    assert!(filters.matches("src/anything.txt"));
    assert!(!filters.matches("build/out.o"));
    Ok(())
}

#[test]
fn load_from_missing_file_is_an_error() {
    let result = FilterConfig::load_from_file(std::path::Path::new("/no/such/config.yml"));
    assert!(result.is_err());
}
