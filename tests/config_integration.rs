//! Tests for building writers from TOML tool configuration.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use tool_json_writer::config::parse_tool_config;
use tool_json_writer::{Error, ResultWriter, load_tool_config, read_document};

const TOOL_TOML: &str = r#"
tool = "steganography_detector"
version = "2023.03.02"
filter = "*.jpeg"

[configuration]
quality = 75

[[detectors]]
name = "is_tampered"
kind = "binary"
labels = ["original", "tampered"]

[[detectors]]
name = "3valued_detector"
kind = "categorical"
labels = ["cover", "stego", "not_sure"]
order = "descending"
"#;

#[test]
fn test_writer_from_config_file() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(TOOL_TOML.as_bytes()).unwrap();
    file.flush().unwrap();

    let config = load_tool_config(file.path()).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    let mut writer = ResultWriter::from_config(&path, &config).unwrap();
    assert_eq!(writer.detectors().len(), 2);
    assert_eq!(writer.tool().version, "2023.03.02");

    writer
        .append(
            "third.jpeg",
            "3valued_detector",
            [("cover", 0.05), ("stego", 0.8), ("not_sure", 0.15)],
            "stego",
        )
        .unwrap();
    writer.dispose().unwrap();

    let document = read_document(&path).unwrap();
    assert_eq!(document.version, "2023.03.02");
    assert_eq!(document.filter.as_deref(), Some("*.jpeg"));
    assert_eq!(document.configuration["quality"], 75);

    let score = document.files[0].scores.get("3valued_detector").unwrap();
    let order: Vec<_> = score.distribution.keys().collect();
    assert_eq!(order, ["stego", "not_sure", "cover"]);
}

#[test]
fn test_writer_from_invalid_config() {
    let config = parse_tool_config(
        r#"
tool = "steganography_detector"

[[detectors]]
name = "is_tampered"
kind = "binary"

[[detectors]]
name = "is_tampered"
kind = "binary"
"#,
    )
    .unwrap();

    let dir = TempDir::new().unwrap();
    let result = ResultWriter::from_config(dir.path().join("report.json"), &config);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_binary_default_labels_reach_output() {
    let config = parse_tool_config(
        r#"
tool = "qt_detector"

[[detectors]]
name = "standard_qt"
kind = "binary"
"#,
    )
    .unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    ResultWriter::from_config(&path, &config)
        .unwrap()
        .run(|writer| writer.append_ordered("a.jpg", "standard_qt", &[1.0, 0.0], "0"))
        .unwrap();

    let document = read_document(&path).unwrap();
    assert_eq!(document.detectors[0].labels, ["0", "1"]);
    assert_eq!(document.files[0].scores.get("standard_qt").unwrap().decision, "0");
}
