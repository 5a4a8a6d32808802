//! File output and structured format tests

use std::fs;

use bignumgen_tables::{GenerateOptions, Section, generate_to_path, generate_to_string};
use tempfile::TempDir;

#[test]
fn test_generate_to_path_matches_string_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("generated").join("tables.ts.txt");
    let options = GenerateOptions::default();

    let summary = generate_to_path(&path, &options).unwrap();
    assert_eq!(summary.sections, 6);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, generate_to_string(&options).unwrap());
}

#[test]
fn test_generate_to_path_leaves_no_staging_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tables.txt");

    generate_to_path(&path, &GenerateOptions::default()).unwrap();
    generate_to_path(&path, &GenerateOptions::default()).unwrap();

    let names: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("tables.txt")]);
}

#[cfg(feature = "json")]
mod json_lines {
    use super::*;
    use bignumgen_tables::OutputFormat;
    use serde_json::Value;

    fn records(options: &GenerateOptions) -> Vec<Value> {
        generate_to_string(options)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is one JSON object"))
            .collect()
    }

    #[test]
    fn test_json_lines_counts() {
        let options = GenerateOptions::default().with_format(OutputFormat::JsonLines);
        let records = records(&options);
        let count = |kind: &str| records.iter().filter(|r| r["kind"] == kind).count();

        assert_eq!(count("section"), 6);
        assert_eq!(count("table"), 55 + 100 + 55);
        assert_eq!(count("full_adder"), 1000);
        assert_eq!(count("full_subtracter"), 1000);
        assert_eq!(count("mul"), 5050);
    }

    #[test]
    fn test_json_lines_add_table_entry() {
        let options = GenerateOptions::default()
            .with_format(OutputFormat::JsonLines)
            .with_sections([Section::AddTable]);
        let records = records(&options);

        assert_eq!(records[0]["name"], "addTable");
        let entry = records
            .iter()
            .find(|r| r["a"] == 5 && r["b"] == 7)
            .unwrap();
        assert_eq!(entry["op"], "add");
        assert_eq!(entry["result"], "21");
        assert!(records.iter().all(|r| r["kind"] == "section" || r["a"].as_u64() <= r["b"].as_u64()));
    }
}
