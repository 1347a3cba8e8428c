//! End-to-end tests for the `sandhi` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sandhi() -> Command {
    let mut cmd = Command::cargo_bin("sandhi").unwrap();
    cmd.env_remove("SANDHI_GRAMMAR");
    cmd
}

#[test]
fn test_help() {
    sandhi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("join"))
        .stdout(predicate::str::contains("samasa"));
}

#[test]
fn test_join() {
    sandhi()
        .args(["join", "गुरु", "उपदेशः"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("गुरूपदेशः"));
}

#[test]
fn test_join_fallback() {
    sandhi()
        .args(["join", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("helloworld"))
        .stdout(predicate::str::contains("concatenation"));
}

#[test]
fn test_join_empty_operand_fails() {
    sandhi()
        .args(["join", "", "इति"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing error"));
}

#[test]
fn test_join_json() {
    let output = sandhi()
        .args(["join", "देव", "आलय", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["merged"], "देवालय");
    assert_eq!(value["fell_back_to_concatenation"], false);
}

#[test]
fn test_split_lists_candidates() {
    sandhi()
        .args(["split", "गुरूपदेशः"])
        .assert()
        .success()
        .stdout(predicate::str::contains("गुरु + उपदेशः"));
}

#[test]
fn test_split_limit() {
    let output = sandhi()
        .args(["split", "गुरूपदेशः", "--limit", "1", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["candidates"].as_array().unwrap().len(), 1);
}

#[test]
fn test_analyze_words() {
    sandhi()
        .args(["analyze", "प्रगच्छति", "गुरुत्व"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root=गम्"))
        .stdout(predicate::str::contains("suffix=त्व"));
}

#[test]
fn test_analyze_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, "रामः पठति।\nप्रगच्छति").unwrap();

    let output = sandhi()
        .args(["analyze", "--parallel", "-f", "json", "-i"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["word_count"], 3);
    assert_eq!(value["words"][2]["word"], "प्रगच्छति");
}

#[test]
fn test_analyze_missing_file() {
    sandhi()
        .args(["analyze", "-i", "/nonexistent/text.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_samasa() {
    sandhi()
        .args(["samasa", "राजन्", "पुरुष", "--kind", "tatpurusha"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("राजपुरुष"));

    sandhi()
        .args(["samasa", "घट", "दिक्", "--kind", "dvigu"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("not applicable"));
}

#[test]
fn test_samasa_unknown_kind() {
    sandhi()
        .args(["samasa", "राजन्", "पुरुष", "--kind", "compound"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_conjugate_and_decline() {
    sandhi()
        .args(["conjugate", "पठ", "--lakara", "lat", "--pada", "parasmaipada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("पठन्ति"));

    sandhi()
        .args(["decline", "राम", "--gender", "masculine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("रामस्य"));
}

#[test]
fn test_conjugate_unknown_lakara() {
    sandhi()
        .args(["conjugate", "पठ", "--lakara", "perfect"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lakara"));
}

#[test]
fn test_list_commands() {
    sandhi()
        .args(["list", "kinds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dvandva"));

    sandhi()
        .args(["list", "lakaras"])
        .assert()
        .success()
        .stdout(predicate::str::contains("लट्"));

    sandhi()
        .args(["list", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→"));
}

#[test]
fn test_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sanskrit.toml");
    fs::write(&path, sandhi_core::config::EMBEDDED_GRAMMAR).unwrap();

    sandhi()
        .arg("validate")
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Grammar is valid"));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[metadata]\ncode = \"x\"\n").unwrap();
    sandhi()
        .arg("validate")
        .arg("-c")
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grammar error"));
}

#[test]
fn test_external_grammar_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.toml");
    fs::write(
        &path,
        r#"
[metadata]
code = "tiny"
name = "Tiny"

[[rules]]
kind = "vowel"
left = "अ"
right = "इ"
output = "ऐ"

[lexicon]
upasargas = []

[lexicon.suffixes]

[compounds]
case_endings = []
policies = []
"#,
    )
    .unwrap();

    sandhi()
        .args(["join", "राम", "इति", "--grammar"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("रामैति"));

    sandhi()
        .args(["join", "राम", "इति", "--grammar", "/nonexistent/grammar.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grammar error"));
}
