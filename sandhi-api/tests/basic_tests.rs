//! Basic tests for the public API

use sandhi_api::*;
use sandhi_core::{config::EMBEDDED_GRAMMAR, SandhiError};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_apply_sandhi() {
    assert_eq!(apply_sandhi("गुरु", "उपदेशः"), "गुरूपदेशः");
    assert_eq!(apply_sandhi("देव", "आलय"), "देवालय");
}

#[test]
fn test_apply_sandhi_falls_back_on_empty_operand() {
    assert_eq!(apply_sandhi("", "इति"), "इति");
    assert_eq!(apply_sandhi("राम", ""), "राम");
}

#[test]
fn test_sandhi_viched() {
    let (left, right) = sandhi_viched("गुरूपदेशः");
    assert!(!left.is_empty());
    assert!(!right.is_empty());

    assert_eq!(
        sandhi_viched("hello"),
        ("hello".to_string(), String::new())
    );
}

#[test]
fn test_analyze_word() {
    let decomposition = analyze_word("प्रगच्छति");
    assert_eq!(decomposition.prefix.as_deref(), Some("प्र"));
    assert_eq!(decomposition.root.as_deref(), Some("गम्"));
    assert!(analyze_word("").is_empty());
}

#[test]
fn test_form_samasa() {
    assert_eq!(
        form_samasa("राजन्", "पुरुष", "tatpurusha").unwrap().as_deref(),
        Some("राजपुरुष")
    );
    assert_eq!(
        form_samasa("दश", "दिक्", "dvigu").unwrap().as_deref(),
        Some("दशदिक्")
    );
    assert_eq!(form_samasa("घट", "दिक्", "dvigu").unwrap(), None);
}

#[test]
fn test_form_samasa_unknown_kind() {
    let err = form_samasa("राजन्", "पुरुष", "compound").unwrap_err();
    assert!(matches!(
        err,
        ApiError::Sandhi(SandhiError::InvalidArgument(_))
    ));
}

#[test]
fn test_processor_join_and_split() {
    let processor = Processor::new().unwrap();
    let merged = processor.join("गुरु", "उपदेशः").unwrap();
    assert_eq!(merged.merged, "गुरूपदेशः");
    assert!(!merged.fell_back_to_concatenation);

    let candidates = processor.split("गुरूपदेशः");
    assert!(candidates
        .iter()
        .any(|c| c.left == "गुरु" && c.right == "उपदेशः"));

    assert!(matches!(
        processor.join("", "इति"),
        Err(ApiError::Sandhi(SandhiError::InvalidInput(_)))
    ));
}

#[test]
fn test_split_limit() {
    let config = Config::builder().max_split_candidates(1).build().unwrap();
    let processor = Processor::with_config(config).unwrap();
    assert_eq!(processor.split("गुरूपदेशः").len(), 1);
}

#[test]
fn test_config_rejects_zero_limit() {
    let result = Config::builder().max_split_candidates(0).build();
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn test_config_rejects_missing_grammar() {
    let result = Config::builder()
        .grammar_file("/nonexistent/grammar.toml")
        .build();
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn test_processor_from_grammar_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sanskrit.toml");
    fs::write(&path, EMBEDDED_GRAMMAR).unwrap();

    let config = Config::builder().grammar_file(&path).build().unwrap();
    let processor = Processor::with_config(config).unwrap();
    assert_eq!(processor.join("देव", "आलय").unwrap().merged, "देवालय");
    assert_eq!(processor.grammar().metadata().code, "sa");
}

#[test]
fn test_processor_paradigms() {
    let processor = Processor::default();

    let paradigm = processor.conjugate("पठ", "lat", "parasmaipada").unwrap();
    assert_eq!(paradigm.forms[0][0], "पठति");

    let declension = processor.decline("राम", "masculine").unwrap();
    assert_eq!(declension.forms[0][0], "रामः");

    assert!(matches!(
        processor.conjugate("पठ", "perfect", "parasmaipada"),
        Err(ApiError::Sandhi(SandhiError::InvalidArgument(_)))
    ));

    let verb = processor.detect_verb("पठति").unwrap();
    assert_eq!(verb.root.as_deref(), Some("पठ्"));
}

#[test]
fn test_analyze_text_tokenises_devanagari() {
    let analysis = analyze_text("रामः गच्छति। गुरुत्व, 123").unwrap();
    let words: Vec<&str> = analysis.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["रामः", "गच्छति", "गुरुत्व"]);
    assert_eq!(analysis.words[0].byte_offset, 0);
    assert_eq!(analysis.words[1].byte_offset, "रामः ".len());
    assert_eq!(analysis.metadata.word_count, 3);
    assert_eq!(
        analysis.words[2].decomposition.suffix.as_deref(),
        Some("त्व")
    );
}

#[test]
fn test_unanalysed_words() {
    let analysis = analyze_text("गुरुत्व ॐ पठति").unwrap();
    let unanalysed: Vec<&str> = analysis.unanalysed().map(|w| w.word.as_str()).collect();
    assert_eq!(unanalysed, vec!["ॐ"]);
}

#[test]
fn test_analyze_text_parallel_matches_sequential() {
    let text = "प्रगच्छति पठति गुरुत्व रामेति ".repeat(20);

    let sequential = Processor::with_config(Config::builder().parallel(false).build().unwrap())
        .unwrap()
        .analyze_text(Input::from_text(text.clone()))
        .unwrap();
    let parallel = Processor::with_config(Config::builder().parallel(true).build().unwrap())
        .unwrap()
        .analyze_text(Input::from_text(text))
        .unwrap();

    assert_eq!(sequential.words, parallel.words);
    assert!(!sequential.metadata.parallel);
}

#[test]
fn test_input_sources() {
    let processor = Processor::new().unwrap();

    let from_bytes = processor
        .analyze_text(Input::from_bytes("पठति".as_bytes().to_vec()))
        .unwrap();
    assert_eq!(from_bytes.metadata.word_count, 1);

    let from_reader = processor
        .analyze_text(Input::from_reader(Cursor::new("पठति गच्छति")))
        .unwrap();
    assert_eq!(from_reader.metadata.word_count, 2);

    let invalid = processor.analyze_text(Input::from_bytes(vec![0xff, 0xfe]));
    assert!(matches!(invalid, Err(ApiError::Utf8(_))));

    let missing = processor.analyze_text(Input::from_file("/nonexistent/text.txt"));
    assert!(matches!(missing, Err(ApiError::Io(_))));
}

#[test]
fn test_analyze_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, "प्रगच्छति\n").unwrap();

    let analysis = analyze_file(&path).unwrap();
    assert_eq!(analysis.words.len(), 1);
    assert_eq!(analysis.metadata.total_bytes, "प्रगच्छति\n".len());
}

#[cfg(feature = "serde")]
#[test]
fn test_text_analysis_serializes() {
    let analysis = analyze_text("पठति").unwrap();
    let json = serde_json::to_string(&analysis).unwrap();
    assert!(json.contains("\"word_count\":1"));
    assert!(json.contains("पठ्"));
}
