// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::pattern::{PatternBuilder, ReplacementSpec};
use super::rewrite::{ContentRewriter, RegexRewriter};
use super::walk::TreeWalker;
use crate::core::env::VariableMap;

fn vars(pairs: &[(&str, &str)]) -> VariableMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn rewrite_with(content: &str, config: &VariableMap) -> String {
    let spec = PatternBuilder::default().build_patterns(config);
    RegexRewriter.rewrite(content, &spec)
}

// PatternBuilder

#[test]
fn test_matcher_escapes_and_bounds() {
    let builder = PatternBuilder::default();
    assert_eq!(builder.token("VITE_A"), "%%VITE_A");
    assert_eq!(builder.matcher("VITE_A"), r"%%VITE_A\b");
    assert_eq!(PatternBuilder::new("$$").matcher("X"), r"\$\$X\b");
    assert_eq!(PatternBuilder::new("ENV_").matcher("X"), r"\bENV_X\b");
}

#[test]
fn test_build_patterns_pairs_in_key_order() {
    let spec = PatternBuilder::default().build_patterns(&vars(&[("VITE_B", "2"), ("VITE_A", "1")]));
    assert_eq!(spec.from, [r"%%VITE_A\b", r"%%VITE_B\b"]);
    assert_eq!(spec.to, [Some("1".to_string()), Some("2".to_string())]);
}

#[test]
fn test_build_patterns_empty() {
    let spec = PatternBuilder::default().build_patterns(&VariableMap::new());
    assert!(spec.is_empty());
    assert!(spec.is_well_formed());
}

// RegexRewriter

#[test]
fn test_rewrite_literal_pattern() {
    let spec = ReplacementSpec::from_pairs([("test", "replaced")]);
    assert_eq!(RegexRewriter.rewrite("test content", &spec), "replaced content");
}

#[test]
fn test_rewrite_multiple_pairs() {
    let spec = ReplacementSpec::from_pairs([("test", "replaced"), ("content", "text")]);
    assert_eq!(RegexRewriter.rewrite("test content", &spec), "replaced text");
}

#[test]
fn test_rewrite_is_sequential() {
    let spec = ReplacementSpec::from_pairs([("a", "b"), ("b", "c")]);
    assert_eq!(RegexRewriter.rewrite("a", &spec), "c");
}

#[test]
fn test_rewrite_degenerate_inputs_are_noops() {
    let spec = ReplacementSpec::from_pairs([("test", "replaced")]);
    assert_eq!(RegexRewriter.rewrite("", &spec), "");
    assert_eq!(
        RegexRewriter.rewrite("test content", &ReplacementSpec::default()),
        "test content"
    );

    let mismatched = ReplacementSpec {
        from: vec!["test".to_string(), "content".to_string()],
        to: vec![Some("replaced".to_string())],
    };
    assert_eq!(RegexRewriter.rewrite("test content", &mismatched), "test content");
}

#[test]
fn test_rewrite_skips_invalid_pattern() {
    let spec = ReplacementSpec::from_pairs([("(unclosed", "x"), ("content", "text")]);
    assert_eq!(RegexRewriter.rewrite("test content", &spec), "test text");
}

#[test]
fn test_rewrite_missing_value_is_empty() {
    let spec = ReplacementSpec {
        from: vec!["test ".to_string()],
        to: vec![None],
    };
    assert_eq!(RegexRewriter.rewrite("test content", &spec), "content");
}

#[test]
fn test_rewrite_inserts_values_literally() {
    let out = rewrite_with(
        r#"const price = "%%VITE_PRICE";"#,
        &vars(&[("VITE_PRICE", "$1 and $$")]),
    );
    assert_eq!(out, r#"const price = "$1 and $$";"#);
}

#[test]
fn test_rewrite_respects_word_boundary() {
    let out = rewrite_with(
        "a=%%VITE_API b=%%VITE_API_URL c=%%VITE_API.",
        &vars(&[("VITE_API", "short")]),
    );
    assert_eq!(out, "a=short b=%%VITE_API_URL c=short.");
}

#[test]
fn test_rewrite_prefix_keys_both_resolved() {
    let out = rewrite_with(
        r#"{"a":"%%VITE_API","b":"%%VITE_API_URL"}"#,
        &vars(&[("VITE_API", "one"), ("VITE_API_URL", "two")]),
    );
    assert_eq!(out, r#"{"a":"one","b":"two"}"#);
}

#[test]
fn test_rewrite_unknown_placeholders_untouched() {
    let out = rewrite_with("%%VITE_KNOWN %%VITE_OTHER", &vars(&[("VITE_KNOWN", "k")]));
    assert_eq!(out, "k %%VITE_OTHER");
}

// TreeWalker

#[tokio::test]
async fn test_walk_rewrites_nested_files() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join("static/js")).unwrap();
    std::fs::write(root.join("index.html"), r#"<base href="%%PUBLIC_URL/">"#).unwrap();
    std::fs::write(root.join("static/js/main.js"), r#"fetch("%%VITE_API_URL")"#).unwrap();

    let config = vars(&[("PUBLIC_URL", "/app"), ("VITE_API_URL", "https://api")]);
    let outcomes = TreeWalker::default().walk_and_rewrite(root, &config).await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.success));
    assert_eq!(
        std::fs::read_to_string(root.join("index.html")).unwrap(),
        r#"<base href="/app/">"#
    );
    assert_eq!(
        std::fs::read_to_string(root.join("static/js/main.js")).unwrap(),
        r#"fetch("https://api")"#
    );
}

#[tokio::test]
async fn test_walk_empty_dir() {
    let temp = tempfile::tempdir().unwrap();
    let outcomes = TreeWalker::default()
        .walk_and_rewrite(temp.path(), &VariableMap::new())
        .await;
    assert!(outcomes.is_empty());
}

#[tokio::test]
async fn test_walk_missing_root_is_single_failure() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("missing");
    let outcomes = TreeWalker::default()
        .walk_and_rewrite(&root, &VariableMap::new())
        .await;

    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].success);
    assert_eq!(outcomes[0].path, root);
    assert!(outcomes[0].error.is_some());
}

#[cfg(unix)]
#[tokio::test]
async fn test_walk_isolates_unreadable_file() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    std::fs::write(root.join("1.js"), "%%VITE_X").unwrap();
    // Dangling link: listed by the directory but cannot be read.
    std::os::unix::fs::symlink(root.join("nowhere"), root.join("2.js")).unwrap();
    std::fs::write(root.join("3.js"), "%%VITE_X").unwrap();

    let outcomes = TreeWalker::default()
        .walk_and_rewrite(root, &vars(&[("VITE_X", "ok")]))
        .await;

    let flags: Vec<bool> = outcomes.iter().map(|o| o.success).collect();
    assert_eq!(flags, [true, false, true]);
    assert_eq!(outcomes[1].path, root.join("2.js"));
    assert_eq!(std::fs::read_to_string(root.join("1.js")).unwrap(), "ok");
    assert_eq!(std::fs::read_to_string(root.join("3.js")).unwrap(), "ok");
}

#[tokio::test]
async fn test_walk_leaves_binary_files_untouched() {
    let temp = tempfile::tempdir().unwrap();
    let bytes = [0x89, b'P', b'N', b'G', 0xff, 0xfe, b'%', b'%'];
    std::fs::write(temp.path().join("logo.png"), bytes).unwrap();

    let outcomes = TreeWalker::default()
        .walk_and_rewrite(temp.path(), &vars(&[("VITE_X", "y")]))
        .await;

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].success);
    assert_eq!(std::fs::read(temp.path().join("logo.png")).unwrap(), bytes);
}

#[tokio::test]
async fn test_walk_with_custom_placeholder() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("a.js"), "x=@@VITE_X").unwrap();

    let walker = TreeWalker::new(PatternBuilder::new("@@"));
    assert_eq!(walker.patterns().placeholder(), "@@");
    walker
        .walk_and_rewrite(temp.path(), &vars(&[("VITE_X", "1")]))
        .await;

    assert_eq!(std::fs::read_to_string(temp.path().join("a.js")).unwrap(), "x=1");
}

#[tokio::test]
async fn test_walk_uses_custom_rewriter() {
    struct Upper;
    impl ContentRewriter for Upper {
        fn rewrite(&self, content: &str, _spec: &ReplacementSpec) -> String {
            content.to_uppercase()
        }
    }

    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("a.txt"), "abc").unwrap();

    TreeWalker::default()
        .with_rewriter(Upper)
        .walk_and_rewrite(temp.path(), &VariableMap::new())
        .await;

    assert_eq!(std::fs::read_to_string(temp.path().join("a.txt")).unwrap(), "ABC");
}
