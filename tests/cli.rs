//! CLI contract tests for `lexgram`.
#![cfg(feature = "cli")]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

fn lexgram() -> assert_cmd::Command {
    cargo_bin_cmd!("lexgram")
}

fn lexicon(words: &str) -> (tempfile::TempDir, String) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("words.txt");
    fs::write(&path, words).expect("write lexicon");
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

#[test]
fn query_prints_ranked_matches() {
    let (_tmp, path) = lexicon("hello\nhelp\n\n  hell  \nworld\n");

    lexgram()
        .args(["query", "--input", &path, "-k", "2", "helo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results for \"helo\":"))
        .stdout(predicate::str::contains("  hello\n  help\n"));
}

#[test]
fn query_with_scores_reports_overlap() {
    let (_tmp, path) = lexicon("hello\nhelp\nhell\nworld\n");

    lexgram()
        .args(["query", "--input", &path, "--scores", "helo", "qqq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello: overlap 3"))
        .stdout(predicate::str::contains("qqq (no match)"));
}

#[test]
fn query_without_match_echoes_word() {
    let (_tmp, path) = lexicon("alpha\nbeta\n");

    lexgram()
        .args(["query", "--input", &path, "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  zzz\n"));
}

#[test]
fn zero_k_fails() {
    let (_tmp, path) = lexicon("alpha\n");

    lexgram()
        .args(["query", "--input", &path, "-k", "0", "alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidK"));
}

#[test]
fn boundary_in_lexicon_fails() {
    let (_tmp, path) = lexicon("a=b\n");

    lexgram()
        .args(["stats", "--input", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BoundaryInWord"));

    // A different boundary accepts the same lexicon.
    lexgram()
        .args(["stats", "--input", &path, "--boundary", "#"])
        .assert()
        .success();
}

#[test]
fn stats_reports_counts() {
    let (_tmp, path) = lexicon("ab\nab\ncd\n");

    lexgram()
        .args(["stats", "--input", &path, "--ngram-length", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("words: 3"))
        .stdout(predicate::str::contains("distinct words: 2"))
        .stdout(predicate::str::contains("ngram length: 2"))
        .stdout(predicate::str::contains("distinct ngrams: 6"))
        .stdout(predicate::str::contains("postings: 9"));
}

#[test]
fn missing_input_fails() {
    lexgram()
        .args(["stats", "--input", "/nonexistent/lexgram/words.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read lexicon"));
}
