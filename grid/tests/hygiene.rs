//! Hygiene: coding standards for the grid crate, checked at test time.
//!
//! Each pattern has a budget of occurrences in production sources (files
//! under `src/` that are not `*_test.rs`). Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, reason)`.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the page"),
    ("unreachable!(", 0, "crashes the page"),
    ("todo!(", 0, "unfinished code"),
    ("unimplemented!(", 0, "unfinished code"),
    ("let _ =", 0, "silently discards a result"),
    (".ok()", 0, "silently discards an error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
    ("println!(", 0, "use the log facade"),
    ("eprintln!(", 0, "use the log facade"),
    ("dbg!(", 0, "debug leftovers"),
];

/// Modules that carry no behaviour worth a sibling test file.
const UNTESTED_MODULES: &[&str] = &["lib", "consts", "error"];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files.retain(|f| !f.path.to_string_lossy().ends_with("_test.rs"));
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && let Ok(content) = fs::read_to_string(&path)
        {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.display().to_string(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

// =============================================================
// Pattern budgets
// =============================================================

#[test]
fn sources_are_found() {
    assert!(production_sources().len() > 5, "run from the grid crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources();
    let mut failures = Vec::new();
    for (pattern, budget, reason) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > *budget {
            let detail: Vec<String> = found.iter().map(|(p, n)| format!("    {p}: {n}")).collect();
            failures.push(format!("{pattern} ({reason}): found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

// =============================================================
// Test layout
// =============================================================

#[test]
fn every_module_has_a_sibling_test_file() {
    let missing: Vec<String> = production_sources()
        .iter()
        .filter_map(|f| {
            let stem = f.path.file_stem()?.to_string_lossy().to_string();
            if UNTESTED_MODULES.contains(&stem.as_str()) {
                return None;
            }
            let sibling = f.path.with_file_name(format!("{stem}_test.rs"));
            (!sibling.exists()).then_some(stem)
        })
        .collect();
    assert!(missing.is_empty(), "modules without a *_test.rs sibling: {missing:?}");
}

#[test]
fn test_files_are_wired_with_path_attribute() {
    let unwired: Vec<String> = production_sources()
        .iter()
        .filter_map(|f| {
            let stem = f.path.file_stem()?.to_string_lossy().to_string();
            let sibling = f.path.with_file_name(format!("{stem}_test.rs"));
            let attr = format!("#[path = \"{stem}_test.rs\"]");
            (sibling.exists() && !f.content.contains(&attr)).then_some(stem)
        })
        .collect();
    assert!(unwired.is_empty(), "test files not attached to their module: {unwired:?}");
}
