//! Hygiene — enforces coding standards at test time
//!
//! Scans the portfolio source tree for antipatterns. Each pattern has a
//! budget; the budget never grows. Browser glue is also fenced: only the
//! adapter layer and the WASM entry point may name `web_sys`.

use std::fs;
use std::path::Path;

/// (pattern, budget, reason)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the page"),
    ("unreachable!(", 0, "crashes the page"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    (".ok()", 0, "drops the error without logging it"),
    ("println!(", 0, "use the log facade"),
    ("#[allow(dead_code)]", 0, "delete unused code instead"),
    // Parameter sinks in the non-`csr` branches of `util/`.
    ("let _ =", 5, "discards a value without inspecting it"),
];

/// Files allowed to reference `web_sys` directly.
const WEB_SYS_ALLOWED: &[&str] = &["lib.rs", "util/"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().replace('\\', "/");
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "run from the crate root so src/ resolves");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, max, reason) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > max {
            failures.push(format!("{pattern} ({reason}): found {count}, max {max}\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn web_sys_stays_in_adapters() {
    let files = source_files();
    let leaks: Vec<(String, usize)> = hits(&files, "web_sys::")
        .into_iter()
        .filter(|(path, _)| {
            let rel = path.trim_start_matches("src/");
            !WEB_SYS_ALLOWED.iter().any(|allowed| rel.starts_with(allowed))
        })
        .collect();
    assert!(leaks.is_empty(), "web_sys referenced outside util/:\n{}", format_hits(&leaks));
}

#[test]
fn contact_inputs_autosave_on_input_and_change() {
    let source = fs::read_to_string("src/components/contact_form.rs").expect("contact form source readable");
    let bound: Vec<&str> = source.lines().filter(|line| line.contains("on:input=")).collect();
    assert_eq!(bound.len(), 4, "one input per contact field");
    for line in bound {
        assert!(line.contains("on:change="), "input without change handler: {}", line.trim());
    }
}
