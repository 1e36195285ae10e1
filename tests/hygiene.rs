//! Hygiene: scans `src/` for patterns the crate keeps out of library code.
//!
//! Browser helpers must degrade instead of crashing the page, so panicking
//! calls and silently discarded results have a zero budget. Raw HTML
//! insertion is limited to the escaped toast markup.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the wasm instance" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the wasm instance" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the wasm instance" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the wasm instance" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "log DOM failures instead of discarding them" },
    Budget { pattern: ".ok()", max: 0, why: "log DOM failures instead of discarding them" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    Budget { pattern: "set_inner_html(", max: 1, why: "only escaped toast markup may be injected" },
];

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if path.extension().is_some_and(|e| e == "rs") && !name.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > budget.max {
            let detail = found
                .iter()
                .map(|(path, n)| format!("    {path}: {n}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` found {total}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
