// tests/module_boundaries.rs
// Fails if file dialogs or JSON (de)serialization leak out of their modules.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn offenders(patterns: &[&str], allowed: &[&str]) -> Vec<(String, String)> {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let mut found = Vec::new();
    for file in files {
        let p = normalized(&file);
        if allowed.iter().any(|a| p.ends_with(a)) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for pat in patterns {
            if content.contains(pat) {
                found.push((p.clone(), pat.to_string()));
            }
        }
    }
    found
}

#[test]
fn file_dialogs_only_in_copier_handler() {
    let found = offenders(&["FileDialog", "rfd::"], &["src/copier/handler.rs"]);
    assert!(found.is_empty(), "file dialogs outside copier/handler.rs: {:?}", found);
}

#[test]
fn json_only_in_io_modules() {
    let found = offenders(
        &["serde_json::"],
        &["src/copier/io.rs", "src/settings/io.rs"],
    );
    assert!(found.is_empty(), "serde_json outside io modules: {:?}", found);
}

#[test]
fn clipboard_written_only_by_the_window_ui() {
    let found = offenders(&["copy_text("], &["src/ui/elements/mod.rs"]);
    assert!(found.is_empty(), "clipboard writes outside ui/elements/mod.rs: {:?}", found);
}
