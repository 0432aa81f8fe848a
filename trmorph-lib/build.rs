// Parses the bundled lexicon text files and embeds them as JSON at compile time.

use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EmbeddedLexicon {
    entries: Vec<RawEntry>,
}

/// Mirrors `lexicon::RawEntry`. Category names and attributes are checked
/// when the library loads the data.
#[derive(Serialize)]
struct RawEntry {
    lemma: String,
    root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
}

fn main() {
    let data_dir = Path::new("../data/lexicon");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("lexicon.json");

    let mut files: Vec<_> = fs::read_dir(data_dir)
        .expect("cannot read data/lexicon/ directory")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut entries = Vec::new();
    for path in &files {
        println!("cargo:rerun-if-changed={}", path.display());
        let content = fs::read_to_string(path).expect("cannot read lexicon file");
        for (number, line) in content.lines().enumerate() {
            if let Some(entry) = parse_line(line) {
                entries.push(entry);
            } else if !is_skipped(line) {
                panic!("{}:{}: malformed lexicon line {line:?}", path.display(), number + 1);
            }
        }
    }

    let data = EmbeddedLexicon { entries };
    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write lexicon.json");

    println!("cargo:rerun-if-changed=../data/lexicon");
    println!("cargo:rerun-if-changed=build.rs");
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// `root [P:Cat,Secondary; A:Attr,Attr; R:root; S:semantics]`
fn parse_line(line: &str) -> Option<RawEntry> {
    if is_skipped(line) {
        return None;
    }
    let line = line.trim();
    let (word, meta) = match line.split_once('[') {
        Some((word, rest)) => (word.trim(), Some(rest.trim().strip_suffix(']')?.trim())),
        None => (line, None),
    };
    if word.is_empty() {
        return None;
    }

    let mut entry = RawEntry {
        lemma: word.to_string(),
        root: word.to_string(),
        category: None,
        secondary: None,
        attributes: Vec::new(),
    };
    for part in meta.into_iter().flat_map(|m| m.split(';')).map(str::trim) {
        if let Some(pos) = part.strip_prefix("P:") {
            let mut tags = pos.splitn(2, ',').map(str::trim);
            entry.category = tags.next().filter(|t| !t.is_empty()).map(String::from);
            entry.secondary = tags.next().filter(|t| !t.is_empty()).map(String::from);
        } else if let Some(attrs) = part.strip_prefix("A:") {
            entry.attributes = attrs
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect();
        } else if let Some(root) = part.strip_prefix("R:") {
            entry.root = root.trim().to_string();
        } else if !part.is_empty() && !part.starts_with("S:") {
            return None;
        }
    }
    Some(entry)
}
