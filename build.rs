//! Build script to embed the fallback dictionaries
//!
//! Reads the per-language word lists and generates Rust source with const arrays.
//! Lines are emitted as-is (trimmed); normalization happens when the list is loaded.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words_en.txt",
        &Path::new(&out_dir).join("words_en.rs"),
        "WORDS_EN",
        "Embedded English five-letter words, most common first",
    );

    generate_word_list(
        "data/words_es.txt",
        &Path::new(&out_dir).join("words_es.rs"),
        "WORDS_ES",
        "Embedded Spanish five-letter words, most common first",
    );

    println!("cargo:rerun-if-changed=data/words_en.txt");
    println!("cargo:rerun-if-changed=data/words_es.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
}
