//! Build script to generate embedded dictionaries
//!
//! Reads the per-length word list files and generates Rust source with const
//! arrays. The accepted list for each length is the common list merged with
//! the extra-words file, so accepted is always a superset of common.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: &[usize] = &[2, 3, 4, 5, 6];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("dictionaries.rs");

    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(output, "// Generated dictionaries").unwrap();

    for &length in LENGTHS {
        let common_path = format!("data/common-{length}.txt");
        let extra_path = format!("data/accepted-extra-{length}.txt");

        let common = read_words(&common_path);
        let extra = read_words(&extra_path);

        // accepted = common followed by the extra rare words, deduplicated
        let mut seen: HashSet<&str> = HashSet::new();
        let mut accepted: Vec<&str> = Vec::with_capacity(common.len() + extra.len());
        for word in common.iter().chain(extra.iter()) {
            if seen.insert(word) {
                accepted.push(word);
            }
        }

        write_word_list(
            &mut output,
            &format!("COMMON_{length}"),
            &common.iter().map(String::as_str).collect::<Vec<_>>(),
            &format!("Common {length}-letter solution words"),
        );
        write_word_list(
            &mut output,
            &format!("ACCEPTED_{length}"),
            &accepted,
            &format!("All accepted {length}-letter guess words (superset of the common list)"),
        );

        println!("cargo:rerun-if-changed={common_path}");
        println!("cargo:rerun-if-changed={extra_path}");
    }
}

fn read_words(path: &str) -> Vec<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_word_list(output: &mut fs::File, const_name: &str, words: &[&str], doc_comment: &str) {
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
