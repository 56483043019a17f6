//! Build script to generate embedded word lists
//!
//! Reads the bundled dictionary files and generates Rust source with const arrays.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LISTS: &[(&str, &str, &str)] = &[
    (
        "data/wordle-answers.txt",
        "WORDLE_ANSWERS",
        "Words that can be chosen as the hidden word in Wordle mode",
    ),
    (
        "data/wordle-guesses.txt",
        "WORDLE_GUESSES",
        "Words accepted as guesses in Wordle mode",
    ),
    (
        "data/scrabble-dict.txt",
        "SCRABBLE",
        "Mixed-length Scrabble word list, used for both answers and guesses",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for (input, const_name, doc_comment) in LISTS {
        let content = fs::read_to_string(input)
            .unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));
        let source = render_word_list(input, &content, const_name, doc_comment);

        let output = Path::new(&out_dir).join(format!("{}.rs", const_name.to_lowercase()));
        fs::write(&output, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input}");
    }
}

fn render_word_list(input: &str, content: &str, const_name: &str, doc_comment: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if let Some(bad) = words.iter().find(|w| !w.bytes().all(|b| b.is_ascii_lowercase())) {
        panic!("{input}: '{bad}' is not a lowercase word");
    }

    let mut out = String::new();
    writeln!(out, "/// {doc_comment}").unwrap();
    writeln!(out, "pub const {const_name}: &[&str] = &[").unwrap();
    for line in words.chunks(8) {
        let row: Vec<String> = line.iter().map(|w| format!("{w:?}")).collect();
        writeln!(out, "    {},", row.join(", ")).unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Number of words in [`{const_name}`]").unwrap();
    writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
    out
}
