#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Finds the line containing the byte `offset` of `source`.
///
/// Returns the 1-based line number, the line text (including its line
/// terminator) and the offset of the byte within that line.
pub fn get_line_at_position(source: &[u8], offset: usize) -> Option<(usize, String, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive(|&b| b == b'\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            let text = line.iter().map(|&b| b as char).collect();
            return Some((index + 1, text, offset - start));
        }

        start = end;
    }

    None
}


/// Prints `error` to stderr with the offending line and a caret under it.
pub fn display_error(error: &Error, source: &[u8], file: &str) {
    /*
        Error: IllegalCharacter (`@` is not part of the language)
        -> main.monkey
           |
        20 | let a = @;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position())
    else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos - removed_whitespace + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|&c| c == ' ' || c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
