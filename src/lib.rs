#![allow(clippy::module_inception)]

use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::RunResult,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes, parses and runs `source`, sending `print` output to `output`.
///
/// `file` names the source in error positions and defaults to `shell`.
pub fn run_source<W: Write>(
    source: &str,
    file: Option<String>,
    debug: bool,
    output: W,
) -> Result<RunResult, Error> {
    let tokens = lexer::lexer::tokenize(source.to_string(), file.clone())?;
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    let program = parser::parse(tokens, file)?;

    interpreter::run(&program, debug, output)
}

/// Finds the line containing byte offset `position` in `content`.
///
/// Returns the 1-based line number, the line text and the offset within
/// that line. An offset equal to the content length points just past the
/// last line, where the `EOF` token sits.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
        last_line = line;
    }

    if last_line.ends_with('\n') || last_line.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last_line.to_string(), last_line.len()))
    }
}

/// Prints an error to stderr, pointing at the offending source if it has a position.
pub fn display_error(error: &Error, source: &str) -> io::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_error(&mut out, error, source)?;
    out.flush()
}

pub fn write_error<W: Write>(out: &mut W, error: &Error, source: &str) -> io::Result<()> {
    /*
        Error: UnexpectedToken (tip)
        -> counter.st
           |
        20 | x = 1 y = 2
           | ------^
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }

    let Some(position) = error.get_position() else {
        return writeln!(out, "{}", error);
    };

    writeln!(out, "-> {}", position.1)?;

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return Ok(());
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
