//! Script line classification.
//!
//! One script line maps to one instruction. Keywords are matched
//! case-insensitively; anything unrecognized is a pass-through command
//! for the dispatcher.

use lazy_static::lazy_static;
use regex_lite::Regex;

use super::blocks::{is_else_open, parse_block_close};
use super::types::{CONTINUE_MARKER, ECHO_OFF_DIRECTIVE};

lazy_static! {
    static ref IF_HEADER: Regex = Regex::new(r"(?i)^if\s*\((.*)\)").unwrap();
}

/// A classified script line. Borrowed slices point into the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<'a> {
    Blank,
    /// `@echo off` — disables echo for the rest of the run.
    EchoOff,
    /// `rem ...` or `:: ...` — skipped, never echoed.
    Comment,
    /// `%continue%` — suspend until the space key.
    PauseForKey,
    /// `print >> text`
    Print(&'a str),
    /// `var NAME`
    Declare(&'a str),
    /// `input >> NAME` (or the legacy `imput` spelling)
    Input(&'a str),
    /// `wait ms` — interpreter-native sleep.
    Wait(u64),
    /// `if (<condition>) {`; `None` marks a malformed header, which is
    /// consumed as a no-op rather than dispatched.
    IfHeader(Option<&'a str>),
    /// `}` or `} else {`
    BlockClose { inline_else: bool },
    /// `else {`
    ElseOpen,
    /// Anything else: an ordinary shell command for the dispatcher.
    PassThrough { name: &'a str, args: &'a str },
}

/// Classify one (trimmed or untrimmed) script line.
pub fn classify(line: &str) -> Instruction<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Instruction::Blank;
    }
    if trimmed.eq_ignore_ascii_case(ECHO_OFF_DIRECTIVE) {
        return Instruction::EchoOff;
    }
    if trimmed.starts_with("::") || first_word_is(trimmed, "rem") {
        return Instruction::Comment;
    }
    if trimmed.eq_ignore_ascii_case(CONTINUE_MARKER) {
        return Instruction::PauseForKey;
    }
    if let Some(text) = strip_chevron_form(trimmed, "print") {
        return Instruction::Print(text);
    }
    if let Some(name) = strip_chevron_form(trimmed, "input")
        .or_else(|| strip_chevron_form(trimmed, "imput"))
    {
        return Instruction::Input(name);
    }
    if let Some(rest) = strip_keyword_word(trimmed, "var") {
        let name = rest.trim();
        if !name.is_empty() {
            return Instruction::Declare(name);
        }
    }
    if let Some(rest) = strip_keyword_word(trimmed, "wait") {
        let ms = rest.trim().parse::<u64>().unwrap_or(1000);
        return Instruction::Wait(ms);
    }
    if first_word_is(trimmed, "if") {
        let condition = IF_HEADER
            .captures(trimmed)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        return Instruction::IfHeader(condition);
    }
    if let Some(inline_else) = parse_block_close(trimmed) {
        return Instruction::BlockClose { inline_else };
    }
    if is_else_open(trimmed) {
        return Instruction::ElseOpen;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();
    Instruction::PassThrough { name, args }
}

/// `keyword >> payload` forms (`print >>`, `input >>`).
fn strip_chevron_form<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = strip_keyword(line, keyword)?;
    let rest = rest.trim_start();
    let payload = rest.strip_prefix(">>")?;
    Some(payload.trim())
}

/// Keyword followed by whitespace (or end of line).
fn strip_keyword_word<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = strip_keyword(line, keyword)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

fn first_word_is(line: &str, keyword: &str) -> bool {
    match strip_keyword(line, keyword) {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', '\t', '(']),
        None => false,
    }
}

fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        line.get(keyword.len()..)
    } else {
        None
    }
}
