//! Block delimiter matching.
//!
//! Conditional blocks are delimited by a `{` on the `if`/`else` header
//! line and a matching `}`. Matching runs over the raw (unsubstituted)
//! line list, counting braces in character order within each line so
//! that both the two-line form (`}` then `else {`) and the combined
//! `} else {` form nest correctly.

/// Scan forward from `start` (the first line inside an already-open
/// block) for the line holding the matching `}`.
///
/// Returns the line index and whether that same line reopens an else
/// block after the close (`} else {`). `None` means the script ends
/// before the block closes; callers treat that as "skip to end".
pub fn find_block_close(lines: &[&str], start: usize) -> Option<(usize, bool)> {
    let mut depth = 1i32;
    for (offset, raw) in lines[start.min(lines.len())..].iter().enumerate() {
        for (pos, ch) in raw.char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let rest = &raw[pos + ch.len_utf8()..];
                        return Some((start + offset, opens_else(rest)));
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// True when a raw line opens an `else` block (`else {` on its own).
pub fn is_else_open(line: &str) -> bool {
    opens_else(line)
}

/// True when a raw line closes a block, either bare `}` or `} else {`.
/// Returns `None` for lines that are not closers; `Some(true)` when the
/// closer reopens an else block on the same line.
pub fn parse_block_close(line: &str) -> Option<bool> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('}')?;
    if rest.trim().is_empty() {
        return Some(false);
    }
    if opens_else(rest) {
        return Some(true);
    }
    None
}

fn opens_else(text: &str) -> bool {
    let trimmed = text.trim();
    let Some(after) = strip_keyword(trimmed, "else") else {
        return false;
    };
    after.trim() == "{"
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        text.get(keyword.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_block() {
        let lines = vec!["if (A == 1) {", "print >> hi", "}"];
        assert_eq!(find_block_close(&lines, 1), Some((2, false)));
    }

    #[test]
    fn test_nested_blocks() {
        let lines = vec![
            "if (A == 1) {",
            "if (B == 1) {",
            "print >> both",
            "}",
            "}",
        ];
        // Outer block: the inner if opens a level, so its close is line 4.
        assert_eq!(find_block_close(&lines, 1), Some((4, false)));
        // Inner block closes at line 3.
        assert_eq!(find_block_close(&lines, 2), Some((3, false)));
    }

    #[test]
    fn test_combined_close_and_else() {
        let lines = vec!["if (X == 1) {", "print >> yes", "} else {", "print >> no", "}"];
        assert_eq!(find_block_close(&lines, 1), Some((2, true)));
        // The else block itself closes at the final line.
        assert_eq!(find_block_close(&lines, 3), Some((4, false)));
    }

    #[test]
    fn test_two_line_else_form() {
        let lines = vec!["if (X == 1) {", "print >> yes", "}", "else {", "print >> no", "}"];
        assert_eq!(find_block_close(&lines, 1), Some((2, false)));
        assert!(is_else_open(lines[3]));
    }

    #[test]
    fn test_unmatched_returns_none() {
        let lines = vec!["if (A == 1) {", "print >> hi"];
        assert_eq!(find_block_close(&lines, 1), None);
    }

    #[test]
    fn test_parse_block_close() {
        assert_eq!(parse_block_close("}"), Some(false));
        assert_eq!(parse_block_close("  }  "), Some(false));
        assert_eq!(parse_block_close("} else {"), Some(true));
        assert_eq!(parse_block_close("} ELSE {"), Some(true));
        assert_eq!(parse_block_close("print >> }"), None);
        assert_eq!(parse_block_close("else {"), None);
    }

    #[test]
    fn test_is_else_open() {
        assert!(is_else_open("else {"));
        assert!(is_else_open("  ELSE {  "));
        assert!(!is_else_open("else"));
        assert!(!is_else_open("}"));
    }
}
