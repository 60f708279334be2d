//! Variable substitution.
//!
//! `%NAME%` references are textually replaced before a line is echoed or
//! interpreted. Unset and unknown names become the empty string; a `%`
//! that does not open a well-formed reference is left alone.

use lazy_static::lazy_static;
use regex_lite::Regex;

use super::types::ExecContext;

lazy_static! {
    static ref VAR_REF: Regex = Regex::new(r"%([A-Za-z_][A-Za-z0-9_]*)%").unwrap();
}

/// Replace every `%NAME%` reference in `line` with the variable's current
/// text value.
pub fn substitute_vars(line: &str, ctx: &ExecContext) -> String {
    let mut result = String::with_capacity(line.len());
    let mut last = 0;
    for matched in VAR_REF.find_iter(line) {
        // The reference is %NAME%; the name sits inside the sigils.
        let name = &line[matched.start() + 1..matched.end() - 1];
        result.push_str(&line[last..matched.start()]);
        if let Some(Some(value)) = ctx.lookup(name) {
            result.push_str(value);
        }
        last = matched.end();
    }
    result.push_str(&line[last..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with(pairs: &[(&str, &str)]) -> ExecContext {
        let mut ctx = ExecContext::new();
        for (name, value) in pairs {
            ctx.assign(name, *value);
        }
        ctx
    }

    #[test]
    fn test_substitutes_known_variable() {
        let ctx = ctx_with(&[("NAME", "world")]);
        assert_eq!(substitute_vars("hello %NAME%!", &ctx), "hello world!");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let ctx = ctx_with(&[("NAME", "world")]);
        assert_eq!(substitute_vars("%name% %NaMe%", &ctx), "world world");
    }

    #[test]
    fn test_unknown_and_unset_become_empty() {
        let mut ctx = ExecContext::new();
        ctx.declare("X");
        assert_eq!(substitute_vars("[%X%][%GHOST%]", &ctx), "[][]");
    }

    #[test]
    fn test_stray_percent_left_alone() {
        let ctx = ExecContext::new();
        assert_eq!(substitute_vars("100% done", &ctx), "100% done");
        assert_eq!(substitute_vars("%%", &ctx), "%%");
    }

    #[test]
    fn test_multiple_references() {
        let ctx = ctx_with(&[("A", "1"), ("B", "2")]);
        assert_eq!(substitute_vars("%A%+%B%=%C%", &ctx), "1+2=");
    }
}
