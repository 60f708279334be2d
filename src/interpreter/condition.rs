//! Condition evaluation for `if` lines.
//!
//! A condition is a two-operand comparison. Each side is resolved as a
//! variable name first and falls back to the literal text when no such
//! variable was declared. When both resolved operands parse as numbers
//! the comparison is numeric, otherwise a string comparison; equality is
//! loose, never type-strict. Malformed conditions are false, never fatal.

use super::types::ExecContext;

/// Comparison operators, longest spelling first so `<=` is never split
/// into `<` and a stray `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
        }
    }
}

const OPS: [CompareOp; 6] = [
    CompareOp::Eq,
    CompareOp::Ne,
    CompareOp::Le,
    CompareOp::Ge,
    CompareOp::Lt,
    CompareOp::Gt,
];

/// Split a condition on its first operator occurrence.
fn split_condition(condition: &str) -> Option<(&str, CompareOp, &str)> {
    let mut best: Option<(usize, CompareOp)> = None;
    for op in OPS {
        if let Some(pos) = condition.find(op.as_str()) {
            let better = match best {
                None => true,
                // Two-char operators win over one-char at the same spot;
                // OPS is ordered so the first hit at a position stands.
                Some((best_pos, _)) => pos < best_pos,
            };
            if better {
                best = Some((pos, op));
            }
        }
    }
    let (pos, op) = best?;
    let left = &condition[..pos];
    let right = &condition[pos + op.as_str().len()..];
    Some((left, op, right))
}

/// Resolve one operand: variable value if declared (unset resolves to the
/// empty string), otherwise the literal text itself.
fn resolve_operand(raw: &str, ctx: &ExecContext) -> String {
    let trimmed = raw.trim();
    match ctx.lookup(trimmed) {
        Some(Some(value)) => value.to_string(),
        Some(None) => String::new(),
        None => trimmed.to_string(),
    }
}

/// Evaluate a condition string against the run's variables.
pub fn evaluate_condition(condition: &str, ctx: &ExecContext) -> bool {
    let Some((left_raw, op, right_raw)) = split_condition(condition) else {
        return false;
    };
    let left = resolve_operand(left_raw, ctx);
    let right = resolve_operand(right_raw, ctx);

    if let (Ok(l), Ok(r)) = (left.parse::<f64>(), right.parse::<f64>()) {
        return match op {
            CompareOp::Eq => l == r,
            CompareOp::Ne => l != r,
            CompareOp::Le => l <= r,
            CompareOp::Ge => l >= r,
            CompareOp::Lt => l < r,
            CompareOp::Gt => l > r,
        };
    }

    match op {
        CompareOp::Eq => left == right,
        CompareOp::Ne => left != right,
        CompareOp::Le => left <= right,
        CompareOp::Ge => left >= right,
        CompareOp::Lt => left < right,
        CompareOp::Gt => left > right,
    }
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
    fn test_split_prefers_two_char_ops() {
        let (l, op, r) = split_condition("A <= B").unwrap();
        assert_eq!(op, CompareOp::Le);
        assert_eq!(l.trim(), "A");
        assert_eq!(r.trim(), "B");

        let (_, op, _) = split_condition("A != B").unwrap();
        assert_eq!(op, CompareOp::Ne);
    }

    #[test]
    fn test_variable_operands() {
        let ctx = ctx_with(&[("X", "1")]);
        assert!(evaluate_condition("X == 1", &ctx));
        assert!(!evaluate_condition("X == 2", &ctx));
        assert!(evaluate_condition("x == 1", &ctx));
    }

    #[test]
    fn test_undeclared_falls_back_to_literal() {
        let ctx = ExecContext::new();
        assert!(evaluate_condition("abc == abc", &ctx));
        assert!(!evaluate_condition("abc == def", &ctx));
    }

    #[test]
    fn test_unset_variable_compares_as_empty() {
        let mut ctx = ExecContext::new();
        ctx.declare("X");
        // Right side is an undeclared name, so it stays literal.
        assert!(!evaluate_condition("X == anything", &ctx));
        assert!(evaluate_condition("X != anything", &ctx));
    }

    #[test]
    fn test_numeric_comparison_when_both_numeric() {
        let ctx = ctx_with(&[("N", "10")]);
        assert!(evaluate_condition("N > 9", &ctx));
        assert!(evaluate_condition("N >= 10", &ctx));
        assert!(evaluate_condition("N < 11", &ctx));
        assert!(evaluate_condition("N <= 10", &ctx));
        assert!(evaluate_condition("2 < 10", &ctx));
    }

    #[test]
    fn test_loose_numeric_equality() {
        let ctx = ctx_with(&[("X", "1.0")]);
        assert!(evaluate_condition("X == 1", &ctx));
    }

    #[test]
    fn test_string_comparison_when_not_numeric() {
        let ctx = ctx_with(&[("NAME", "bob")]);
        assert!(evaluate_condition("NAME == bob", &ctx));
        // Lexicographic: "2" > "10" as strings
        assert!(evaluate_condition("b2 > b10", &ctx));
    }

    #[test]
    fn test_malformed_condition_is_false() {
        let ctx = ExecContext::new();
        assert!(!evaluate_condition("no operator here", &ctx));
        assert!(!evaluate_condition("", &ctx));
    }
}
