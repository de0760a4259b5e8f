//! Ordered keyword rule tables.
//!
//! Each table is a list of `(condition, label)` pairs evaluated top to bottom
//! against lowercased text; the first matching rule decides the label.
//! Vocabulary overlaps between rules (an infrastructure document mentioning
//! "orchestration", a workspace named `writing-qa`) are settled by position.

pub mod role;
pub mod team;

pub use role::{ROLE_RULES, classify_role};
pub use team::{TEAM_RULES, classify_team};

/// Keyword condition over lowercased text.
#[derive(Debug, Clone, Copy)]
pub enum Cond {
    /// Substring match.
    Has(&'static str),
    Any(&'static [Cond]),
    All(&'static [Cond]),
}

impl Cond {
    pub fn eval(&self, text: &str) -> bool {
        match self {
            Cond::Has(needle) => text.contains(needle),
            Cond::Any(conds) => conds.iter().any(|c| c.eval(text)),
            Cond::All(conds) => conds.iter().all(|c| c.eval(text)),
        }
    }
}

/// A single table row.
#[derive(Debug, Clone, Copy)]
pub struct Rule<L> {
    pub when: Cond,
    pub label: L,
}

/// Label of the first rule matching `text`, which must already be lowercased.
pub fn first_match<L: Copy>(rules: &[Rule<L>], text: &str) -> Option<L> {
    rules.iter().find(|r| r.when.eval(text)).map(|r| r.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_conditions() {
        let c = Cond::All(&[Cond::Has("a"), Cond::Any(&[Cond::Has("b"), Cond::Has("c")])]);
        assert!(c.eval("ac"));
        assert!(!c.eval("a"));
        assert!(!c.eval("bc"));
    }

    #[test]
    fn first_rule_wins() {
        let rules = [
            Rule { when: Cond::Has("x"), label: 1 },
            Rule { when: Cond::Has("x"), label: 2 },
        ];
        assert_eq!(first_match(&rules, "xx"), Some(1));
        assert_eq!(first_match(&rules, "yy"), None);
    }
}
