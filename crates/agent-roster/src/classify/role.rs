use super::{Cond, Rule, first_match};
use crate::model::Role;

use Cond::{All, Any, Has};

/// Role rules in precedence order. Anything unmatched is a [`Role::Specialist`].
pub const ROLE_RULES: &[Rule<Role>] = &[
    // backend first: infra docs often talk about "orchestration"
    Rule {
        when: All(&[Has("backend"), Any(&[Has("api"), Has("database")])]),
        label: Role::Executor,
    },
    Rule {
        when: Any(&[Has("code review"), Has("reviewer")]),
        label: Role::Reviewer,
    },
    Rule {
        when: Any(&[Has("testing"), Has("qa")]),
        label: Role::Executor,
    },
    Rule {
        when: Any(&[All(&[Has("orchestrat"), Has("multi")]), Has("coordination")]),
        label: Role::Orchestrator,
    },
    Rule {
        when: All(&[Has("architect"), Any(&[Has("story"), Has("world")])]),
        label: Role::Orchestrator,
    },
    Rule {
        when: Any(&[Has("editor"), Has("critic")]),
        label: Role::Reviewer,
    },
    Rule {
        when: Any(&[Has("frontend"), Has("ui"), Has("interface")]),
        label: Role::Specialist,
    },
    Rule {
        when: Any(&[Has("prose"), Has("stylist")]),
        label: Role::Specialist,
    },
    Rule {
        when: Any(&[Has("worldbuild"), Has("psycholog"), Has("character")]),
        label: Role::Specialist,
    },
    Rule {
        when: Any(&[Has("monitor"), Has("watch"), Has("observe")]),
        label: Role::Monitor,
    },
    Rule {
        when: Any(&[Has("bridge"), Has("connect")]),
        label: Role::Bridge,
    },
];

/// Classify a soul document by keyword. Case-insensitive.
pub fn classify_role(text: &str) -> Role {
    let lower = text.to_lowercase();
    first_match(ROLE_RULES, &lower).unwrap_or(Role::Specialist)
}
