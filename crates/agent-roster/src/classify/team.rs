use super::{Cond, Rule, first_match};
use crate::model::Team;

use Cond::{Any, Has};

/// Team rules in precedence order. Anything unmatched is [`Team::General`].
pub const TEAM_RULES: &[Rule<Team>] = &[
    Rule {
        when: Any(&[Has("project-novel"), Has("writing")]),
        label: Team::Writing,
    },
    Rule {
        when: Has("orchestr"),
        label: Team::Actionneurs,
    },
    Rule {
        when: Any(&[
            Has("code"),
            Has("frontend"),
            Has("ui"),
            Has("qa"),
            Has("test"),
            Has("backend"),
        ]),
        label: Team::Code,
    },
];

/// Classify a workspace directory name into a team.
pub fn classify_team(workspace_name: &str) -> Team {
    let lower = workspace_name.to_lowercase();
    first_match(TEAM_RULES, &lower).unwrap_or(Team::General)
}
