//! Parser for `SOUL.md`: a free-form behavioural description.

use super::DocumentParser;
use crate::classify::classify_role;
use crate::model::Role;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

pub const DEFAULT_DESCRIPTION: &str = "Agent OpenClaw";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoulFields {
    pub description: String,
    pub role: Role,
}

impl Default for SoulFields {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            role: Role::Specialist,
        }
    }
}

/// First non-blank line that is not a heading. A heading is a line whose
/// first byte is `#`; indented `#` lines count as text.
fn first_paragraph_line(content: &str) -> Option<&str> {
    content
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(str::trim)
        .find(|l| !l.is_empty())
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Parser for soul documents.
pub struct SoulParser;

impl DocumentParser for SoulParser {
    type Output = SoulFields;

    const FILE_NAME: &'static str = "SOUL.md";

    fn parse(content: &str) -> SoulFields {
        let description = first_paragraph_line(content)
            .map(|l| truncate_chars(l, DESCRIPTION_MAX_CHARS).to_string())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        SoulFields {
            description,
            role: classify_role(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_headings_and_blank_lines() {
        let content = "# Soul\n\n## Who I am\n\n  I review pull requests with care.  \nMore text.\n";
        let soul = SoulParser::parse(content);
        assert_eq!(soul.description, "I review pull requests with care.");
    }

    #[test]
    fn indented_hash_is_not_a_heading() {
        let soul = SoulParser::parse("# Title\n   # not a heading\n");
        assert_eq!(soul.description, "# not a heading");
    }

    #[test]
    fn heading_only_document_uses_default_description() {
        let soul = SoulParser::parse("# One\n## Two\n\n");
        assert_eq!(soul.description, DEFAULT_DESCRIPTION);
        assert_eq!(soul.role, Role::Specialist);
    }

    #[test]
    fn description_is_truncated_by_characters() {
        let line = "é".repeat(250);
        let soul = SoulParser::parse(&line);
        assert_eq!(soul.description.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(soul.description.chars().all(|c| c == 'é'));
    }

    #[test]
    fn description_length_boundary() {
        let exact = "a".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(SoulParser::parse(&exact).description, exact);

        let over = format!("{exact}b");
        assert_eq!(SoulParser::parse(&over).description, exact);
    }

    #[test]
    fn short_description_is_kept_whole() {
        assert_eq!(truncate_chars("abc", 200), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn role_uses_whole_document() {
        let content = "# Soul\n\nA calm presence.\n\n## Focus\nCode review of every change.\n";
        let soul = SoulParser::parse(content);
        assert_eq!(soul.description, "A calm presence.");
        assert_eq!(soul.role, Role::Reviewer);
    }

    #[test]
    fn missing_document_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SoulParser::load(dir.path()).unwrap().is_none());
        assert_eq!(
            SoulFields::default(),
            SoulFields {
                description: "Agent OpenClaw".into(),
                role: Role::Specialist
            }
        );
    }
}
