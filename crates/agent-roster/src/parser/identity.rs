//! Parser for `IDENTITY.md`: `**Label:** value` lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::DocumentParser;

/// Display attributes declared in an identity document. No defaults are
/// filled in here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
    pub name: Option<String>,
    pub creature: Option<String>,
    pub vibe: Option<String>,
    pub emoji: Option<String>,
    pub avatar: Option<String>,
}

impl IdentityFields {
    /// First comma-separated token of `vibe`, trimmed and lowercased.
    pub fn vibe_keyword(&self) -> Option<String> {
        let vibe = self.vibe.as_deref()?;
        let first = vibe.split(',').next().unwrap_or("").trim().to_lowercase();
        if first.is_empty() { None } else { Some(first) }
    }
}

fn label_pattern(label: &str) -> Regex {
    // Label and value on the same line; `.` does not cross newlines.
    Regex::new(&format!(r"(?i)\*\*{label}:\*\*[ \t]*(.+)")).expect("valid label pattern")
}

static NAME: Lazy<Regex> = Lazy::new(|| label_pattern("Name"));
static CREATURE: Lazy<Regex> = Lazy::new(|| label_pattern("Creature"));
static VIBE: Lazy<Regex> = Lazy::new(|| label_pattern("Vibe"));
static EMOJI: Lazy<Regex> = Lazy::new(|| label_pattern("Emoji"));
static AVATAR: Lazy<Regex> = Lazy::new(|| label_pattern("Avatar"));

fn capture(re: &Regex, content: &str) -> Option<String> {
    let value = re.captures(content)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parser for identity documents.
pub struct IdentityParser;

impl DocumentParser for IdentityParser {
    type Output = IdentityFields;

    const FILE_NAME: &'static str = "IDENTITY.md";

    fn parse(content: &str) -> IdentityFields {
        IdentityFields {
            name: capture(&NAME, content),
            creature: capture(&CREATURE, content),
            vibe: capture(&VIBE, content),
            emoji: capture(&EMOJI, content),
            avatar: capture(&AVATAR, content),
        }
    }
}
