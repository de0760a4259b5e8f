//! Naming helpers.

/// Fallback display name derived from a workspace directory name:
/// dashes become spaces and every alphabetic run is title-cased
/// (`workspace-code-bob` → `Workspace Code Bob`).
pub fn display_name_from_workspace(workspace: &str) -> String {
    let mut out = String::with_capacity(workspace.len());
    let mut prev_alpha = false;
    for ch in workspace.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_become_title_cased_words() {
        assert_eq!(
            display_name_from_workspace("workspace-code-bob"),
            "Workspace Code Bob"
        );
    }

    #[test]
    fn digits_split_alphabetic_runs() {
        assert_eq!(display_name_from_workspace("agent2x-QA"), "Agent2X Qa");
    }

    #[test]
    fn non_ascii_letters_are_cased() {
        assert_eq!(display_name_from_workspace("élodie-writer"), "Élodie Writer");
    }
}
