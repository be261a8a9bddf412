//! Splitting reaction text into display segments.
//!
//! The oracle is prompted to emit one `Name: message` line per speaker.
//! This is effectively part of the wire format, so the split rules here
//! must track the prompt in `prompt.rs`. A line-leading label is `name:`
//! or `[name]:`; anything else, including malformed labels, renders as an
//! unlabeled narrative line — never an error.

/// One display segment of a reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionLine {
    /// The speaker, brackets stripped, if the line had a recognized label.
    pub speaker: Option<String>,
    /// The rest of the line.
    pub text: String,
}

impl ReactionLine {
    fn labeled(speaker: &str, text: &str) -> Self {
        Self {
            speaker: Some(speaker.to_string()),
            text: text.to_string(),
        }
    }

    fn narrative(text: &str) -> Self {
        Self {
            speaker: None,
            text: text.to_string(),
        }
    }
}

/// Split reaction text into per-line display segments.
pub fn split_reaction(text: &str) -> Vec<ReactionLine> {
    text.lines().map(split_line).collect()
}

fn split_line(line: &str) -> ReactionLine {
    let Some((label, rest)) = line.split_once(':') else {
        return ReactionLine::narrative(line);
    };
    match clean_label(label) {
        Some(speaker) => ReactionLine::labeled(&speaker, rest.trim_start()),
        None => ReactionLine::narrative(line),
    }
}

/// Validate and normalize a candidate label.
///
/// Accepts word characters, digits, and spaces, optionally wrapped in
/// brackets; requires at least one alphanumeric character.
fn clean_label(label: &str) -> Option<String> {
    let mut inner = label.trim();
    if let Some(stripped) = inner.strip_prefix('[') {
        inner = stripped;
    }
    if let Some(stripped) = inner.strip_suffix(']') {
        inner = stripped;
    }
    let inner = inner.trim();
    if !inner.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ' ') {
        return None;
    }
    if !inner.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(inner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_lines_split() {
        let lines = split_reaction("Follower69: No way!\nBrand Manager: This is a legal disaster.");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ReactionLine::labeled("Follower69", "No way!"));
        assert_eq!(
            lines[1],
            ReactionLine::labeled("Brand Manager", "This is a legal disaster.")
        );
    }

    #[test]
    fn bracketed_labels_are_stripped() {
        let lines = split_reaction("[The Boss]: We should talk.");
        assert_eq!(lines[0], ReactionLine::labeled("The Boss", "We should talk."));
    }

    #[test]
    fn plain_lines_are_narrative() {
        let lines = split_reaction("The group chat goes silent.");
        assert_eq!(lines[0].speaker, None);
        assert_eq!(lines[0].text, "The group chat goes silent.");
    }

    #[test]
    fn url_like_lines_are_not_labels() {
        // "https" up to the colon is alphanumeric, so it does parse as a
        // label; a path with slashes after a colon mid-sentence does not.
        let lines = split_reaction("see the thread at example.com/receipts: wild stuff");
        assert_eq!(lines[0].speaker, None);
    }

    #[test]
    fn malformed_labels_degrade_to_narrative() {
        for line in [":::", ": no speaker", "!!!: yelling", "[ ]: empty"] {
            let lines = split_reaction(line);
            assert_eq!(lines[0].speaker, None, "line {line:?} should be narrative");
        }
    }

    #[test]
    fn empty_lines_are_preserved() {
        let lines = split_reaction("Ex: u up?\n\nEx: hello??");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], ReactionLine::narrative(""));
    }

    #[test]
    fn colon_only_in_message_body_stays_with_text() {
        let lines = split_reaction("Boss: meeting at 10:30");
        assert_eq!(lines[0], ReactionLine::labeled("Boss", "meeting at 10:30"));
    }
}
