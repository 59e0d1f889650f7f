//! Plain-text rendering of turns and transcripts.

use std::fmt::Write;

use chatbot_ai::{LookupResult, Role, Turn, TurnOutcome};

pub const TITLE: &str = "Chatbot AI Project";
pub const WELCOME: &str = "Welcome to the chatbot! Ask me anything.";
pub const HINT: &str = "Type /history to replay the conversation, /quit to leave.";

pub fn banner() -> String {
    format!("{TITLE}\n{WELCOME}\n{HINT}\n")
}

fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
    }
}

/// Render one turn's outcome. Recommendation sections are always shown
/// when `recommendations` is set, even if a lookup came back empty.
pub fn render_outcome(outcome: &TurnOutcome, recommendations: bool) -> String {
    let mut out = String::new();
    let label = if outcome.degraded {
        "assistant [degraded]"
    } else {
        "assistant"
    };
    let _ = writeln!(out, "{label}: {}", outcome.assistant_text);

    if recommendations {
        render_section(&mut out, "Recommended videos", &outcome.videos);
        render_section(&mut out, "Recommended courses", &outcome.courses);
    }
    out
}

fn render_section(out: &mut String, heading: &str, results: &[LookupResult]) {
    let _ = writeln!(out, "\n{heading}:");
    if results.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} - {}", i + 1, result.title, result.url);
    }
}

pub fn render_transcript(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return "(no messages yet)\n".to_string();
    }
    let mut out = String::new();
    for turn in turns {
        let _ = writeln!(out, "{}: {}", speaker(turn.role), turn.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(degraded: bool, videos: Vec<LookupResult>) -> TurnOutcome {
        TurnOutcome {
            assistant_text: "Recursion is...".into(),
            degraded,
            videos,
            courses: vec![LookupResult {
                title: "Learn recursion on edX".into(),
                url: "https://www.edx.org".into(),
            }],
        }
    }

    #[test]
    fn banner_mentions_title_and_welcome() {
        let banner = banner();
        assert!(banner.starts_with(TITLE));
        assert!(banner.contains(WELCOME));
    }

    #[test]
    fn renders_answer_and_numbered_links() {
        let videos = vec![LookupResult {
            title: "Recursion in 100 seconds".into(),
            url: "https://www.youtube.com/watch?v=abc".into(),
        }];
        let text = render_outcome(&outcome(false, videos), true);

        assert!(text.starts_with("assistant: Recursion is...\n"));
        assert!(text.contains(
            "Recommended videos:\n  1. Recursion in 100 seconds - https://www.youtube.com/watch?v=abc\n"
        ));
        assert!(text.contains("Recommended courses:\n  1. Learn recursion on edX - https://www.edx.org\n"));
    }

    #[test]
    fn empty_lookup_renders_empty_section() {
        let text = render_outcome(&outcome(false, vec![]), true);
        assert!(text.contains("Recommended videos:\n  (none)\n"));
    }

    #[test]
    fn degraded_turn_is_marked() {
        let text = render_outcome(&outcome(true, vec![]), true);
        assert!(text.starts_with("assistant [degraded]: "));
    }

    #[test]
    fn recommendations_can_be_hidden() {
        let text = render_outcome(&outcome(false, vec![]), false);
        assert_eq!(text, "assistant: Recursion is...\n");
    }

    #[test]
    fn transcript_lists_turns_in_order() {
        let turns = vec![Turn::user("hi"), Turn::assistant("hello")];
        assert_eq!(render_transcript(&turns), "you: hi\nassistant: hello\n");
        assert_eq!(render_transcript(&[]), "(no messages yet)\n");
    }
}
