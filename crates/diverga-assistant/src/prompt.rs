//! Prompt construction and reply post-processing.

use diverga_catalog::agent_by_id;

use crate::AssistantRequest;

const T_SCORE_MARKER: &str = "t-score:";

/// Build the system prompt for a request.
///
/// Known agents are introduced by name and description; unknown ids get a
/// generic research assistant persona.
pub fn build_system_prompt(request: &AssistantRequest) -> String {
    let persona = match agent_by_id(&request.agent_id) {
        Some(agent) => format!(
            "You are {} ({}), a Diverga research agent. {}",
            agent.name.en, agent.id, agent.description.en
        ),
        None => "You are a Diverga research assistant.".to_string(),
    };

    let command = if request.command.trim().is_empty() {
        "help".to_string()
    } else {
        request.command.trim().to_string()
    };

    format!(
        r#"{persona}

The researcher invoked the command: {command}

Guidelines:
- Offer at least one option beyond the most typical answer a model would give
- Keep the answer concise and actionable
- Reply in the language the researcher wrote in
- End with a final line "T-Score: <0.00-1.00>" rating how typical your main recommendation is (1.00 = most typical)"#
    )
}

/// Extract the T-Score from the last `T-Score:` line of a reply.
///
/// Values are clamped to [0, 1]; a missing or unparseable marker gives None.
pub fn parse_t_score(text: &str) -> Option<f64> {
    text.lines().rev().find_map(|line| {
        let lower = line.to_ascii_lowercase();
        let start = lower.find(T_SCORE_MARKER)? + T_SCORE_MARKER.len();
        let value: String = line[start..]
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let score: f64 = value.parse().ok()?;
        score.is_finite().then(|| score.clamp(0.0, 1.0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_known_agent() {
        let request = AssistantRequest::new("refine", "AI tutors", "a1");
        let prompt = build_system_prompt(&request);
        assert!(prompt.contains("Research Question Refiner (A1)"));
        assert!(prompt.contains("command: refine"));
        assert!(prompt.contains("T-Score"));
    }

    #[test]
    fn test_prompt_unknown_agent() {
        let request = AssistantRequest::new("", "hello", "ZZ");
        let prompt = build_system_prompt(&request);
        assert!(prompt.starts_with("You are a Diverga research assistant."));
        assert!(prompt.contains("command: help"));
    }

    #[test]
    fn test_parse_t_score() {
        let reply = "Option A\nOption B\n\nT-Score: 0.35";
        assert_eq!(parse_t_score(reply), Some(0.35));
    }

    #[test]
    fn test_parse_t_score_markdown_and_case() {
        let reply = "Answer\n**t-score: 0.8**";
        assert_eq!(parse_t_score(reply), Some(0.8));
    }

    #[test]
    fn test_parse_t_score_uses_last_marker() {
        let reply = "T-Score: 0.9 is too typical\nRevised\nT-Score: 0.4";
        assert_eq!(parse_t_score(reply), Some(0.4));
    }

    #[test]
    fn test_parse_t_score_clamps() {
        assert_eq!(parse_t_score("T-Score: 7"), Some(1.0));
    }

    #[test]
    fn test_parse_t_score_missing() {
        assert_eq!(parse_t_score("no score here"), None);
        assert_eq!(parse_t_score("T-Score: n/a"), None);
    }
}
