//! Canned demo assistant.

use async_trait::async_trait;

use diverga_catalog::agent_by_id;

use super::{Assistant, AssistantError, AssistantReply, AssistantRequest};

/// Model name reported for canned replies.
pub const DEMO_MODEL: &str = "demo";

struct DemoScript {
    agent_id: &'static str,
    response: &'static str,
    t_score: f64,
}

const DEMO_SCRIPTS: &[DemoScript] = &[
    DemoScript {
        agent_id: "A1",
        response: "[Demo] Research Question Refiner\n\n\
Your idea is broad. Three directions, from most to least typical:\n\n\
1. (T=0.72) \"Does AI tutoring improve math achievement in middle school?\"\n\
2. (T=0.45) \"How does adaptive feedback timing from AI tutors affect persistence among low-achieving students?\"\n\
3. (T=0.28) \"When do students choose to ignore AI tutor hints, and what does that reveal about their self-regulation?\"\n\n\
Recommendation: option 2 keeps a clear PICO structure while avoiding the most saturated framing.\n\n\
T-Score: 0.45",
        t_score: 0.45,
    },
    DemoScript {
        agent_id: "A2",
        response: "[Demo] Theoretical Framework Architect\n\n\
The default choice here would be the Technology Acceptance Model (T=0.85).\n\
Less typical lenses that fit your question:\n\n\
- Self-Determination Theory (T=0.52): autonomy and competence as mechanisms\n\
- Cognitive Load Theory (T=0.41): explains when AI help becomes a burden\n\
- Activity Theory (T=0.23): treats the AI as a mediating tool in a learning system\n\n\
T-Score: 0.41",
        t_score: 0.41,
    },
    DemoScript {
        agent_id: "A3",
        response: "[Demo] Devil's Advocate\n\n\
Strongest objections a reviewer would raise:\n\n\
1. Novelty effect: gains may fade once the AI tool is no longer new.\n\
2. Selection: motivated teachers may be the ones adopting the tool.\n\
3. Measurement: a short post-test cannot capture transfer.\n\n\
Address 1 with a delayed post-test and 2 with a randomized or matched design.\n\n\
T-Score: 0.38",
        t_score: 0.38,
    },
    DemoScript {
        agent_id: "C5",
        response: "[Demo] Meta-Analysis Master\n\n\
Plan for pooling 24 studies:\n\n\
- Effect size: Hedges' g with small-sample correction\n\
- Model: random effects (REML), Knapp-Hartung adjustment\n\
- Heterogeneity: report tau^2, I^2 and a prediction interval\n\
- Bias: funnel plot plus PET-PEESE instead of trim-and-fill alone\n\n\
T-Score: 0.33",
        t_score: 0.33,
    },
    DemoScript {
        agent_id: "B1",
        response: "[Demo] Systematic Literature Scout\n\n\
Draft search string (Scopus):\n\n\
TITLE-ABS-KEY((\"artificial intelligence\" OR \"intelligent tutoring\") AND (\"learning outcome*\" OR achievement))\n\n\
Add ERIC and Web of Science, and record every run for the PRISMA flow diagram.\n\n\
T-Score: 0.55",
        t_score: 0.55,
    },
];

/// Canned reply for an agent id, if one is scripted.
///
/// Lookup ignores case.
pub fn demo_response(agent_id: &str) -> Option<(&'static str, f64)> {
    let agent_id = agent_id.trim();
    DEMO_SCRIPTS
        .iter()
        .find(|s| s.agent_id.eq_ignore_ascii_case(agent_id))
        .map(|s| (s.response, s.t_score))
}

fn generic_response(agent_id: &str) -> String {
    match agent_by_id(agent_id) {
        Some(agent) => format!(
            "[Demo] {}\n\n{}\n\nThis is a demo response. Configure an API key to get live answers from this agent.\n\nT-Score: 0.50",
            agent.name.en, agent.description.en
        ),
        None => "[Demo] Diverga\n\nThis is a demo response. Configure an API key to get live answers.\n\nT-Score: 0.50"
            .to_string(),
    }
}

/// Assistant that answers from canned scripts without network access.
#[derive(Debug, Default, Clone)]
pub struct DemoAssistant;

impl DemoAssistant {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Assistant for DemoAssistant {
    async fn respond(&self, request: &AssistantRequest) -> Result<AssistantReply, AssistantError> {
        let (response, t_score) = match demo_response(&request.agent_id) {
            Some((text, t_score)) => (text.to_string(), t_score),
            None => (generic_response(&request.agent_id), 0.5),
        };

        Ok(AssistantReply {
            response,
            agent_id: request.agent_id.clone(),
            model: DEMO_MODEL.to_string(),
            t_score: Some(t_score),
            demo: true,
        })
    }

    fn is_demo(&self) -> bool {
        true
    }
}
