//! Documentation page metadata.

use crate::text::{Keywords, Text};

/// A documentation page listed in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocPage {
    pub slug: &'static str,
    /// Docs section, used as the search result category.
    pub section: &'static str,
    pub title: Text,
    pub description: Text,
    pub keywords: Keywords,
}

impl DocPage {
    pub fn href(&self) -> String {
        format!("/docs/{}", self.slug)
    }
}

pub static DOC_PAGES: &[DocPage] = &[
    DocPage {
        slug: "getting-started",
        section: "guide",
        title: Text::new("Getting Started", "시작하기"),
        description: Text::new(
            "Install the plugin and run your first research agent session.",
            "플러그인을 설치하고 첫 연구 에이전트 세션을 실행합니다.",
        ),
        keywords: Keywords::new(
            &["install", "setup", "quickstart", "first session"],
            &["설치", "설정", "빠른 시작", "첫 세션"],
        ),
    },
    DocPage {
        slug: "vs-methodology",
        section: "concepts",
        title: Text::new("VS Methodology", "VS 방법론"),
        description: Text::new(
            "How Verbalized Sampling steers agents away from the most typical, mode-collapsed answers.",
            "언어화 샘플링이 에이전트를 가장 전형적인 답변에서 벗어나게 하는 방법을 설명합니다.",
        ),
        keywords: Keywords::new(
            &["verbalized sampling", "mode collapse", "creativity", "typicality"],
            &["언어화 샘플링", "모드 붕괴", "창의성", "전형성"],
        ),
    },
    DocPage {
        slug: "t-score",
        section: "concepts",
        title: Text::new("T-Score", "T-점수"),
        description: Text::new(
            "Reading the typicality score attached to every agent recommendation.",
            "모든 에이전트 추천에 붙는 전형성 점수를 읽는 방법을 설명합니다.",
        ),
        keywords: Keywords::new(
            &["typicality", "score", "recommendation", "divergence"],
            &["전형성", "점수", "추천", "발산"],
        ),
    },
    DocPage {
        slug: "human-checkpoints",
        section: "concepts",
        title: Text::new("Human Checkpoints", "인간 체크포인트"),
        description: Text::new(
            "Where agents stop and wait for researcher approval before continuing.",
            "에이전트가 멈추고 연구자의 승인을 기다리는 지점을 설명합니다.",
        ),
        keywords: Keywords::new(
            &["checkpoint", "approval", "human in the loop", "decision"],
            &["체크포인트", "승인", "인간 참여", "의사결정"],
        ),
    },
    DocPage {
        slug: "agent-catalog",
        section: "reference",
        title: Text::new("Agent Catalog", "에이전트 카탈로그"),
        description: Text::new(
            "Reference for every research agent, grouped by category.",
            "모든 연구 에이전트를 카테고리별로 정리한 참고 문서입니다.",
        ),
        keywords: Keywords::new(
            &["agents", "reference", "categories", "catalog"],
            &["에이전트", "참고", "카테고리", "카탈로그"],
        ),
    },
    DocPage {
        slug: "configuration",
        section: "reference",
        title: Text::new("Configuration", "구성"),
        description: Text::new(
            "Project settings, model selection and language preferences.",
            "프로젝트 설정, 모델 선택, 언어 환경을 설명합니다.",
        ),
        keywords: Keywords::new(
            &["settings", "config", "model", "language"],
            &["설정", "구성", "모델", "언어"],
        ),
    },
    DocPage {
        slug: "memory-system",
        section: "concepts",
        title: Text::new("Research Memory", "연구 기억"),
        description: Text::new(
            "How decisions and context persist across sessions of a project.",
            "프로젝트 세션 사이에 결정과 맥락이 유지되는 방식을 설명합니다.",
        ),
        keywords: Keywords::new(
            &["memory", "context", "sessions", "decisions"],
            &["기억", "맥락", "세션", "결정"],
        ),
    },
    DocPage {
        slug: "faq",
        section: "guide",
        title: Text::new("FAQ", "자주 묻는 질문"),
        description: Text::new(
            "Answers to common questions about agents, pricing and data handling.",
            "에이전트, 요금, 데이터 처리에 관한 자주 묻는 질문에 답합니다.",
        ),
        keywords: Keywords::new(
            &["questions", "help", "troubleshooting", "support"],
            &["질문", "도움말", "문제 해결", "지원"],
        ),
    },
];
