//! Workflow metadata.

use crate::text::{Keywords, Text};

/// A multi-agent research workflow listed in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workflow {
    pub id: &'static str,
    pub title: Text,
    pub description: Text,
    pub keywords: Keywords,
    /// Agent ids participating, in execution order.
    pub agents: &'static [&'static str],
}

impl Workflow {
    pub fn href(&self) -> String {
        format!("/workflows/{}", self.id)
    }
}

pub static WORKFLOWS: &[Workflow] = &[
    Workflow {
        id: "meta-analysis",
        title: Text::new("Meta-Analysis", "메타분석"),
        description: Text::new(
            "From search strategy to pooled estimate: literature scouting, effect size extraction, pooling and bias checks.",
            "검색 전략부터 통합 추정치까지: 문헌 탐색, 효과크기 추출, 통합, 비뚤림 점검.",
        ),
        keywords: Keywords::new(
            &["meta-analysis", "pooling", "effect size", "forest plot"],
            &["메타분석", "통합", "효과크기", "숲 그림"],
        ),
        agents: &["B1", "B3", "C5", "C6", "E5"],
    },
    Workflow {
        id: "systematic-review",
        title: Text::new("Systematic Review", "체계적 문헌고찰"),
        description: Text::new(
            "Automated retrieval, screening and synthesis following PRISMA 2020.",
            "PRISMA 2020에 따른 자동화된 검색, 선별, 종합.",
        ),
        keywords: Keywords::new(
            &["systematic review", "PRISMA", "screening", "synthesis"],
            &["체계적 문헌고찰", "PRISMA", "선별", "종합"],
        ),
        agents: &["I0", "I1", "I2", "I3", "B2"],
    },
    Workflow {
        id: "qualitative-study",
        title: Text::new("Qualitative Study", "질적 연구"),
        description: Text::new(
            "Design, interview and code a qualitative study with trustworthiness checks.",
            "신뢰성 점검과 함께 질적 연구를 설계하고 면담하며 코딩합니다.",
        ),
        keywords: Keywords::new(
            &["qualitative", "interviews", "thematic analysis", "trustworthiness"],
            &["질적 연구", "면담", "주제 분석", "신뢰성"],
        ),
        agents: &["C2", "D2", "E2", "F4"],
    },
    Workflow {
        id: "mixed-methods",
        title: Text::new("Mixed Methods Study", "혼합방법 연구"),
        description: Text::new(
            "Plan both strands, collect data and integrate findings in a joint display.",
            "두 연구 가닥을 계획하고 자료를 수집하여 통합 표시로 결과를 통합합니다.",
        ),
        keywords: Keywords::new(
            &["mixed methods", "integration", "joint display"],
            &["혼합방법", "통합", "통합 표시"],
        ),
        agents: &["C3", "D1", "E3"],
    },
    Workflow {
        id: "manuscript-preparation",
        title: Text::new("Manuscript Preparation", "원고 준비"),
        description: Text::new(
            "Check consistency and reporting standards, pick a journal and polish the prose.",
            "일관성과 보고 기준을 점검하고 학술지를 고른 뒤 문장을 다듬습니다.",
        ),
        keywords: Keywords::new(
            &["manuscript", "writing", "journal", "submission"],
            &["원고", "글쓰기", "학술지", "투고"],
        ),
        agents: &["F1", "F2", "G1", "G5", "G6"],
    },
];
