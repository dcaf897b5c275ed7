//! Research agent registry.
//!
//! Agents are grouped into lettered categories; an agent id is the
//! category letter plus a sequence number (`A1`, `C5`, `I0`).

use crate::text::{Keywords, Text};

/// Agent category, identified by the letter prefix of agent ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentCategory {
    Foundation,
    Evidence,
    Design,
    Collection,
    Analysis,
    Quality,
    Communication,
    Specialized,
    SystematicReview,
}

impl AgentCategory {
    pub const ALL: [AgentCategory; 9] = [
        AgentCategory::Foundation,
        AgentCategory::Evidence,
        AgentCategory::Design,
        AgentCategory::Collection,
        AgentCategory::Analysis,
        AgentCategory::Quality,
        AgentCategory::Communication,
        AgentCategory::Specialized,
        AgentCategory::SystematicReview,
    ];

    /// URL-safe category slug, also used as the search result category.
    pub fn slug(&self) -> &'static str {
        match self {
            AgentCategory::Foundation => "foundation",
            AgentCategory::Evidence => "evidence",
            AgentCategory::Design => "design",
            AgentCategory::Collection => "collection",
            AgentCategory::Analysis => "analysis",
            AgentCategory::Quality => "quality",
            AgentCategory::Communication => "communication",
            AgentCategory::Specialized => "specialized",
            AgentCategory::SystematicReview => "systematic-review",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            AgentCategory::Foundation => 'A',
            AgentCategory::Evidence => 'B',
            AgentCategory::Design => 'C',
            AgentCategory::Collection => 'D',
            AgentCategory::Analysis => 'E',
            AgentCategory::Quality => 'F',
            AgentCategory::Communication => 'G',
            AgentCategory::Specialized => 'H',
            AgentCategory::SystematicReview => 'I',
        }
    }

    pub fn name(&self) -> Text {
        match self {
            AgentCategory::Foundation => Text::new("Research Foundation", "연구 기초"),
            AgentCategory::Evidence => Text::new("Literature & Evidence", "문헌 및 근거"),
            AgentCategory::Design => Text::new("Study Design & Meta-Analysis", "연구 설계 및 메타분석"),
            AgentCategory::Collection => Text::new("Data Collection", "자료 수집"),
            AgentCategory::Analysis => Text::new("Analysis", "분석"),
            AgentCategory::Quality => Text::new("Quality & Validation", "품질 및 검증"),
            AgentCategory::Communication => Text::new("Publication & Communication", "출판 및 소통"),
            AgentCategory::Specialized => Text::new("Specialized Methods", "특수 연구방법"),
            AgentCategory::SystematicReview => {
                Text::new("Systematic Review Automation", "체계적 문헌고찰 자동화")
            }
        }
    }

    /// Parse a category slug or letter, returning None for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|c| {
            c.slug().eq_ignore_ascii_case(s)
                || (s.len() == 1 && s.chars().all(|ch| ch.eq_ignore_ascii_case(&c.letter())))
        })
    }
}

/// A research agent as presented in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub id: &'static str,
    pub slug: &'static str,
    pub category: AgentCategory,
    pub name: Text,
    pub description: Text,
    pub keywords: Keywords,
}

impl Agent {
    /// Locale-agnostic page path.
    pub fn href(&self) -> String {
        format!("/agents/{}", self.slug)
    }
}

/// Look up an agent by id, ignoring case (`"a1"` finds `A1`).
pub fn agent_by_id(id: &str) -> Option<&'static Agent> {
    let id = id.trim();
    AGENTS.iter().find(|a| a.id.eq_ignore_ascii_case(id))
}

/// Agents in a category, in registry order.
pub fn agents_in(category: AgentCategory) -> impl Iterator<Item = &'static Agent> {
    AGENTS.iter().filter(move |a| a.category == category)
}

pub static AGENTS: &[Agent] = &[
    // A: Research Foundation
    Agent {
        id: "A1",
        slug: "research-question-refiner",
        category: AgentCategory::Foundation,
        name: Text::new("Research Question Refiner", "연구 질문 정제기"),
        description: Text::new(
            "Sharpens vague research ideas into focused, answerable questions using PICO and SPIDER frames.",
            "모호한 연구 아이디어를 PICO와 SPIDER 틀로 구체적이고 답할 수 있는 연구 질문으로 다듬습니다.",
        ),
        keywords: Keywords::new(
            &["research question", "PICO", "SPIDER", "hypothesis", "scope"],
            &["연구 질문", "PICO", "SPIDER", "가설", "연구 범위"],
        ),
    },
    Agent {
        id: "A2",
        slug: "theoretical-framework-architect",
        category: AgentCategory::Foundation,
        name: Text::new("Theoretical Framework Architect", "이론적 틀 설계자"),
        description: Text::new(
            "Proposes theoretical lenses beyond the obvious defaults and maps constructs to your question.",
            "뻔한 선택을 넘어서는 이론적 관점을 제안하고 구성개념을 연구 질문에 연결합니다.",
        ),
        keywords: Keywords::new(
            &["theory", "theoretical framework", "constructs", "model"],
            &["이론", "이론적 틀", "구성개념", "모형"],
        ),
    },
    Agent {
        id: "A3",
        slug: "devils-advocate",
        category: AgentCategory::Foundation,
        name: Text::new("Devil's Advocate", "악마의 대변인"),
        description: Text::new(
            "Stress-tests your argument by raising the strongest counterarguments a reviewer would bring.",
            "심사자가 제기할 가장 강력한 반론을 제시하여 논증을 점검합니다.",
        ),
        keywords: Keywords::new(
            &["critique", "counterargument", "reviewer", "weakness"],
            &["비판", "반론", "심사자", "약점"],
        ),
    },
    Agent {
        id: "A4",
        slug: "research-ethics-advisor",
        category: AgentCategory::Foundation,
        name: Text::new("Research Ethics Advisor", "연구 윤리 자문가"),
        description: Text::new(
            "Guides IRB preparation, informed consent and risk assessment for human subjects research.",
            "인간 대상 연구의 IRB 준비, 사전 동의, 위험 평가를 안내합니다.",
        ),
        keywords: Keywords::new(
            &["ethics", "IRB", "informed consent", "privacy"],
            &["윤리", "IRB", "사전 동의", "개인정보"],
        ),
    },
    Agent {
        id: "A5",
        slug: "paradigm-worldview-advisor",
        category: AgentCategory::Foundation,
        name: Text::new("Paradigm & Worldview Advisor", "패러다임 및 세계관 자문가"),
        description: Text::new(
            "Clarifies the ontological and epistemological stance behind your methodological choices.",
            "방법론 선택 뒤에 있는 존재론적, 인식론적 입장을 명확히 합니다.",
        ),
        keywords: Keywords::new(
            &["paradigm", "epistemology", "ontology", "positivism", "constructivism"],
            &["패러다임", "인식론", "존재론", "실증주의", "구성주의"],
        ),
    },
    Agent {
        id: "A6",
        slug: "conceptual-framework-visualizer",
        category: AgentCategory::Foundation,
        name: Text::new("Conceptual Framework Visualizer", "개념적 틀 시각화 도구"),
        description: Text::new(
            "Turns constructs and hypothesized paths into a clear conceptual diagram.",
            "구성개념과 가설 경로를 명확한 개념도로 바꿉니다.",
        ),
        keywords: Keywords::new(
            &["conceptual framework", "diagram", "visualization", "paths"],
            &["개념적 틀", "도식", "시각화", "경로"],
        ),
    },
    // B: Literature & Evidence
    Agent {
        id: "B1",
        slug: "systematic-literature-scout",
        category: AgentCategory::Evidence,
        name: Text::new("Systematic Literature Scout", "체계적 문헌 탐색가"),
        description: Text::new(
            "Builds reproducible search strings and screens databases following PRISMA guidance.",
            "재현 가능한 검색식을 만들고 PRISMA 지침에 따라 데이터베이스를 선별합니다.",
        ),
        keywords: Keywords::new(
            &["literature search", "PRISMA", "database", "search string", "systematic review"],
            &["문헌 검색", "PRISMA", "데이터베이스", "검색식", "체계적 문헌고찰"],
        ),
    },
    Agent {
        id: "B2",
        slug: "evidence-quality-appraiser",
        category: AgentCategory::Evidence,
        name: Text::new("Evidence Quality Appraiser", "근거 질 평가자"),
        description: Text::new(
            "Rates study quality and certainty of evidence with RoB 2 and GRADE.",
            "RoB 2와 GRADE로 연구의 질과 근거의 확실성을 평가합니다.",
        ),
        keywords: Keywords::new(
            &["risk of bias", "GRADE", "RoB 2", "quality appraisal"],
            &["비뚤림 위험", "GRADE", "RoB 2", "질 평가"],
        ),
    },
    Agent {
        id: "B3",
        slug: "effect-size-extractor",
        category: AgentCategory::Evidence,
        name: Text::new("Effect Size Extractor", "효과크기 추출기"),
        description: Text::new(
            "Extracts and converts effect sizes from reported statistics for later pooling.",
            "보고된 통계치에서 효과크기를 추출하고 변환하여 통합에 대비합니다.",
        ),
        keywords: Keywords::new(
            &["effect size", "Cohen's d", "Hedges' g", "meta-analysis", "conversion"],
            &["효과크기", "Cohen's d", "Hedges' g", "메타분석", "변환"],
        ),
    },
    Agent {
        id: "B4",
        slug: "research-radar",
        category: AgentCategory::Evidence,
        name: Text::new("Research Radar", "연구 레이더"),
        description: Text::new(
            "Monitors new publications and preprints relevant to your topic.",
            "주제와 관련된 새 논문과 프리프린트를 모니터링합니다.",
        ),
        keywords: Keywords::new(
            &["alerts", "preprints", "trends", "monitoring"],
            &["알림", "프리프린트", "동향", "모니터링"],
        ),
    },
    Agent {
        id: "B5",
        slug: "parallel-document-processor",
        category: AgentCategory::Evidence,
        name: Text::new("Parallel Document Processor", "병렬 문서 처리기"),
        description: Text::new(
            "Reads large batches of PDFs concurrently and extracts structured study data.",
            "대량의 PDF를 동시에 읽고 구조화된 연구 자료를 추출합니다.",
        ),
        keywords: Keywords::new(
            &["PDF", "batch", "extraction", "documents"],
            &["PDF", "일괄 처리", "추출", "문서"],
        ),
    },
    // C: Study Design & Meta-Analysis
    Agent {
        id: "C1",
        slug: "quantitative-design-consultant",
        category: AgentCategory::Design,
        name: Text::new("Quantitative Design Consultant", "양적 연구 설계 컨설턴트"),
        description: Text::new(
            "Recommends experimental, quasi-experimental and survey designs with power analysis.",
            "검정력 분석과 함께 실험, 준실험, 설문 설계를 추천합니다.",
        ),
        keywords: Keywords::new(
            &["quantitative", "experiment", "survey", "power analysis", "sample size"],
            &["양적 연구", "실험", "설문", "검정력 분석", "표본 크기"],
        ),
    },
    Agent {
        id: "C2",
        slug: "qualitative-design-consultant",
        category: AgentCategory::Design,
        name: Text::new("Qualitative Design Consultant", "질적 연구 설계 컨설턴트"),
        description: Text::new(
            "Helps choose among phenomenology, grounded theory, case study and narrative inquiry.",
            "현상학, 근거이론, 사례연구, 내러티브 탐구 중에서 선택하도록 돕습니다.",
        ),
        keywords: Keywords::new(
            &["qualitative", "phenomenology", "grounded theory", "case study"],
            &["질적 연구", "현상학", "근거이론", "사례연구"],
        ),
    },
    Agent {
        id: "C3",
        slug: "mixed-methods-design-consultant",
        category: AgentCategory::Design,
        name: Text::new("Mixed Methods Design Consultant", "혼합방법 설계 컨설턴트"),
        description: Text::new(
            "Designs convergent, explanatory and exploratory sequential mixed methods studies.",
            "수렴적, 설명적 순차, 탐색적 순차 혼합방법 연구를 설계합니다.",
        ),
        keywords: Keywords::new(
            &["mixed methods", "convergent", "sequential", "integration"],
            &["혼합방법", "수렴적 설계", "순차적 설계", "통합"],
        ),
    },
    Agent {
        id: "C4",
        slug: "experimental-materials-developer",
        category: AgentCategory::Design,
        name: Text::new("Experimental Materials Developer", "실험 자료 개발자"),
        description: Text::new(
            "Drafts stimuli, manipulation checks and intervention protocols.",
            "자극물, 조작 점검, 중재 프로토콜 초안을 작성합니다.",
        ),
        keywords: Keywords::new(
            &["stimuli", "manipulation check", "intervention", "protocol"],
            &["자극물", "조작 점검", "중재", "프로토콜"],
        ),
    },
    Agent {
        id: "C5",
        slug: "meta-analysis-master",
        category: AgentCategory::Design,
        name: Text::new("Meta-Analysis Master", "메타분석 마스터"),
        description: Text::new(
            "Plans and runs random-effects pooling, heterogeneity and publication bias diagnostics.",
            "무선효과 통합, 이질성, 출판 비뚤림 진단을 계획하고 수행합니다.",
        ),
        keywords: Keywords::new(
            &["meta-analysis", "random effects", "heterogeneity", "forest plot", "publication bias"],
            &["메타분석", "무선효과", "이질성", "숲 그림", "출판 비뚤림"],
        ),
    },
    Agent {
        id: "C6",
        slug: "data-integrity-guard",
        category: AgentCategory::Design,
        name: Text::new("Data Integrity Guard", "데이터 무결성 감시자"),
        description: Text::new(
            "Checks extracted data for duplicates, unit mismatches and impossible values.",
            "추출된 자료에서 중복, 단위 불일치, 불가능한 값을 점검합니다.",
        ),
        keywords: Keywords::new(
            &["data integrity", "duplicates", "validation", "extraction"],
            &["데이터 무결성", "중복", "검증", "추출"],
        ),
    },
    Agent {
        id: "C7",
        slug: "error-prevention-engine",
        category: AgentCategory::Design,
        name: Text::new("Error Prevention Engine", "오류 예방 엔진"),
        description: Text::new(
            "Flags common statistical and coding mistakes before they reach the results section.",
            "흔한 통계 및 코딩 실수를 결과 작성 전에 찾아냅니다.",
        ),
        keywords: Keywords::new(
            &["errors", "statistics", "sanity checks", "anomalies"],
            &["오류", "통계", "점검", "이상치"],
        ),
    },
    // D: Data Collection
    Agent {
        id: "D1",
        slug: "sampling-strategy-advisor",
        category: AgentCategory::Collection,
        name: Text::new("Sampling Strategy Advisor", "표집 전략 자문가"),
        description: Text::new(
            "Chooses probability or purposive sampling and justifies the sample size.",
            "확률 표집 또는 의도적 표집을 선택하고 표본 크기를 정당화합니다.",
        ),
        keywords: Keywords::new(
            &["sampling", "sample size", "purposive", "saturation"],
            &["표집", "표본 크기", "의도적 표집", "포화"],
        ),
    },
    Agent {
        id: "D2",
        slug: "interview-focus-group-specialist",
        category: AgentCategory::Collection,
        name: Text::new("Interview & Focus Group Specialist", "면담 및 포커스 그룹 전문가"),
        description: Text::new(
            "Writes semi-structured interview guides and focus group protocols.",
            "반구조화 면담 가이드와 포커스 그룹 프로토콜을 작성합니다.",
        ),
        keywords: Keywords::new(
            &["interview", "focus group", "interview guide", "probing"],
            &["면담", "포커스 그룹", "면담 가이드", "탐색 질문"],
        ),
    },
    Agent {
        id: "D3",
        slug: "observation-protocol-designer",
        category: AgentCategory::Collection,
        name: Text::new("Observation Protocol Designer", "관찰 프로토콜 설계자"),
        description: Text::new(
            "Structures field observation with coding sheets and reliability checks.",
            "코딩 시트와 신뢰도 점검으로 현장 관찰을 구조화합니다.",
        ),
        keywords: Keywords::new(
            &["observation", "field notes", "coding sheet", "inter-rater"],
            &["관찰", "현장 노트", "코딩 시트", "평정자 간 신뢰도"],
        ),
    },
    Agent {
        id: "D4",
        slug: "measurement-instrument-developer",
        category: AgentCategory::Collection,
        name: Text::new("Measurement Instrument Developer", "측정 도구 개발자"),
        description: Text::new(
            "Develops and validates scales with item analysis and factor structure checks.",
            "문항 분석과 요인 구조 점검으로 척도를 개발하고 타당화합니다.",
        ),
        keywords: Keywords::new(
            &["scale development", "validity", "reliability", "factor analysis"],
            &["척도 개발", "타당도", "신뢰도", "요인분석"],
        ),
    },
    // E: Analysis
    Agent {
        id: "E1",
        slug: "quantitative-analysis-guide",
        category: AgentCategory::Analysis,
        name: Text::new("Quantitative Analysis Guide", "양적 분석 가이드"),
        description: Text::new(
            "Selects statistical tests, checks assumptions and interprets output.",
            "통계 검정을 선택하고 가정을 점검하며 결과를 해석합니다.",
        ),
        keywords: Keywords::new(
            &["statistics", "regression", "SEM", "multilevel", "assumptions"],
            &["통계", "회귀분석", "구조방정식", "다층모형", "가정"],
        ),
    },
    Agent {
        id: "E2",
        slug: "qualitative-coding-specialist",
        category: AgentCategory::Analysis,
        name: Text::new("Qualitative Coding Specialist", "질적 코딩 전문가"),
        description: Text::new(
            "Supports thematic analysis with codebooks, memos and theme refinement.",
            "코드북, 메모, 주제 정제로 주제 분석을 지원합니다.",
        ),
        keywords: Keywords::new(
            &["thematic analysis", "coding", "codebook", "themes"],
            &["주제 분석", "코딩", "코드북", "주제"],
        ),
    },
    Agent {
        id: "E3",
        slug: "mixed-methods-integration",
        category: AgentCategory::Analysis,
        name: Text::new("Mixed Methods Integration", "혼합방법 통합"),
        description: Text::new(
            "Builds joint displays and meta-inferences from quantitative and qualitative strands.",
            "양적, 질적 자료로부터 통합 표시와 메타 추론을 구성합니다.",
        ),
        keywords: Keywords::new(
            &["joint display", "meta-inference", "integration", "mixed methods"],
            &["통합 표시", "메타 추론", "통합", "혼합방법"],
        ),
    },
    Agent {
        id: "E4",
        slug: "analysis-code-generator",
        category: AgentCategory::Analysis,
        name: Text::new("Analysis Code Generator", "분석 코드 생성기"),
        description: Text::new(
            "Produces reproducible R, Python and Stata scripts for your analysis plan.",
            "분석 계획에 맞는 재현 가능한 R, Python, Stata 스크립트를 생성합니다.",
        ),
        keywords: Keywords::new(
            &["R", "Python", "Stata", "code", "scripts"],
            &["R", "파이썬", "Stata", "코드", "스크립트"],
        ),
    },
    Agent {
        id: "E5",
        slug: "sensitivity-analysis-designer",
        category: AgentCategory::Analysis,
        name: Text::new("Sensitivity Analysis Designer", "민감도 분석 설계자"),
        description: Text::new(
            "Plans robustness checks, leave-one-out runs and alternative specifications.",
            "강건성 점검, 하나씩 제외 분석, 대안 모형 설정을 계획합니다.",
        ),
        keywords: Keywords::new(
            &["sensitivity analysis", "robustness", "leave-one-out", "specification"],
            &["민감도 분석", "강건성", "하나씩 제외", "모형 설정"],
        ),
    },
    // F: Quality & Validation
    Agent {
        id: "F1",
        slug: "internal-consistency-checker",
        category: AgentCategory::Quality,
        name: Text::new("Internal Consistency Checker", "내적 일관성 검사기"),
        description: Text::new(
            "Cross-checks numbers, claims and terminology across manuscript sections.",
            "원고 전체에서 수치, 주장, 용어의 일관성을 교차 점검합니다.",
        ),
        keywords: Keywords::new(
            &["consistency", "manuscript", "numbers", "terminology"],
            &["일관성", "원고", "수치", "용어"],
        ),
    },
    Agent {
        id: "F2",
        slug: "checklist-manager",
        category: AgentCategory::Quality,
        name: Text::new("Checklist Manager", "체크리스트 관리자"),
        description: Text::new(
            "Applies CONSORT, STROBE, COREQ and PRISMA reporting checklists.",
            "CONSORT, STROBE, COREQ, PRISMA 보고 체크리스트를 적용합니다.",
        ),
        keywords: Keywords::new(
            &["reporting guidelines", "CONSORT", "STROBE", "COREQ", "checklist"],
            &["보고 지침", "CONSORT", "STROBE", "COREQ", "체크리스트"],
        ),
    },
    Agent {
        id: "F3",
        slug: "reproducibility-auditor",
        category: AgentCategory::Quality,
        name: Text::new("Reproducibility Auditor", "재현성 감사자"),
        description: Text::new(
            "Audits data, code and materials sharing against open science standards.",
            "자료, 코드, 연구 재료 공유를 개방 과학 기준에 따라 감사합니다.",
        ),
        keywords: Keywords::new(
            &["reproducibility", "open science", "data sharing", "OSF"],
            &["재현성", "개방 과학", "자료 공유", "OSF"],
        ),
    },
    Agent {
        id: "F4",
        slug: "bias-trustworthiness-detector",
        category: AgentCategory::Quality,
        name: Text::new("Bias & Trustworthiness Detector", "편향 및 신뢰성 탐지기"),
        description: Text::new(
            "Surfaces researcher bias and evaluates credibility, transferability and dependability.",
            "연구자 편향을 드러내고 신빙성, 전이 가능성, 의존 가능성을 평가합니다.",
        ),
        keywords: Keywords::new(
            &["bias", "trustworthiness", "credibility", "reflexivity"],
            &["편향", "신뢰성", "신빙성", "성찰성"],
        ),
    },
    Agent {
        id: "F5",
        slug: "humanization-verifier",
        category: AgentCategory::Quality,
        name: Text::new("Humanization Verifier", "인간화 검증기"),
        description: Text::new(
            "Verifies that edited prose keeps citations, statistics and meaning intact.",
            "수정된 문장이 인용, 통계, 의미를 그대로 유지하는지 검증합니다.",
        ),
        keywords: Keywords::new(
            &["verification", "citations", "meaning", "prose"],
            &["검증", "인용", "의미", "문장"],
        ),
    },
    // G: Publication & Communication
    Agent {
        id: "G1",
        slug: "journal-matcher",
        category: AgentCategory::Communication,
        name: Text::new("Journal Matcher", "학술지 매칭기"),
        description: Text::new(
            "Shortlists journals by scope, impact and open access policy.",
            "범위, 영향력, 오픈 액세스 정책으로 투고할 학술지를 추립니다.",
        ),
        keywords: Keywords::new(
            &["journal", "submission", "impact factor", "open access"],
            &["학술지", "투고", "영향력 지수", "오픈 액세스"],
        ),
    },
    Agent {
        id: "G2",
        slug: "academic-communicator",
        category: AgentCategory::Communication,
        name: Text::new("Academic Communicator", "학술 커뮤니케이터"),
        description: Text::new(
            "Adapts findings into plain-language summaries, posters and talks.",
            "연구 결과를 쉬운 요약, 포스터, 발표로 재구성합니다.",
        ),
        keywords: Keywords::new(
            &["plain language", "poster", "presentation", "outreach"],
            &["쉬운 언어", "포스터", "발표", "대중 소통"],
        ),
    },
    Agent {
        id: "G3",
        slug: "peer-review-strategist",
        category: AgentCategory::Communication,
        name: Text::new("Peer Review Strategist", "동료 심사 전략가"),
        description: Text::new(
            "Drafts point-by-point responses to reviewer comments.",
            "심사 의견에 대한 항목별 답변서 초안을 작성합니다.",
        ),
        keywords: Keywords::new(
            &["peer review", "revision", "response letter", "reviewer comments"],
            &["동료 심사", "수정", "답변서", "심사 의견"],
        ),
    },
    Agent {
        id: "G4",
        slug: "preregistration-composer",
        category: AgentCategory::Communication,
        name: Text::new("Pre-registration Composer", "사전 등록 작성기"),
        description: Text::new(
            "Writes OSF and AsPredicted pre-registrations and registered report protocols.",
            "OSF 및 AsPredicted 사전 등록서와 등록 보고서 프로토콜을 작성합니다.",
        ),
        keywords: Keywords::new(
            &["preregistration", "registered report", "OSF", "AsPredicted"],
            &["사전 등록", "등록 보고서", "OSF", "AsPredicted"],
        ),
    },
    Agent {
        id: "G5",
        slug: "academic-style-auditor",
        category: AgentCategory::Communication,
        name: Text::new("Academic Style Auditor", "학술 문체 감사자"),
        description: Text::new(
            "Detects formulaic AI writing patterns in manuscripts.",
            "원고에서 정형화된 AI 글쓰기 패턴을 탐지합니다.",
        ),
        keywords: Keywords::new(
            &["writing style", "AI detection", "patterns", "manuscript"],
            &["글쓰기 문체", "AI 탐지", "패턴", "원고"],
        ),
    },
    Agent {
        id: "G6",
        slug: "academic-style-humanizer",
        category: AgentCategory::Communication,
        name: Text::new("Academic Style Humanizer", "학술 문체 인간화 도구"),
        description: Text::new(
            "Rewrites flagged passages into natural scholarly prose.",
            "지적된 구절을 자연스러운 학술 문장으로 다시 씁니다.",
        ),
        keywords: Keywords::new(
            &["rewriting", "humanize", "academic writing", "style"],
            &["다시 쓰기", "인간화", "학술 글쓰기", "문체"],
        ),
    },
    // H: Specialized Methods
    Agent {
        id: "H1",
        slug: "ethnographic-research-advisor",
        category: AgentCategory::Specialized,
        name: Text::new("Ethnographic Research Advisor", "문화기술지 연구 자문가"),
        description: Text::new(
            "Plans fieldwork entry, participant observation and thick description.",
            "현장 진입, 참여 관찰, 두꺼운 기술을 계획합니다.",
        ),
        keywords: Keywords::new(
            &["ethnography", "fieldwork", "participant observation", "culture"],
            &["문화기술지", "현장 연구", "참여 관찰", "문화"],
        ),
    },
    Agent {
        id: "H2",
        slug: "action-research-facilitator",
        category: AgentCategory::Specialized,
        name: Text::new("Action Research Facilitator", "실행 연구 촉진자"),
        description: Text::new(
            "Structures plan, act, observe and reflect cycles with stakeholders.",
            "이해관계자와 함께 계획, 실행, 관찰, 성찰 순환을 구조화합니다.",
        ),
        keywords: Keywords::new(
            &["action research", "participatory", "cycles", "stakeholders"],
            &["실행 연구", "참여적 연구", "순환", "이해관계자"],
        ),
    },
    // I: Systematic Review Automation
    Agent {
        id: "I0",
        slug: "scholar-agent-orchestrator",
        category: AgentCategory::SystematicReview,
        name: Text::new("Scholar Agent Orchestrator", "학술 에이전트 조율자"),
        description: Text::new(
            "Coordinates the retrieval, screening and synthesis agents of a systematic review pipeline.",
            "체계적 문헌고찰 파이프라인의 검색, 선별, 종합 에이전트를 조율합니다.",
        ),
        keywords: Keywords::new(
            &["orchestration", "pipeline", "systematic review", "automation"],
            &["조율", "파이프라인", "체계적 문헌고찰", "자동화"],
        ),
    },
    Agent {
        id: "I1",
        slug: "paper-retrieval-agent",
        category: AgentCategory::SystematicReview,
        name: Text::new("Paper Retrieval Agent", "논문 검색 에이전트"),
        description: Text::new(
            "Queries Semantic Scholar, OpenAlex and arXiv and deduplicates the records.",
            "Semantic Scholar, OpenAlex, arXiv를 검색하고 중복 레코드를 제거합니다.",
        ),
        keywords: Keywords::new(
            &["retrieval", "Semantic Scholar", "OpenAlex", "arXiv", "deduplication"],
            &["검색", "Semantic Scholar", "OpenAlex", "arXiv", "중복 제거"],
        ),
    },
    Agent {
        id: "I2",
        slug: "screening-assistant",
        category: AgentCategory::SystematicReview,
        name: Text::new("Screening Assistant", "선별 도우미"),
        description: Text::new(
            "Screens titles and abstracts against eligibility criteria with explained decisions.",
            "적격성 기준에 따라 제목과 초록을 선별하고 판단 근거를 설명합니다.",
        ),
        keywords: Keywords::new(
            &["screening", "eligibility", "inclusion criteria", "abstracts"],
            &["선별", "적격성", "포함 기준", "초록"],
        ),
    },
    Agent {
        id: "I3",
        slug: "rag-builder",
        category: AgentCategory::SystematicReview,
        name: Text::new("RAG Builder", "RAG 구축기"),
        description: Text::new(
            "Indexes included full texts into a retrieval-augmented knowledge base for synthesis.",
            "포함된 전문을 종합을 위한 검색 증강 지식 베이스로 색인합니다.",
        ),
        keywords: Keywords::new(
            &["RAG", "vector database", "embeddings", "knowledge base"],
            &["RAG", "벡터 데이터베이스", "임베딩", "지식 베이스"],
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_size() {
        assert!(AGENTS.len() >= 40, "got {} agents", AGENTS.len());
    }

    #[test]
    fn test_ids_and_slugs_unique() {
        let ids: HashSet<_> = AGENTS.iter().map(|a| a.id).collect();
        let slugs: HashSet<_> = AGENTS.iter().map(|a| a.slug).collect();
        assert_eq!(ids.len(), AGENTS.len());
        assert_eq!(slugs.len(), AGENTS.len());
    }

    #[test]
    fn test_id_prefix_matches_category() {
        for agent in AGENTS {
            assert!(
                agent.id.starts_with(agent.category.letter()),
                "{} is filed under {:?}",
                agent.id,
                agent.category
            );
        }
    }

    #[test]
    fn test_agent_by_id_ignores_case() {
        let agent = agent_by_id("a1").unwrap();
        assert_eq!(agent.id, "A1");
        assert_eq!(agent.name.en, "Research Question Refiner");
        assert!(agent_by_id("Z9").is_none());
    }

    #[test]
    fn test_agents_in_category() {
        let foundation: Vec<_> = agents_in(AgentCategory::Foundation).map(|a| a.id).collect();
        assert_eq!(foundation, vec!["A1", "A2", "A3", "A4", "A5", "A6"]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(AgentCategory::parse("design"), Some(AgentCategory::Design));
        assert_eq!(AgentCategory::parse("c"), Some(AgentCategory::Design));
        assert_eq!(
            AgentCategory::parse("Systematic-Review"),
            Some(AgentCategory::SystematicReview)
        );
        assert_eq!(AgentCategory::parse("unknown"), None);
    }

    #[test]
    fn test_href() {
        let agent = agent_by_id("C5").unwrap();
        assert_eq!(agent.href(), "/agents/meta-analysis-master");
    }
}
