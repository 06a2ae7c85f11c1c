//! adopta-faq - AdoptaFácil FAQ 응답 시스템
//!
//! 고정된 FAQ 목록에 대해 퍼지 매칭 → 키워드 → 인텐트 → 기본 응답 순서로
//! 답변을 고르고, 별도로 LLM 기반 입양 소개글 생성 클라이언트를 제공합니다.

pub mod cli;
pub mod describe;
pub mod knowledge;

// Re-exports
pub use describe::{DescribeConfig, DescribeError, DescriptionProvider, PetDescriber, PetProfile};
pub use knowledge::{
    AnswerResult, FaqEntry, FaqResolver, FuzzyMatcher, Intent, IntentClassifier, KeywordMatcher,
    KnowledgeBase, MatchResult, ResolverConfig, Strategy,
};
